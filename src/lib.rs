// GeekedIn client core - everything below the view layer

// Backend access
pub mod api;
pub mod wire;

// Entity shapes
pub mod models;

// Client-side engines
pub mod filter;
pub mod store;

// Process-wide session state
pub mod session;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{ClientError, ClientResult};
