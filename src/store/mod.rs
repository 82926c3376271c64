//! Page-scoped collection stores. Each store exclusively owns the
//! collections its page renders and is the only place local mutations and
//! server reconciliation touch them.

pub mod connections;
pub mod events;
pub mod forums;

pub use connections::ConnectionGraph;
pub use events::EventBoard;
pub use forums::ForumBoard;

/// Outcome of a submitted mutation. The in-flight await period is the
/// implicit `Pending` state, guarded so the same action cannot be
/// submitted twice concurrently. `Failed` means the optimistic local
/// change was reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Confirmed,
    Failed,
}

/// Load state of a fetched collection, kept alongside the data so a view
/// can distinguish "no data" from "failed to load".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}
