// Client-side entity shapes, deserialization-tolerant at the fetch boundary.

pub mod connection;
pub mod event;
pub mod forum;
pub mod profile;

pub use connection::Connection;
pub use event::{Event, EventCategory, NewEvent};
pub use forum::{Comment, ForumPost, NewPost};
pub use profile::{RatedTag, UserProfile};
