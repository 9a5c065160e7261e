//! Change notification infrastructure for the hostel backend.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ChangeEvent`]: the envelope describing one data change, serialized
//!   as-is onto the realtime channel.

pub mod bus;
pub mod change;

pub use bus::EventBus;
pub use change::{ChangeAction, ChangeEvent, Table};
