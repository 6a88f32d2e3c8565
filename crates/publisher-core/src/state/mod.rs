//! Command/event boundary around the composer.
//!
//! Callers describe what happened as a [`Command`], hand it to a [`Store`]
//! and react to the returned [`Event`]s.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod script;
pub mod store;
pub mod types;

pub use dispatch::ComposerStore;
pub use errors::DispatchError;
pub use events::{Event, IgnoreReason};
pub use store::Store;
pub use types::Command;
