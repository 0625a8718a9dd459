//! Core primitives, independent of any particular bag type.

pub mod event;

// Re-exports for convenience
pub use event::{Event, ListenerId};
