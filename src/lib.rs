//! dynscene - observable property bags for time-dynamic scene entities
//!
//! Re-exports all modules for use by binary targets.

// Core primitives (events)
pub mod core;

// Bag types and the descriptor machinery
pub mod entities;
pub mod error;

// Binary support
pub mod cli;
pub mod config;
pub mod shell;

// Re-export commonly used types from core
pub use core::event::{Event, ListenerId};

// Re-export entities
pub use entities::{
    AttributeBag, PolygonGraphics, PolylineGraphics, PropertyChanged, PropertyDescriptor,
    PropertyHandle,
};
pub use error::{Error, Result};
