//! Host environment seam for Nightswitch
//!
//! This crate models the hosting page's event dispatch: behavior units
//! register against an event source, and the environment delivers events
//! to them strictly one at a time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod events;

pub use events::{EmitError, EventEmitter, EventHandler, EventSource, UiEvent};
