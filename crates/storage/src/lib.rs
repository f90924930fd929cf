//! Storage layer for Nightswitch
//!
//! This crate provides the durable, origin-scoped key-value storage that
//! backs persisted user preferences.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod area;

pub use area::{StorageArea, StorageConfig, StorageError};
