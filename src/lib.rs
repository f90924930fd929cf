//! Nightswitch — persisted light/dark theme toggling for an application page
//!
//! On page-ready the toggle unit restores the stored theme preference and
//! applies it to the document; every activation of the toggle control flips
//! the theme, swaps the icon glyph, and writes the choice back through the
//! settings store.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use nightswitch::{mount, PageDocument, StorageArea, Theme, THEME_ATTRIBUTE};
//!
//! let store = Arc::new(StorageArea::in_memory().unwrap());
//! let document = Arc::new(PageDocument::new().with_attribute(THEME_ATTRIBUTE, "dark"));
//!
//! let (toggle, _source, _emitter) = mount(store, document.clone());
//! toggle.initialize().unwrap();
//! assert_eq!(toggle.toggle().unwrap(), Theme::Light);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

pub use app_platform::{EmitError, EventEmitter, EventHandler, EventSource, UiEvent};
pub use app_ui::{
    DocumentSurface, IconGlyph, PageDocument, PreferenceStore, Theme, ThemeToggle, ToggleError,
    THEME_ATTRIBUTE, THEME_KEY,
};
pub use storage::{StorageArea, StorageConfig, StorageError};

/// Wire a toggle unit to a page
///
/// Builds the event plumbing and the [`ThemeToggle`] over the given store
/// and document. The hosting page keeps the [`EventEmitter`] and fires
/// `ready()` once and `click()` per activation; the [`EventSource`] drives
/// the toggle, typically via [`EventSource::run`].
pub fn mount(
    store: Arc<dyn PreferenceStore>,
    document: Arc<dyn DocumentSurface>,
) -> (ThemeToggle, EventSource, EventEmitter) {
    let (source, emitter) = EventSource::new();
    (ThemeToggle::new(store, document), source, emitter)
}
