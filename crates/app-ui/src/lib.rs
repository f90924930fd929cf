//! User interface layer for Nightswitch
//!
//! This crate provides the theme domain and the page-lifecycle-bound
//! toggle unit that keeps three pieces of state in agreement:
//!
//! - the document root's theme attribute (current theme for this page),
//! - the toggle control's icon glyph (derived from the theme),
//! - the persisted preference (current theme across page loads).
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_ui::document::{DocumentSurface, PageDocument, THEME_ATTRIBUTE};
//! use app_ui::theme::Theme;
//! use app_ui::toggle::ThemeToggle;
//! use storage::StorageArea;
//!
//! let store = Arc::new(StorageArea::in_memory().unwrap());
//! let document = Arc::new(PageDocument::new().with_attribute(THEME_ATTRIBUTE, "dark"));
//! let toggle = ThemeToggle::new(store, document.clone());
//!
//! toggle.initialize().unwrap();
//! assert_eq!(toggle.toggle().unwrap(), Theme::Light);
//! assert_eq!(document.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod theme;
pub mod toggle;

// Re-export commonly used types
pub use document::{DocumentSurface, PageDocument, THEME_ATTRIBUTE};
pub use theme::{IconGlyph, Theme};
pub use toggle::{PreferenceStore, ThemeToggle, ToggleError, THEME_KEY};
