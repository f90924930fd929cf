//! The theme toggle behavior unit
//!
//! `ThemeToggle` is page-lifecycle-bound rather than a library surface:
//! it reacts to the page-ready and toggle-click events delivered through
//! [`app_platform::EventHandler`] and keeps the document theme attribute,
//! the icon glyph, and the persisted preference in agreement.

use std::sync::Arc;
use thiserror::Error;

use app_platform::{EventHandler, UiEvent};
use storage::{StorageArea, StorageError};

use crate::document::{DocumentSurface, THEME_ATTRIBUTE};
use crate::theme::Theme;

/// Fixed key of the persisted theme preference
pub const THEME_KEY: &str = "theme";

/// Errors from the toggle unit
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The settings store failed to read or write the preference
    #[error("Preference storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for toggle operations
pub type Result<T> = std::result::Result<T, ToggleError>;

/// Settings-store seam for the persisted theme preference
///
/// Injected rather than reached for globally so the unit can be tested
/// against a fake store.
pub trait PreferenceStore: Send + Sync {
    /// Read the persisted theme, `None` when no preference was ever saved
    fn load_theme(&self) -> Result<Option<Theme>>;

    /// Persist the theme, overwriting any prior entry
    fn store_theme(&self, theme: Theme) -> Result<()>;
}

impl PreferenceStore for StorageArea {
    fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(self.get(THEME_KEY)?)
    }

    fn store_theme(&self, theme: Theme) -> Result<()> {
        Ok(self.set(THEME_KEY, &theme)?)
    }
}

/// Persisted light/dark theme toggle for one page
pub struct ThemeToggle {
    store: Arc<dyn PreferenceStore>,
    document: Arc<dyn DocumentSurface>,
}

impl ThemeToggle {
    /// Create a toggle unit over a settings store and a document surface
    pub fn new(store: Arc<dyn PreferenceStore>, document: Arc<dyn DocumentSurface>) -> Self {
        Self { store, document }
    }

    /// Restore the persisted theme, if any
    ///
    /// Runs once when the page is ready. Without a stored preference the
    /// document's server-rendered default attribute and icon are left
    /// untouched.
    pub fn initialize(&self) -> Result<()> {
        if let Some(theme) = self.store.load_theme()? {
            self.apply(theme);
            tracing::debug!(%theme, "restored persisted theme");
        }
        Ok(())
    }

    /// Flip the theme, update the icon, and persist the new value
    ///
    /// The current attribute is read at the moment of activation; `"light"`
    /// flips to dark and any other value (unset included) flips to light.
    pub fn toggle(&self) -> Result<Theme> {
        let current = self.document.attribute(THEME_ATTRIBUTE);
        let next = Theme::for_attribute(current.as_deref()).flipped();

        // Same order as the visible mutation: attribute and icon first,
        // then the write-through to storage.
        self.apply(next);
        self.store.store_theme(next)?;
        tracing::debug!(theme = %next, "theme toggled");

        Ok(next)
    }

    fn apply(&self, theme: Theme) {
        self.document.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.document.set_icon_class(theme.icon().class());
    }
}

impl EventHandler for ThemeToggle {
    fn handle_event(&mut self, event: UiEvent) {
        let result = match event {
            UiEvent::Ready => self.initialize(),
            UiEvent::ToggleClick => self.toggle().map(|_| ()),
        };

        // Failures surface as diagnostics only; no retry, no fallback.
        if let Err(error) = result {
            tracing::warn!(%error, ?event, "theme toggle event failed");
        }
    }
}
