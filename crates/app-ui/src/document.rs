//! Document surface abstraction
//!
//! The toggle unit mutates exactly two pieces of page state: the theme
//! attribute on the document root and the class of the toggle control's
//! icon element. [`DocumentSurface`] is that contract; [`PageDocument`]
//! is the in-process implementation the page and the toggle share. The
//! stylesheet rules that turn the attribute into visuals live outside
//! this crate.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Attribute on the document root holding the current theme
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// The slice of the page the toggle unit can see and mutate
pub trait DocumentSurface: Send + Sync {
    /// Read an attribute from the document root
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute on the document root
    fn set_attribute(&self, name: &str, value: &str);

    /// Read the toggle control icon's class
    fn icon_class(&self) -> String;

    /// Overwrite the toggle control icon's class entirely
    fn set_icon_class(&self, class: &str);
}

/// Shared in-process document state
///
/// The hosting page constructs this with whatever server-rendered
/// defaults it carries, then hands a clone of the handle to the toggle
/// unit. Interior locking keeps the surface shareable; all access is
/// short and non-blocking.
pub struct PageDocument {
    attributes: RwLock<HashMap<String, String>>,
    icon_class: RwLock<String>,
}

impl PageDocument {
    /// Create an empty document with no attributes and no icon class
    pub fn new() -> Self {
        Self {
            attributes: RwLock::new(HashMap::new()),
            icon_class: RwLock::new(String::new()),
        }
    }

    /// Set a root attribute as part of construction (server-rendered default)
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.write().insert(name.into(), value.into());
        self
    }

    /// Set the icon class as part of construction
    pub fn with_icon_class(self, class: impl Into<String>) -> Self {
        *self.icon_class.write() = class.into();
        self
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSurface for PageDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.write().insert(name.to_string(), value.to_string());
    }

    fn icon_class(&self) -> String {
        self.icon_class.read().clone()
    }

    fn set_icon_class(&self, class: &str) {
        *self.icon_class.write() = class.to_string();
    }
}
