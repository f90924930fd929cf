//! Theme enumeration and icon glyph mapping
//!
//! Two themes are supported:
//! - Light: the bright default appearance
//! - Dark: the inverted night appearance
//!
//! The icon glyph shown on the toggle control is fully derived from the
//! theme and always advertises the appearance a click switches to:
//! light shows the moon, dark shows the sun.

use serde::{Deserialize, Serialize};

/// The visual theme of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The string form used for the document attribute and the persisted
    /// preference
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a document theme attribute for flipping purposes
    ///
    /// Strict two-state reading: `"light"` is light, anything else
    /// (including an unset attribute) counts as dark.
    pub fn for_attribute(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The opposite theme
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The icon glyph shown while this theme is active
    pub fn icon(self) -> IconGlyph {
        match self {
            Theme::Light => IconGlyph::Moon,
            Theme::Dark => IconGlyph::Sun,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Icon glyph on the toggle control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    /// Moon glyph ("click to go dark")
    Moon,
    /// Sun glyph ("click to go light")
    Sun,
}

impl IconGlyph {
    /// The presentational class written to the icon element
    pub fn class(&self) -> &'static str {
        match self {
            IconGlyph::Moon => "bi bi-moon",
            IconGlyph::Sun => "bi bi-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_as_str() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("dim".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }

    #[test]
    fn test_flip_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.flipped().flipped(), theme);
        }
    }

    #[test]
    fn test_for_attribute() {
        assert_eq!(Theme::for_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::for_attribute(Some("dark")), Theme::Dark);
        // Anything that is not exactly "light" counts as dark
        assert_eq!(Theme::for_attribute(Some("Light")), Theme::Dark);
        assert_eq!(Theme::for_attribute(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::for_attribute(None), Theme::Dark);
    }

    #[test]
    fn test_icon_mapping() {
        assert_eq!(Theme::Light.icon(), IconGlyph::Moon);
        assert_eq!(Theme::Dark.icon(), IconGlyph::Sun);
    }

    #[test]
    fn test_icon_class() {
        assert_eq!(IconGlyph::Moon.class(), "bi bi-moon");
        assert_eq!(IconGlyph::Sun.class(), "bi bi-sun");
    }

    #[test]
    fn test_theme_serialization() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let deserialized: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(deserialized, Theme::Light);
    }

    #[test]
    fn test_invalid_stored_form_does_not_deserialize() {
        assert!(serde_json::from_str::<Theme>("\"dim\"").is_err());
    }
}
