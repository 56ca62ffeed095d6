use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme of a rendered card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses a theme name; only "dark" selects the dark theme
    pub fn from_name(name: &str) -> Self {
        if name == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "rgba(255, 255, 255, 1)",
                text: "#000000",
                subtle_text: "#666666",
                accent: "#3390D6",
                shadow: "rgba(0,0,0,0.06)",
            },
            Self::Dark => Palette {
                background: "rgba(42, 42, 42, 1)",
                text: "#ffffff",
                subtle_text: "#AAAAAA",
                accent: "#8DD5FF",
                shadow: "rgba(0,0,0,0.3)",
            },
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Theme-dependent colours, as CSS colour strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    /// Handle line, or the hint on the error card
    pub subtle_text: &'static str,
    /// Extra statistic line, or the logo on the error card
    pub accent: &'static str,
    pub shadow: &'static str,
}

impl Palette {
    /// Colours of the "unable to load" card, independent of theme
    pub const fn error() -> Self {
        Self {
            background: "rgba(255, 255, 255, 0.95)",
            text: "#333333",
            subtle_text: "#666666",
            accent: "#0088CC",
            shadow: "rgba(0,0,0,0.15)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("DARK"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Light);
        assert_eq!(Theme::from_name(" dark"), Theme::Light);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
        assert_eq!(Theme::from_name("midnight"), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(light.accent, "#3390D6");
        assert_eq!(dark.accent, "#8DD5FF");
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
