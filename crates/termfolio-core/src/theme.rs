//! Display themes.
//!
//! The theme only affects presentation; the core crate knows the names,
//! the TUI maps each one to a palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Green,
    Amber,
    Blue,
    Purple,
    Cyan,
}

impl Theme {
    /// Returns all themes in display order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Green,
            Theme::Amber,
            Theme::Blue,
            Theme::Purple,
            Theme::Cyan,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Amber => "amber",
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Cyan => "cyan",
        }
    }

    /// Comma-separated list of valid names, used in error lines.
    pub fn names_list() -> String {
        Theme::all()
            .iter()
            .map(|theme| theme.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a theme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (valid: {})",
            self.0,
            Theme::names_list()
        )
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| UnknownTheme(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("AMBER".parse::<Theme>(), Ok(Theme::Amber));
        assert_eq!(" cyan ".parse::<Theme>(), Ok(Theme::Cyan));
    }

    #[test]
    fn test_parse_unknown_lists_options() {
        let err = "magenta".parse::<Theme>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("magenta"));
        assert!(message.contains("green, amber, blue, purple, cyan"));
    }

    #[test]
    fn test_default_is_green() {
        assert_eq!(Theme::default(), Theme::Green);
    }
}
