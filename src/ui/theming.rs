// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme handling.

use serde::{Deserialize, Serialize};

/// The two themes the widget can render in. Persistence stores this only once
/// the user has chosen explicitly; until then the system preference applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads the current system preference. Anything that is not a positive
    /// dark signal (including detection errors) counts as light.
    #[must_use]
    pub fn system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Glyph on the theme toggle: the mode a press switches to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_and_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(
            ThemeMode::Light.toggle_glyph(),
            ThemeMode::Dark.toggle_glyph()
        );
    }

    #[test]
    fn is_dark_matches_variant() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn serde_uses_lowercase() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([("mode", ThemeMode::Dark)]))
            .expect("serialize");
        assert!(toml.contains("\"dark\""));
    }
}
