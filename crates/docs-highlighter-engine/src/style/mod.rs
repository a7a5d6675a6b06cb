//! # Style tables
//!
//! Languages, fonts and themes the highlighter knows about. Lookups are by a
//! case-insensitive key and simply return `None` for anything unknown; the
//! callers decide whether that's worth a diagnostic.

mod builtin;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parsing::CommentDelimiters;

pub const DEFAULT_LANGUAGE: &str = "go";
pub const DEFAULT_FONT: &str = "Courier New";
pub const DEFAULT_FONT_SIZE: f64 = 11.0;
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_SHORTCUTS: bool = false;

/// An RGB colour with channels in `0.0..=1.0`, as the host expects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// From 8-bit channels.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            red: ((rgb >> 16) & 0xff) as f32 / 255.0,
            green: ((rgb >> 8) & 0xff) as f32 / 255.0,
            blue: (rgb & 0xff) as f32 / 255.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub comment: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub name: String,
    /// Lowercase keyword to its colour.
    pub keywords: BTreeMap<String, Color>,
    /// Lowercase shortcut token to the text it expands to.
    pub shortcuts: BTreeMap<String, String>,
    /// Comment forms, tried in this order.
    pub comments: Vec<CommentDelimiters>,
}

#[derive(Debug, Clone, Default)]
pub struct StyleTables {
    languages: BTreeMap<String, Language>,
    fonts: BTreeMap<String, String>,
    themes: BTreeMap<String, Theme>,
}

impl StyleTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables shipped with the highlighter.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages
            .insert(language.name.to_lowercase(), language);
        self
    }

    /// Registers `font` under the identifier `key` (as written in `#font=key`).
    pub fn with_font(mut self, key: &str, font: impl Into<String>) -> Self {
        self.fonts.insert(key.to_lowercase(), font.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.themes.insert(theme.name.to_lowercase(), theme);
        self
    }

    pub fn language(&self, key: &str) -> Option<&Language> {
        self.languages.get(&key.to_lowercase())
    }

    pub fn font(&self, key: &str) -> Option<&str> {
        self.fonts.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn theme(&self, key: &str) -> Option<&Theme> {
        self.themes.get(&key.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        let tables = StyleTables::builtin();
        assert_eq!(tables.language("JAVA").map(|l| l.name.as_str()), Some("java"));
        assert_eq!(tables.font("Courier"), Some(DEFAULT_FONT));
        assert!(tables.theme("Dark").is_some());
    }

    #[test]
    fn unknown_keys_are_none() {
        let tables = StyleTables::builtin();
        assert!(tables.language("cobol").is_none());
        assert!(tables.font("comic_sans").is_none());
        assert!(tables.theme("neon").is_none());
    }

    #[test]
    fn defaults_exist_in_builtin_tables() {
        let tables = StyleTables::builtin();
        assert!(tables.language(DEFAULT_LANGUAGE).is_some());
        assert!(tables.theme(DEFAULT_THEME).is_some());
        assert!(tables.language("RUST").is_some());
    }

    #[test]
    fn keyword_and_shortcut_keys_are_lowercase() {
        let tables = StyleTables::builtin();
        for lang in tables.languages.values() {
            assert!(lang.keywords.keys().all(|k| *k == k.to_lowercase()), "{}", lang.name);
            assert!(lang.shortcuts.keys().all(|k| *k == k.to_lowercase()), "{}", lang.name);
            assert!(!lang.comments.is_empty(), "{}", lang.name);
        }
    }

    #[test]
    fn hex_colour_channels() {
        let c = Color::hex(0xff8000);
        assert_eq!(c.red, 1.0);
        assert!((c.green - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.blue, 0.0);
    }
}
