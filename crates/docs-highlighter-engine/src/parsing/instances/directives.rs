use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::eq_ignore_case;

pub const FORMAT_DIRECTIVE: &str = "#format";
pub const SHORTCUTS_DIRECTIVE: &str = "#shortcuts";

static LANG_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^#lang=(\w+)$"));
static FONT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^#font=(\w+)$"));
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^#size=([0-9]*\.?[0-9]+)$"));
static THEME_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^#theme=(\w+)$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("directive patterns are valid")
}

/// A header token that configures one setting of a code instance.
///
/// Values are carried as written; whether they name anything real is for the
/// header to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Format,
    Shortcuts,
    Language(String),
    Font(String),
    FontSize(String),
    Theme(String),
}

impl Directive {
    /// Recognizes a single whitespace-free token. Patterns are tried in a
    /// fixed order and the first hit wins.
    pub fn recognize(token: &str) -> Option<Self> {
        if eq_ignore_case(token, FORMAT_DIRECTIVE) {
            return Some(Self::Format);
        }
        if eq_ignore_case(token, SHORTCUTS_DIRECTIVE) {
            return Some(Self::Shortcuts);
        }
        let capture = |re: &Regex| re.captures(token).map(|caps| caps[1].to_string());
        if let Some(name) = capture(&LANG_RE) {
            return Some(Self::Language(name));
        }
        if let Some(name) = capture(&FONT_RE) {
            return Some(Self::Font(name));
        }
        if let Some(size) = capture(&SIZE_RE) {
            return Some(Self::FontSize(size));
        }
        capture(&THEME_RE).map(Self::Theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_pattern_compiles() {
        for re in [&LANG_RE, &FONT_RE, &SIZE_RE, &THEME_RE] {
            assert_eq!(re.captures_len(), 2, "{}", re.as_str());
        }
    }

    #[rstest]
    #[case("#format", Some(Directive::Format))]
    #[case("#FORMAT", Some(Directive::Format))]
    #[case("#shortcuts", Some(Directive::Shortcuts))]
    #[case("#lang=java", Some(Directive::Language("java".into())))]
    #[case("#LANG=Go", Some(Directive::Language("Go".into())))]
    #[case("#font=roboto_mono", Some(Directive::Font("roboto_mono".into())))]
    #[case("#size=12", Some(Directive::FontSize("12".into())))]
    #[case("#size=10.5", Some(Directive::FontSize("10.5".into())))]
    #[case("#theme=light", Some(Directive::Theme("light".into())))]
    #[case("#lang=", None)]
    #[case("#lang=c++", None)]
    #[case("#size=big", None)]
    #[case("lang=java", None)]
    #[case("#formatting", None)]
    #[case("<conf>", None)]
    fn recognizes_directives(#[case] token: &str, #[case] expected: Option<Directive>) {
        assert_eq!(Directive::recognize(token), expected);
    }
}
