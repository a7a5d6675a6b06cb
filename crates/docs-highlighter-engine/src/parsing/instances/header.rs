use crate::models::{FormatDirective, InstanceConfig};
use crate::parsing::Word;
use crate::style::{
    DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_LANGUAGE, DEFAULT_SHORTCUTS, DEFAULT_THEME,
    StyleTables,
};

use super::{Diagnostic, directives::Directive};

/// Header settings collected between `<conf>` and `</conf>`.
///
/// Each field is set at most once. A directive for a field that's already
/// set is reported and dropped; an unknown value leaves the field unset so a
/// later directive can still fill it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeaderConfig {
    language: Option<String>,
    font: Option<String>,
    font_size: Option<f64>,
    theme: Option<String>,
    shortcuts: Option<bool>,
    format: Option<FormatDirective>,
}

impl HeaderConfig {
    /// Applies one header token. `bold` is the emphasis of the run it came
    /// from, which is the value of the `#format` and `#shortcuts` flags.
    pub fn apply(
        &mut self,
        word: &Word,
        bold: bool,
        tables: &StyleTables,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let at = word.index;
        let Some(directive) = Directive::recognize(&word.content) else {
            report(
                diagnostics,
                Diagnostic::UnexpectedToken {
                    token: word.content.clone(),
                    at,
                },
            );
            return;
        };

        if self.is_fixed(&directive) {
            report(
                diagnostics,
                Diagnostic::DuplicateDirective {
                    token: word.content.clone(),
                    at,
                },
            );
            return;
        }

        match directive {
            Directive::Format => {
                self.format = Some(FormatDirective {
                    bold,
                    span: word.span(),
                });
            }
            Directive::Shortcuts => self.shortcuts = Some(bold),
            Directive::Language(name) => match tables.language(&name) {
                Some(lang) => self.language = Some(lang.name.to_lowercase()),
                None => report(diagnostics, Diagnostic::UnknownLanguage { name, at }),
            },
            Directive::Font(name) => match tables.font(&name) {
                Some(font) => self.font = Some(font.to_string()),
                None => report(diagnostics, Diagnostic::UnknownFont { name, at }),
            },
            Directive::FontSize(value) => match value.parse::<f64>() {
                Ok(size) if size.is_finite() && size > 0.0 => self.font_size = Some(size),
                _ => report(diagnostics, Diagnostic::InvalidFontSize { value, at }),
            },
            Directive::Theme(name) => match tables.theme(&name) {
                Some(theme) => self.theme = Some(theme.name.to_lowercase()),
                None => report(diagnostics, Diagnostic::UnknownTheme { name, at }),
            },
        }
    }

    fn is_fixed(&self, directive: &Directive) -> bool {
        match directive {
            Directive::Format => self.format.is_some(),
            Directive::Shortcuts => self.shortcuts.is_some(),
            Directive::Language(_) => self.language.is_some(),
            Directive::Font(_) => self.font.is_some(),
            Directive::FontSize(_) => self.font_size.is_some(),
            Directive::Theme(_) => self.theme.is_some(),
        }
    }

    /// Fills every unset field with its default.
    pub fn resolve(self) -> InstanceConfig {
        InstanceConfig {
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            font: self.font.unwrap_or_else(|| DEFAULT_FONT.to_string()),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            theme: self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            shortcuts: self.shortcuts.unwrap_or(DEFAULT_SHORTCUTS),
            format: self.format,
        }
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::Span;
    use pretty_assertions::assert_eq;

    fn word(index: usize, content: &str) -> Word {
        Word {
            index,
            size: content.len(),
            content: content.to_string(),
        }
    }

    fn apply_all(tokens: &[(&str, bool)]) -> (InstanceConfig, Vec<Diagnostic>) {
        let tables = StyleTables::builtin();
        let mut header = HeaderConfig::default();
        let mut diagnostics = Vec::new();
        let mut at = 0;
        for (token, bold) in tokens {
            header.apply(&word(at, token), *bold, &tables, &mut diagnostics);
            at += token.len() + 1;
        }
        (header.resolve(), diagnostics)
    }

    #[test]
    fn empty_header_resolves_to_defaults() {
        let (config, diagnostics) = apply_all(&[]);
        assert_eq!(config, InstanceConfig::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn recognised_directives_set_fields() {
        let (config, diagnostics) = apply_all(&[
            ("#lang=JAVA", false),
            ("#font=roboto_mono", false),
            ("#size=14.5", false),
            ("#theme=Light", false),
            ("#shortcuts", true),
        ]);
        assert!(diagnostics.is_empty());
        assert_eq!(config.language, "java");
        assert_eq!(config.font, "Roboto Mono");
        assert_eq!(config.font_size, 14.5);
        assert_eq!(config.theme, "light");
        assert!(config.shortcuts);
    }

    #[test]
    fn flags_take_their_value_from_bold() {
        let (config, _) = apply_all(&[("#shortcuts", false), ("#format", true)]);
        assert!(!config.shortcuts);
        assert_eq!(
            config.format,
            Some(FormatDirective {
                bold: true,
                span: Span::new(11, 18),
            })
        );
    }

    #[test]
    fn first_directive_wins() {
        let (config, diagnostics) = apply_all(&[("#lang=java", false), ("#lang=rust", false)]);
        assert_eq!(config.language, "java");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::DuplicateDirective {
                token: "#lang=rust".into(),
                at: 11,
            }]
        );
    }

    #[test]
    fn unknown_value_leaves_field_open() {
        let (config, diagnostics) = apply_all(&[("#lang=cobol", false), ("#lang=python", false)]);
        assert_eq!(config.language, "python");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownLanguage {
                name: "cobol".into(),
                at: 0,
            }]
        );
    }

    #[test]
    fn bad_values_are_reported() {
        let (config, diagnostics) = apply_all(&[
            ("#size=0", false),
            ("#font=comic", false),
            ("#theme=neon", false),
            ("hello", false),
        ]);
        assert_eq!(config, InstanceConfig::default());
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::InvalidFontSize {
                    value: "0".into(),
                    at: 0,
                },
                Diagnostic::UnknownFont {
                    name: "comic".into(),
                    at: 8,
                },
                Diagnostic::UnknownTheme {
                    name: "neon".into(),
                    at: 20,
                },
                Diagnostic::UnexpectedToken {
                    token: "hello".into(),
                    at: 32,
                },
            ]
        );
    }
}
