/// Something in a document's markup that was skipped rather than acted on.
///
/// None of these stop a pass; they're reported so a front end can point the
/// author at the offending token. `at` is the UTF-16 document offset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    #[error("unknown language `{name}` at {at}")]
    UnknownLanguage { name: String, at: usize },
    #[error("unknown font `{name}` at {at}")]
    UnknownFont { name: String, at: usize },
    #[error("unknown theme `{name}` at {at}")]
    UnknownTheme { name: String, at: usize },
    #[error("invalid font size `{value}` at {at}")]
    InvalidFontSize { value: String, at: usize },
    /// A directive for a setting an earlier directive already fixed.
    #[error("setting already fixed, ignoring `{token}` at {at}")]
    DuplicateDirective { token: String, at: usize },
    /// A header token that isn't any known directive.
    #[error("unexpected config token `{token}` at {at}")]
    UnexpectedToken { token: String, at: usize },
    /// `</code>` with nothing between it and `</conf>`.
    #[error("code instance at {at} has an empty body")]
    EmptyBody { at: usize },
    /// A `<code>` still open when the document ended.
    #[error("code instance opened at {at} is never closed")]
    Unterminated { at: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Diagnostic::UnknownLanguage { name: "cobol".into(), at: 15 },
        "unknown language `cobol` at 15"
    )]
    #[case(
        Diagnostic::DuplicateDirective { token: "#lang=go".into(), at: 40 },
        "setting already fixed, ignoring `#lang=go` at 40"
    )]
    #[case(Diagnostic::Unterminated { at: 3 }, "code instance opened at 3 is never closed")]
    fn messages_name_token_and_offset(#[case] diagnostic: Diagnostic, #[case] expected: &str) {
        assert_eq!(diagnostic.to_string(), expected);
    }
}
