//! # Position-tracked scanning
//!
//! Everything that reads document text lives here. Nothing in this module
//! understands a programming language; it only moves runes around while
//! keeping each one's UTF-16 document position.
//!
//! ## Modules
//!
//! - **`chars`**: flattening a document (or a string) into positioned runes
//! - **`cursor`**: a cursor over positioned runes for the scanners below
//! - **`comments`**: pulling comment spans out of a rune stream
//! - **`words`**: whitespace tokenizing of a rune stream
//! - **`instances`**: the `<code>`/`<conf>` state machine producing code instances

pub mod chars;
pub mod comments;
pub mod cursor;
pub mod instances;
pub mod span;
pub mod words;

pub use chars::{Char, Markers, char_range, chars_from_text, collect_chars};
pub use comments::{CommentDelimiters, Separated, separate_comments};
pub use instances::{Diagnostic, Extracted, extract_instances};
pub use span::Span;
pub use words::{Word, split_words};

/// Case-insensitive comparison by Unicode lowercase mapping.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_folds_both_sides() {
        assert!(eq_ignore_case("<CODE>", "<code>"));
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(!eq_ignore_case("<code>", "</code>"));
        assert!(eq_ignore_case("", ""));
    }
}
