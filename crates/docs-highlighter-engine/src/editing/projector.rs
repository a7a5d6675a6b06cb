use regex::Regex;

use crate::models::CodeInstance;
use crate::offsets::{OffsetError, byte_range_offsets16};
use crate::parsing::Span;
use crate::style::Color;

use super::Edit;

/// Case-insensitive pattern matching `word` only as a whole word.
pub fn whole_word(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
}

impl CodeInstance {
    /// Rewrites every match of `pattern` in the body to `replacement`.
    ///
    /// Matches are taken one at a time against the already-rewritten body, so
    /// each delete/insert pair is addressed in the document as it stands after
    /// the previous pair. `replacement` must not itself match `pattern`.
    pub fn replace(&mut self, pattern: &Regex, replacement: &str) -> Result<Vec<Edit>, OffsetError> {
        let mut edits = Vec::new();

        while let Some(found) = pattern.find(self.code()) {
            if found.is_empty() {
                log::warn!("pattern `{pattern}` matched empty text, stopping replacement");
                break;
            }
            let range = found.range();
            let span = byte_range_offsets16(self.code(), range.clone(), self.start_index())?;

            edits.push(Edit::DeleteRange { range: span });
            if !replacement.is_empty() {
                edits.push(Edit::InsertText {
                    at: span.start,
                    text: replacement.to_string(),
                });
            }

            let code = self.code();
            let rewritten = [&code[..range.start], replacement, &code[range.end..]].concat();
            self.set_code(rewritten);
        }

        Ok(edits)
    }

    /// Colours every non-overlapping match of `pattern` in the body.
    pub fn highlight(&self, pattern: &Regex, color: Color) -> Vec<Edit> {
        pattern
            .find_iter(self.code())
            .filter(|m| !m.is_empty())
            .map(|m| Edit::UpdateForegroundColor {
                range: Span::new(self.utf16_at(m.start()), self.utf16_at(m.end())),
                color,
            })
            .collect()
    }
}
