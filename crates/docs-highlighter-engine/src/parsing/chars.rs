use serde::{Deserialize, Serialize};

use crate::models::Document;
use crate::offsets::rune_width16;

use super::{Span, eq_ignore_case};

/// One rune positioned in the original document's UTF-16 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    /// UTF-16 start offset of the rune.
    pub index: usize,
    /// Width of the rune in UTF-16 units (1 or 2).
    pub size: usize,
    pub content: char,
}

impl Char {
    pub fn new(index: usize, content: char) -> Self {
        Self {
            index,
            size: rune_width16(content),
            content,
        }
    }

    /// The single space standing in for a removed span, so the text on either
    /// side of it doesn't fuse into one word.
    pub fn filler(index: usize) -> Self {
        Self {
            index,
            size: 1,
            content: ' ',
        }
    }

    pub fn end(&self) -> usize {
        self.index + self.size
    }
}

/// Document-level sentinels delimiting the region a region pass works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub begin: String,
    pub end: String,
}

impl Markers {
    pub const DEFAULT_BEGIN: &'static str = "~~begin~~";
    pub const DEFAULT_END: &'static str = "~~end~~";
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin: Self::DEFAULT_BEGIN.to_string(),
            end: Self::DEFAULT_END.to_string(),
        }
    }
}

/// Flattens the runs between the begin and end markers into positioned runes.
///
/// Runs are skipped until one whose trimmed content is the begin marker
/// (case-insensitive). The first run matching the end marker stops the scan;
/// neither marker run contributes any chars. No begin marker means no chars.
pub fn collect_chars(doc: &Document, markers: &Markers) -> Vec<Char> {
    let mut chars = Vec::new();
    let mut active = false;

    for run in doc.runs() {
        let trimmed = run.content.trim();
        if eq_ignore_case(trimmed, &markers.end) {
            log::debug!("end marker at {}, {} chars collected", run.start_index, chars.len());
            return chars;
        }
        if !active {
            active = eq_ignore_case(trimmed, &markers.begin);
            continue;
        }
        chars.extend(chars_from_text(run.content, run.start_index));
    }

    if !active {
        log::debug!("no begin marker `{}` in document", markers.begin);
    }
    chars
}

/// Positions every rune of `text`, the first at `base`.
pub fn chars_from_text(text: &str, base: usize) -> Vec<Char> {
    let mut index = base;
    text.chars()
        .map(|r| {
            let c = Char::new(index, r);
            index += c.size;
            c
        })
        .collect()
}

/// The UTF-16 range covered from the first char to the end of the last one.
pub fn char_range(chars: &[Char]) -> Option<Span> {
    let first = chars.first()?;
    let last = chars.last()?;
    Some(Span {
        start: first.index,
        end: last.end(),
    })
}
