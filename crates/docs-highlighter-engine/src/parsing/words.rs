use crate::offsets::text_width16;

use super::{Char, Span};

/// A maximal run of non-whitespace runes, or an extracted comment, with its
/// UTF-16 position in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// UTF-16 start offset of the first rune.
    pub index: usize,
    /// Width in UTF-16 units.
    pub size: usize,
    pub content: String,
}

impl Word {
    pub fn span(&self) -> Span {
        Span::at(self.index, self.size)
    }
}

/// Splits `chars` into whitespace-delimited words.
///
/// Whitespace runes only ever end a word; they never appear in one. A word's
/// index is that of its first rune.
pub fn split_words(chars: &[Char]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut buf = String::new();
    let mut start = 0;

    fn flush(words: &mut Vec<Word>, buf: &mut String, index: usize) {
        if !buf.is_empty() {
            words.push(Word {
                index,
                size: text_width16(buf),
                content: std::mem::take(buf),
            });
        }
    }

    for c in chars {
        if c.content.is_whitespace() {
            flush(&mut words, &mut buf, start);
            continue;
        }
        if buf.is_empty() {
            start = c.index;
        }
        buf.push(c.content);
    }
    flush(&mut words, &mut buf, start);

    words
}
