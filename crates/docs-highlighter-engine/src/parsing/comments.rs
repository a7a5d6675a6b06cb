//! # Comment Scanner
//!
//! Splits a rune stream into the code around comments and the comments
//! themselves, keeping document offsets intact on both sides.
//!
//! At every position each delimiter pair is tried in the order given and the
//! first whose start symbol matches wins. A comment runs until its end symbol
//! or, if that never shows up, to the end of the stream. Each removed comment
//! leaves a single filler space behind in the code stream so the words on
//! either side of it stay apart (`a/**/b` is `a b`, not `ab`).
//!
//! The scan never backtracks: a position that starts no comment costs one
//! rune, a comment costs exactly its own length.

use serde::{Deserialize, Serialize};

use super::{Char, Word, cursor::Cursor};

/// Start and end symbols of one comment form, e.g. `/*` … `*/` or `//` … `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDelimiters {
    pub start: String,
    pub end: String,
}

impl CommentDelimiters {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A comment that runs to the end of the line, newline included.
    pub fn line(start: impl Into<String>) -> Self {
        Self::new(start, "\n")
    }
}

/// Output of [`separate_comments`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Separated {
    /// Every rune outside a comment, plus one filler per removed comment.
    pub code: Vec<Char>,
    /// Extracted comments, delimiters included, in source order.
    pub comments: Vec<Word>,
}

pub fn separate_comments(delimiters: &[CommentDelimiters], chars: &[Char]) -> Separated {
    let mut cur = Cursor::new(chars);
    let mut out = Separated::default();

    while !cur.eof() {
        if let Some(comment) = delimiters.iter().find_map(|d| try_parse_comment(&mut cur, d)) {
            log::trace!("comment at {}: {:?}", comment.index, comment.content);
            out.code.push(Char::filler(comment.index));
            out.comments.push(comment);
            continue;
        }
        if let Some(c) = cur.bump() {
            out.code.push(*c);
        }
    }

    out
}

/// Attempts to parse a comment of form `d` at the current position.
///
/// Leaves the cursor untouched when the start symbol isn't there.
fn try_parse_comment(cur: &mut Cursor<'_>, d: &CommentDelimiters) -> Option<Word> {
    if !cur.starts_with(&d.start) {
        return None;
    }
    let index = cur.peek()?.index;
    let mut word = Word {
        index,
        size: 0,
        content: String::new(),
    };

    take(cur, d.start.chars().count(), &mut word);
    loop {
        if cur.starts_with(&d.end) {
            take(cur, d.end.chars().count(), &mut word);
            break;
        }
        if take(cur, 1, &mut word) == 0 {
            // unterminated: closes at end of stream
            break;
        }
    }

    Some(word)
}

/// Moves up to `n` runes from the cursor into `word`, returning how many moved.
fn take(cur: &mut Cursor<'_>, n: usize, word: &mut Word) -> usize {
    let mut taken = 0;
    while taken < n {
        let Some(c) = cur.bump() else {
            break;
        };
        word.size += c.size;
        word.content.push(c.content);
        taken += 1;
    }
    taken
}
