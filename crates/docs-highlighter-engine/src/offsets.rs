//! # Offset Codec
//!
//! Conversions between the three coordinate spaces the engine juggles:
//!
//! - **UTF-8 byte offsets** into in-memory `String`s (what `regex` reports)
//! - **runes** (`char`s)
//! - **UTF-16 code units**, the unit every host document position is measured in
//!
//! Everything here is pure; no function keeps state between calls.

use std::ops::Range;

use crate::parsing::Span;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    #[error("`{needle}` not found in haystack")]
    NotFound { needle: String },
    #[error("byte range {start}..{end} is not on char boundaries of a {len}-byte string")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// UTF-16 width of a single rune: 1 inside the BMP, 2 for a surrogate pair.
pub fn rune_width16(r: char) -> usize {
    r.len_utf16()
}

/// UTF-16 width of a whole string (sum of its runes' widths).
pub fn text_width16(s: &str) -> usize {
    s.chars().map(rune_width16).sum()
}

/// Locates the first occurrence of `needle` in `haystack` and returns its
/// UTF-16 span, shifted by `base`.
///
/// The needle is expected to have come from a successful match against the
/// same haystack, so a miss means the caller mixed up its strings.
pub fn substring_offsets16(needle: &str, haystack: &str, base: usize) -> Result<Span, OffsetError> {
    let at = haystack.find(needle).ok_or_else(|| OffsetError::NotFound {
        needle: needle.to_string(),
    })?;
    let start = base + text_width16(&haystack[..at]);
    Ok(Span {
        start,
        end: start + text_width16(needle),
    })
}

/// UTF-16 span of a byte range of `haystack`, shifted by `base`.
///
/// Unlike [`substring_offsets16`] this is anchored at the exact match
/// position, so an identical earlier occurrence of the same text can't be
/// picked up by mistake.
pub fn byte_range_offsets16(
    haystack: &str,
    range: Range<usize>,
    base: usize,
) -> Result<Span, OffsetError> {
    let (Some(prefix), Some(matched)) = (haystack.get(..range.start), haystack.get(range.clone()))
    else {
        return Err(OffsetError::InvalidRange {
            start: range.start,
            end: range.end,
            len: haystack.len(),
        });
    };
    let start = base + text_width16(prefix);
    Ok(Span {
        start,
        end: start + text_width16(matched),
    })
}

/// Builds a lookup table from every UTF-8 byte index of `s` to its absolute
/// UTF-16 offset (`base` + units before it).
///
/// The table has `s.len() + 1` entries so the end of the string is
/// addressable too. Bytes in the middle of a multi-byte rune map to the
/// rune's start.
pub fn utf16_index_map(s: &str, base: usize) -> Vec<usize> {
    let mut map = Vec::with_capacity(s.len() + 1);
    let mut at = base;
    for r in s.chars() {
        map.extend(std::iter::repeat_n(at, r.len_utf8()));
        at += rune_width16(r);
    }
    map.push(at);
    map
}
