use super::Char;

/// A cursor over a slice of positioned runes.
///
/// Tracks a local index into `chars`; the UTF-16 position of the current rune
/// comes from the rune itself, so spans stay in document coordinates no matter
/// what was filtered out before.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The runes being scanned.
    pub chars: &'a [Char],
    /// Current local index into `chars`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the first rune.
    pub fn new(chars: &'a [Char]) -> Self {
        Self { chars, i: 0 }
    }

    /// Returns true if every rune has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.chars.len()
    }

    /// Peeks at the current rune without advancing.
    pub fn peek(&self) -> Option<&'a Char> {
        self.chars.get(self.i)
    }

    /// Checks whether the upcoming runes spell out `pat`.
    ///
    /// An empty pattern never matches, so a scan waiting on one runs to the end.
    pub fn starts_with(&self, pat: &str) -> bool {
        if pat.is_empty() {
            return false;
        }
        let mut rest = self.chars[self.i.min(self.chars.len())..].iter();
        pat.chars()
            .all(|want| rest.next().is_some_and(|c| c.content == want))
    }

    /// Advances by one rune, returning the consumed rune.
    pub fn bump(&mut self) -> Option<&'a Char> {
        let c = self.chars.get(self.i)?;
        self.i += 1;
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::chars_from_text;

    #[test]
    fn cursor_basics() {
        let chars = chars_from_text("hello", 10);
        let mut cur = Cursor::new(&chars);
        assert!(!cur.eof());
        assert_eq!(cur.peek().map(|c| c.content), Some('h'));
        assert_eq!(cur.bump().map(|c| c.index), Some(10));
        assert_eq!(cur.peek().map(|c| c.index), Some(11));
    }

    #[test]
    fn cursor_starts_with() {
        let chars = chars_from_text("/* x */", 0);
        let cur = Cursor::new(&chars);
        assert!(cur.starts_with("/*"));
        assert!(!cur.starts_with("*/"));
    }

    #[test]
    fn starts_with_multi_unit_runes() {
        let chars = chars_from_text("😀😀x", 0);
        let mut cur = Cursor::new(&chars);
        assert!(cur.starts_with("😀😀"));
        cur.bump();
        assert!(cur.starts_with("😀x"));
    }

    #[test]
    fn empty_input() {
        let cur = Cursor::new(&[]);
        assert!(cur.eof());
        assert!(cur.peek().is_none());
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let chars = chars_from_text("ab", 0);
        let mut cur = Cursor::new(&chars);
        assert!(!cur.starts_with("abcdef"));

        cur.bump();
        assert!(!cur.starts_with("bc"));
        assert!(cur.starts_with("b"));
    }

    #[test]
    fn empty_pattern_never_matches() {
        let chars = chars_from_text("ab", 0);
        let mut cur = Cursor::new(&chars);
        assert!(!cur.starts_with(""));
        cur.bump();
        cur.bump();
        assert!(cur.eof());
        assert!(!cur.starts_with(""));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let chars = chars_from_text("x", 0);
        let mut cur = Cursor::new(&chars);
        assert!(cur.bump().is_some());
        assert!(cur.bump().is_none());
        assert!(cur.bump().is_none());
    }
}
