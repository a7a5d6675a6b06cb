use serde::Serialize;

/// A UTF-16 range `[start, end)` in host document coordinates.
///
/// Every position the host document accepts in an edit is expressed in these
/// units, so all spans handed out by the engine use them too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span of `len` units starting at `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Width in UTF-16 units; zero for an inverted span.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves the span by a signed amount, clamping at zero.
    #[must_use]
    pub fn shifted(self, by: isize) -> Self {
        Self {
            start: self.start.saturating_add_signed(by),
            end: self.end.saturating_add_signed(by),
        }
    }
}
