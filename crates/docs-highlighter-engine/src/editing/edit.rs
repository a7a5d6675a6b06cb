use serde::Serialize;

use crate::parsing::Span;
use crate::style::Color;

/// One position-addressed change to the host document.
///
/// A batch of these is applied in order, so every offset is relative to the
/// document as left by the edits before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    DeleteRange {
        range: Span,
    },
    InsertText {
        at: usize,
        text: String,
    },
    UpdateForegroundColor {
        range: Span,
        color: Color,
    },
    UpdateBackgroundColor {
        range: Span,
        color: Color,
    },
    /// Removes any background colour, leaving the page colour showing.
    ClearBackgroundColor {
        range: Span,
    },
    UpdateFont {
        range: Span,
        font: String,
        size: f64,
    },
    UpdateBold {
        range: Span,
        bold: bool,
    },
    /// Page colour of the whole document.
    UpdateDocumentBackground {
        color: Color,
    },
}

impl Edit {
    /// The range the edit touches, if it's range-addressed.
    pub fn range(&self) -> Option<Span> {
        match self {
            Self::DeleteRange { range }
            | Self::UpdateForegroundColor { range, .. }
            | Self::UpdateBackgroundColor { range, .. }
            | Self::ClearBackgroundColor { range }
            | Self::UpdateFont { range, .. }
            | Self::UpdateBold { range, .. } => Some(*range),
            Self::InsertText { at, .. } => Some(Span::new(*at, *at)),
            Self::UpdateDocumentBackground { .. } => None,
        }
    }
}
