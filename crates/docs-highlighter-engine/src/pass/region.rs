use crate::editing::Edit;
use crate::models::Document;
use crate::offsets::text_width16;
use crate::parsing::{Diagnostic, Markers, Span, char_range, collect_chars, separate_comments, split_words};
use crate::style::{DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_THEME, StyleTables};

use super::PassOutput;

/// What a region pass colours and how it finds the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSettings {
    pub language: String,
    pub theme: String,
    pub markers: Markers,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            language: "java".to_string(),
            theme: DEFAULT_THEME.to_string(),
            markers: Markers::default(),
        }
    }
}

/// Colours everything between the document's begin and end markers as one
/// piece of code.
///
/// Keywords typed in the wrong case are lowercased and shortcut tokens are
/// expanded. Each rewrite moves the text after it, so a running shift keeps
/// the offsets of later words in step with the document as edited so far.
pub fn region_pass(doc: &Document, tables: &StyleTables, settings: &RegionSettings) -> PassOutput {
    let chars = collect_chars(doc, &settings.markers);
    let Some(range) = char_range(&chars) else {
        log::debug!("empty region, nothing to do");
        return PassOutput::default();
    };

    let Some(lang) = tables.language(&settings.language) else {
        let diagnostic = Diagnostic::UnknownLanguage {
            name: settings.language.clone(),
            at: range.start,
        };
        log::warn!("{diagnostic}");
        return PassOutput {
            edits: vec![],
            diagnostics: vec![diagnostic],
        };
    };
    let Some(theme) = tables.theme(&settings.theme) else {
        let diagnostic = Diagnostic::UnknownTheme {
            name: settings.theme.clone(),
            at: range.start,
        };
        log::warn!("{diagnostic}");
        return PassOutput {
            edits: vec![],
            diagnostics: vec![diagnostic],
        };
    };

    let separated = separate_comments(&lang.comments, &chars);

    let mut edits = vec![
        Edit::UpdateDocumentBackground {
            color: theme.background,
        },
        // the page colour shows through the region
        Edit::ClearBackgroundColor { range },
        Edit::UpdateFont {
            range,
            font: DEFAULT_FONT.to_string(),
            size: DEFAULT_FONT_SIZE,
        },
        Edit::UpdateForegroundColor {
            range,
            color: theme.foreground,
        },
    ];
    edits.extend(separated.comments.iter().map(|c| Edit::UpdateForegroundColor {
        range: c.span(),
        color: theme.comment,
    }));

    let mut shift: isize = 0;
    for word in split_words(&separated.code) {
        let lower = word.content.to_lowercase();
        let span = word.span().shifted(shift);

        if let Some(&color) = lang.keywords.get(&lower) {
            let span = if word.content != lower {
                rewrite(&mut edits, &mut shift, span, &lower)
            } else {
                span
            };
            edits.push(Edit::UpdateForegroundColor { range: span, color });
        } else if let Some(expansion) = lang.shortcuts.get(&lower) {
            rewrite(&mut edits, &mut shift, span, expansion);
        }
    }

    log::info!("region {}..{}: {} edits", range.start, range.end, edits.len());
    PassOutput {
        edits,
        diagnostics: vec![],
    }
}

/// Replaces `span` with `text`, returning where `text` ends up.
fn rewrite(edits: &mut Vec<Edit>, shift: &mut isize, span: Span, text: &str) -> Span {
    let width = text_width16(text);
    edits.push(Edit::DeleteRange { range: span });
    edits.push(Edit::InsertText {
        at: span.start,
        text: text.to_string(),
    });
    *shift += width as isize - span.len() as isize;
    Span::at(span.start, width)
}
