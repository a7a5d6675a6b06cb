use crate::editing::{Edit, whole_word};
use crate::models::CodeInstance;
use crate::parsing::{chars_from_text, separate_comments};
use crate::style::{Language, StyleTables, Theme};

use super::formatter::CodeFormatter;

/// All edits for one code instance, in the order they must be applied.
///
/// Body rewrites (formatting, shortcuts) come first and update `inst`, so
/// the styling that follows is computed against the rewritten body.
pub(super) fn style_instance(
    inst: &mut CodeInstance,
    tables: &StyleTables,
    formatter: &dyn CodeFormatter,
) -> Vec<Edit> {
    let Some(lang) = tables.language(&inst.config.language) else {
        log::warn!("no style table for `{}`, skipping instance", inst.config.language);
        return vec![];
    };
    let Some(theme) = tables.theme(&inst.config.theme) else {
        log::warn!("no theme `{}`, skipping instance", inst.config.theme);
        return vec![];
    };

    let mut edits = format_body(inst, formatter);
    if inst.config.shortcuts {
        edits.extend(expand_shortcuts(inst, lang));
    }

    let range = inst.span();
    edits.push(Edit::UpdateFont {
        range,
        font: inst.config.font.clone(),
        size: inst.config.font_size,
    });
    edits.push(Edit::UpdateBackgroundColor {
        range,
        color: theme.background,
    });
    edits.push(Edit::UpdateForegroundColor {
        range,
        color: theme.foreground,
    });

    edits.extend(highlight_keywords(inst, lang));
    edits.extend(color_comments(inst, lang, theme));
    edits
}

fn format_body(inst: &mut CodeInstance, formatter: &dyn CodeFormatter) -> Vec<Edit> {
    let Some(directive) = inst.config.format.filter(|d| d.bold) else {
        return vec![];
    };

    let formatted = match formatter.format(&inst.config.language, inst.code()) {
        Ok(Some(formatted)) => formatted,
        Ok(None) => {
            log::debug!("no formatter for `{}`", inst.config.language);
            return vec![];
        }
        Err(err) => {
            log::warn!("formatting instance at {}: {err}", inst.start_index());
            return vec![];
        }
    };

    let mut edits = vec![];
    if !formatted.is_empty() && formatted != inst.code() {
        let range = inst.span();
        edits.push(Edit::DeleteRange { range });
        edits.push(Edit::InsertText {
            at: range.start,
            text: formatted.clone(),
        });
        inst.set_code(formatted);
    }
    edits.push(Edit::UpdateBold {
        range: directive.span,
        bold: false,
    });
    edits
}

fn expand_shortcuts(inst: &mut CodeInstance, lang: &Language) -> Vec<Edit> {
    let mut edits = vec![];
    for (token, expansion) in &lang.shortcuts {
        let result = whole_word(token)
            .map_err(anyhow::Error::from)
            .and_then(|re| Ok(inst.replace(&re, expansion)?));
        match result {
            Ok(replaced) => edits.extend(replaced),
            Err(err) => log::warn!("expanding shortcut `{token}`: {err}"),
        }
    }
    edits
}

fn highlight_keywords(inst: &CodeInstance, lang: &Language) -> Vec<Edit> {
    let mut edits = vec![];
    for (keyword, color) in &lang.keywords {
        match whole_word(keyword) {
            Ok(re) => edits.extend(inst.highlight(&re, *color)),
            Err(err) => log::warn!("keyword `{keyword}`: {err}"),
        }
    }
    edits
}

fn color_comments(inst: &CodeInstance, lang: &Language, theme: &Theme) -> Vec<Edit> {
    let chars = chars_from_text(inst.code(), inst.start_index());
    separate_comments(&lang.comments, &chars)
        .comments
        .iter()
        .map(|comment| Edit::UpdateForegroundColor {
            range: comment.span(),
            color: theme.comment,
        })
        .collect()
}
