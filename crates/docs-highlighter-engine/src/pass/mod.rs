//! # Document passes
//!
//! A pass reads one document snapshot and produces the ordered batch of edits
//! that styles it. Every offset in the batch refers to that snapshot as
//! modified by the edits before it in the same batch, so a batch is only good
//! for the snapshot it was computed from.
//!
//! Two passes exist:
//!
//! - **instances**: each italic-tagged `<code>` block is styled on its own,
//!   with its own language, theme and font
//! - **region**: everything between the begin/end markers is styled as one
//!   language

mod formatter;
mod instance;
mod region;

pub use formatter::{CodeFormatter, FormatError, NoFormatter};
pub use region::{RegionSettings, region_pass};

use crate::editing::Edit;
use crate::models::Document;
use crate::parsing::{Diagnostic, Extracted, extract_instances};
use crate::style::StyleTables;

/// Result of one pass.
#[derive(Debug, Default)]
pub struct PassOutput {
    pub edits: Vec<Edit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOutput {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Styles every code instance in `doc`.
///
/// Instances are handled last to first. Rewriting a body changes the length
/// of the document after it, and going backwards means no instance's edits
/// ever land after text that an earlier edit in the batch has moved.
pub fn instance_pass(
    doc: &Document,
    tables: &StyleTables,
    formatter: &dyn CodeFormatter,
) -> PassOutput {
    let Extracted {
        mut instances,
        diagnostics,
    } = extract_instances(doc, tables);

    let mut edits = vec![];
    for inst in instances.iter_mut().rev() {
        edits.extend(instance::style_instance(inst, tables, formatter));
    }

    log::info!(
        "{} instances, {} edits, {} diagnostics",
        instances.len(),
        edits.len(),
        diagnostics.len()
    );
    PassOutput { edits, diagnostics }
}
