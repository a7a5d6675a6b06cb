//! # Code-instance extraction
//!
//! A code instance is written in the document as
//!
//! ```text
//! <code> <conf> #lang=java #theme=light </conf>     (italic)
//! int x = 1;                                        (anything)
//! </code>                                           (italic, own run)
//! ```
//!
//! Only italic runs can open an instance or carry header directives, so code
//! that happens to contain `<code>` is left alone. The body is taken verbatim
//! and begins right after the run holding `</conf>`.

mod builder;
mod diagnostics;
mod directives;
mod header;

pub use builder::InstanceBuilder;
pub use diagnostics::Diagnostic;
pub use directives::{Directive, FORMAT_DIRECTIVE, SHORTCUTS_DIRECTIVE};
pub use header::HeaderConfig;

use crate::models::{CodeInstance, Document};
use crate::style::StyleTables;

pub const CODE_START: &str = "<code>";
pub const CODE_END: &str = "</code>";
pub const CONF_START: &str = "<conf>";
pub const CONF_END: &str = "</conf>";

/// Everything one extraction pass found.
#[derive(Debug, Default)]
pub struct Extracted {
    pub instances: Vec<CodeInstance>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extracts every complete code instance of `doc`, in document order.
pub fn extract_instances(doc: &Document, tables: &StyleTables) -> Extracted {
    let mut builder = InstanceBuilder::new(tables);
    for run in doc.runs() {
        builder.push(run);
    }
    builder.finish()
}
