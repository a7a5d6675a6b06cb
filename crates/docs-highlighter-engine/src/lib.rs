pub mod editing;
pub mod io;
pub mod models;
pub mod offsets;
pub mod parsing;
pub mod pass;
pub mod style;

// Re-export key types for easier usage
pub use editing::{Edit, whole_word};
pub use io::*;
pub use models::{CodeInstance, Document, DocumentBuilder, InstanceConfig, TextRun};
pub use offsets::OffsetError;
pub use parsing::{Diagnostic, Markers, Span};
pub use pass::{
    CodeFormatter, FormatError, NoFormatter, PassOutput, RegionSettings, instance_pass,
    region_pass,
};
pub use style::{Color, StyleTables};
