pub mod code_instance;
pub mod document;

pub use code_instance::{CodeInstance, EmptyBody, FormatDirective, InstanceConfig};
pub use document::{
    Body, Document, DocumentBuilder, Paragraph, ParagraphElement, Run, StructuralElement, TextRun,
    TextStyle,
};
