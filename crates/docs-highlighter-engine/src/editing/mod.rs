//! # Edit projection
//!
//! Turns matches in a code instance's body into host document edits. Offsets
//! in the produced edits are absolute UTF-16 document positions.

mod edit;
mod projector;

pub use edit::Edit;
pub use projector::whole_word;
