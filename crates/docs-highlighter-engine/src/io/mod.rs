use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::editing::Edit;
use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize edits: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Edits rejected: {0}")]
    Rejected(String),
}

/// Where document snapshots come from.
pub trait DocumentSource {
    fn fetch(&self, document_id: &str) -> Result<Document, FetchError>;
}

/// Where edit batches go. A batch is applied whole or not at all.
pub trait EditSink {
    fn submit(&mut self, document_id: &str, edits: &[Edit]) -> Result<(), SubmissionError>;
}

/// Reads document snapshots saved as host-shaped JSON, the document id being
/// the file path (relative to `root`).
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for JsonFileSource {
    fn fetch(&self, document_id: &str) -> Result<Document, FetchError> {
        let path = self.root.join(document_id);
        if !path.exists() {
            return Err(FetchError::NotFound(path));
        }
        let json = fs::read_to_string(&path)?;
        let mut doc: Document =
            serde_json::from_str(&json).map_err(|source| FetchError::Parse {
                path: path.clone(),
                source,
            })?;
        if doc.document_id.is_empty() {
            doc.document_id = document_id.to_string();
        }
        log::debug!("fetched {} ({} bytes)", path.display(), json.len());
        Ok(doc)
    }
}

#[derive(Serialize)]
struct Batch<'a> {
    document_id: &'a str,
    edits: &'a [Edit],
}

/// Writes each submitted batch as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EditSink for JsonLinesSink<W> {
    fn submit(&mut self, document_id: &str, edits: &[Edit]) -> Result<(), SubmissionError> {
        serde_json::to_writer(&mut self.out, &Batch { document_id, edits })?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
