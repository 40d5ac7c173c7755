use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::VideoRecord;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("reading metadata file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed metadata file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Ordered video metadata backed by a flat JSON file. The whole sequence is
/// loaded once at startup and the file is rewritten wholesale after every
/// append; the in-memory sequence is the source of truth while the process
/// runs.
pub struct MetadataStore {
    path: PathBuf,
    records: Vec<VideoRecord>,
}

impl MetadataStore {
    /// Reads the persisted sequence, or starts empty if the file does not
    /// exist yet. A file that exists but does not parse is fatal to the
    /// caller.
    pub fn load(path: PathBuf) -> Result<Self, MetadataError> {
        let records = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, records })
    }

    /// Appends to the in-memory sequence and returns the serialized snapshot
    /// of the whole sequence. The caller rewrites the persisted file with it
    /// after releasing the state lock; concurrent rewrites race and the last
    /// writer wins on disk.
    pub fn append(&mut self, record: VideoRecord) -> String {
        self.records.push(record);
        serde_json::to_string_pretty(&self.records).expect("records serialize to JSON")
    }

    /// Full current sequence, insertion order preserved.
    pub fn all(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
