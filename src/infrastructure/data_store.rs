//! Persistence of the versioned data document.
//!
//! The document lives at `<root>/v2/data.json`. The parser overwrites
//! it unconditionally; the checker reads it back. There is no merge and
//! no backup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DataDocument;

/// Directory under the root that carries the schema version.
const DATA_DIR: &str = "v2";

/// Data document file name.
const DATA_FILE: &str = "data.json";

/// Reads and writes the data document under a root directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of the data document.
    pub fn path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(DATA_FILE)
    }

    /// Serialize the document as formatted JSON and write it, creating
    /// the containing directory if absent. Overwrites unconditionally.
    pub fn write(&self, document: &DataDocument) -> DomainResult<()> {
        let dir = self.root.join(DATA_DIR);
        fs::create_dir_all(&dir)
            .map_err(|e| DomainError::Io(format!("{}: {e}", dir.display())))?;

        let json = serde_json::to_string_pretty(document)?;
        let path = self.path();
        fs::write(&path, json)
            .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
        Ok(())
    }

    /// Read the document back. Missing or malformed files are errors;
    /// the checker cannot run without a parsed document.
    pub fn read(&self) -> DomainResult<DataDocument> {
        let path = self.path();
        let raw = fs::read_to_string(&path)
            .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
