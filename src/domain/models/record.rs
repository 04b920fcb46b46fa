//! Submission records and the versioned data document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema version written into every data document.
pub const DATA_VERSION: &str = "v2";

/// A community submission extracted from an issue body.
///
/// Every field of the embedded JSON object is passed through unchanged;
/// the extractor additionally attaches the originating issue number so
/// the site checker can correlate a record back to its issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Number of the issue this record was extracted from.
    ///
    /// Optional on read so that documents produced before the field was
    /// attached still deserialize; records without it cannot have their
    /// labels updated and are skipped by the checker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u64>,

    /// The submission payload, verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SubmissionRecord {
    /// The site URL, when the submission carries one as a string.
    pub fn url(&self) -> Option<&str> {
        self.fields.get("url").and_then(Value::as_str)
    }
}

/// The sole artifact persisted between the two jobs.
///
/// `content` order matches the issue listing order at parse time. The
/// document is fully overwritten on each parser run; there is no merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDocument {
    pub version: String,
    pub content: Vec<SubmissionRecord>,
}

impl DataDocument {
    /// Create a document at the current schema version.
    pub fn new(content: Vec<SubmissionRecord>) -> Self {
        Self {
            version: DATA_VERSION.to_string(),
            content,
        }
    }
}
