//! Domain models shared by the parser and checker jobs.

pub mod issue;
pub mod record;
pub mod site;

pub use issue::{IssueFilter, RepoId, SortMode, TrackedIssue};
pub use record::{DataDocument, SubmissionRecord, DATA_VERSION};
pub use site::CheckOutcome;
