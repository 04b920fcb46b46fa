//! GitHub Issues API response and request models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. They are
//! used internally by the GitHub adapter and are not part of the public
//! domain model.

use serde::{Deserialize, Serialize};

use crate::domain::models::TrackedIssue;

/// An issue returned by the GitHub API.
///
/// Note: issues and pull requests share the same endpoint. Pull requests
/// include a non-null `pull_request` field; the adapter filters those out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Issue body text (may be absent or null).
    #[serde(default)]
    pub body: Option<String>,
    /// Current state: "open" or "closed".
    pub state: String,
    /// Labels applied to the issue.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    /// Present when this item is actually a pull request, not an issue.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
}

impl From<GitHubIssue> for TrackedIssue {
    fn from(issue: GitHubIssue) -> Self {
        TrackedIssue {
            number: issue.number,
            body: issue.body,
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// A label applied to a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    /// The label name (e.g., "showcase", "invalid").
    pub name: String,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request resource.
    pub url: String,
}

/// Request body for updating (patching) an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssueUpdateRequest {
    /// New state: "open" or "closed".
    pub state: String,
}

/// Request body for replacing an issue's label set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSetLabelsRequest {
    /// The full label set; existing labels not listed here are removed.
    pub labels: Vec<String>,
}
