//! Domain view of tracker issues and issue listing parameters.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// An issue as the jobs see it, independent of any tracker API shape.
///
/// Adapters map their wire payloads into this type; the parser and
/// checker never touch raw API structs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedIssue {
    /// Sequential number within the repository, stable across updates.
    pub number: u64,
    /// Free-text body; may be absent or empty.
    pub body: Option<String>,
    /// Names of the labels currently applied to the issue.
    pub labels: Vec<String>,
}

impl TrackedIssue {
    /// Whether the issue carries a label with exactly this name.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoId {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(DomainError::InvalidRepoIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Listing order for submission issues.
///
/// The tracker sorts server-side; both modes are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most recently created first (the default).
    #[default]
    CreatedDesc,
    /// Most recently updated first.
    UpdatedDesc,
}

impl SortMode {
    /// Parse the config-file `sort` option. Only `updated-desc` selects
    /// update ordering; any other value (or none) means creation order.
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("updated-desc") => SortMode::UpdatedDesc,
            _ => SortMode::CreatedDesc,
        }
    }
}

/// Filter applied when listing submission issues.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// When set, only issues carrying this label are listed.
    pub label: Option<String>,
    pub sort: SortMode,
}
