//! Ports the jobs depend on.
//!
//! Both jobs take their collaborators as trait objects so tests can
//! substitute fakes; nothing outside the adapters speaks HTTP.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CheckOutcome, IssueFilter, RepoId, TrackedIssue};

/// Issue tracker operations used by the maintenance jobs.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List all issues matching the filter, across open and closed
    /// states, in the tracker's sort order. Must return the complete
    /// result set regardless of how the tracker paginates.
    async fn list_issues(
        &self,
        repo: &RepoId,
        filter: &IssueFilter,
    ) -> DomainResult<Vec<TrackedIssue>>;

    /// Transition an issue to the closed state. Idempotent.
    async fn close_issue(&self, repo: &RepoId, number: u64) -> DomainResult<()>;

    /// Replace the issue's full label set with `labels`. Idempotent.
    async fn set_labels(
        &self,
        repo: &RepoId,
        number: u64,
        labels: &[String],
    ) -> DomainResult<()>;
}

/// Probe that classifies whether a URL serves the Stellar theme.
#[async_trait]
pub trait SiteProbe: Send + Sync {
    /// Fetch the page within `timeout` and classify it. Fetch failures
    /// classify as [`CheckOutcome::Error`]; this never returns an error.
    async fn check(&self, url: &str, timeout: Duration) -> CheckOutcome;
}
