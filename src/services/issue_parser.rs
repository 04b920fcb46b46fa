//! The issue parser job.
//!
//! Lists submission issues, extracts a record from each body, closes
//! issues tagged invalid when configured to, and overwrites the data
//! document with the collected records.

use tracing::{info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{DataDocument, IssueFilter, RepoId, TrackedIssue};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::data_store::DataStore;
use crate::services::extractor::extract_submission;

/// Options resolved from config and environment before the run.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub repo: RepoId,
    pub filter: IssueFilter,
    /// When true and `invalid_label` is set, issues carrying that label
    /// are transitioned to closed during the run.
    pub auto_close: bool,
    pub invalid_label: Option<String>,
}

/// Runs the parser job end to end.
///
/// The tracker is injected so tests can substitute a fake; see the
/// crate's integration tests.
pub struct IssueParserJob<'a> {
    tracker: &'a dyn IssueTracker,
    store: &'a DataStore,
    options: ParserOptions,
}

impl<'a> IssueParserJob<'a> {
    pub fn new(tracker: &'a dyn IssueTracker, store: &'a DataStore, options: ParserOptions) -> Self {
        Self {
            tracker,
            store,
            options,
        }
    }

    /// Run the job. Returns the number of records written.
    ///
    /// Listing and writing failures are fatal; everything per-issue is
    /// logged and skipped.
    pub async fn run(&self) -> DomainResult<usize> {
        let issues = self
            .tracker
            .list_issues(&self.options.repo, &self.options.filter)
            .await?;
        info!(
            repo = %self.options.repo,
            issues = issues.len(),
            "listed submission issues"
        );

        let mut content = Vec::new();
        for issue in &issues {
            self.maybe_close_invalid(issue).await;
            if let Some(record) = extract_submission(issue) {
                content.push(record);
            }
        }

        let document = DataDocument::new(content);
        self.store.write(&document)?;
        info!(
            records = document.content.len(),
            path = %self.store.path().display(),
            "wrote data document"
        );
        Ok(document.content.len())
    }

    /// Close the issue when auto-close is configured and it carries the
    /// invalid label. Failure is logged, never propagated.
    async fn maybe_close_invalid(&self, issue: &TrackedIssue) {
        if !self.options.auto_close {
            return;
        }
        let Some(label) = &self.options.invalid_label else {
            return;
        };
        if !issue.has_label(label) {
            return;
        }

        match self.tracker.close_issue(&self.options.repo, issue.number).await {
            Ok(()) => info!(issue = issue.number, "closed invalid submission issue"),
            Err(err) => warn!(
                issue = issue.number,
                error = %err,
                "failed to close invalid issue"
            ),
        }
    }
}
