//! The site checker job.
//!
//! Reads the data document, probes each recorded URL, and replaces the
//! originating issue's labels with the classification. Transient fetch
//! failures are retried a bounded number of times with no backoff.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CheckOutcome, RepoId};
use crate::domain::ports::{IssueTracker, SiteProbe};
use crate::infrastructure::data_store::DataStore;

/// Options resolved from config and environment before the run.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    pub repo: RepoId,
    /// Per-fetch timeout; bounds each attempt, not the run.
    pub timeout: Duration,
    /// Maximum probe attempts per URL while the result stays `Error`.
    pub retry_times: u32,
}

/// Runs the checker job end to end.
pub struct SiteCheckerJob<'a> {
    tracker: &'a dyn IssueTracker,
    probe: &'a dyn SiteProbe,
    store: &'a DataStore,
    options: CheckerOptions,
}

impl<'a> SiteCheckerJob<'a> {
    pub fn new(
        tracker: &'a dyn IssueTracker,
        probe: &'a dyn SiteProbe,
        store: &'a DataStore,
        options: CheckerOptions,
    ) -> Self {
        Self {
            tracker,
            probe,
            store,
            options,
        }
    }

    /// Run the job. Returns the number of sites checked.
    ///
    /// A missing or unreadable data document is fatal; per-record
    /// failures are logged and skipped, in document order.
    pub async fn run(&self) -> DomainResult<usize> {
        let document = self.store.read()?;
        info!(
            records = document.content.len(),
            path = %self.store.path().display(),
            "loaded data document"
        );

        let mut checked = 0;
        for record in &document.content {
            let Some(url) = record.url() else {
                debug!("record has no url; skipping");
                continue;
            };
            let Some(number) = record.issue_number else {
                warn!(url = url, "record has no issue number; cannot update labels");
                continue;
            };

            info!(url = url, issue = number, "checking site");
            let outcome = self.check_with_retry(url).await;
            checked += 1;

            let labels = outcome.labels();
            if let Err(err) = self
                .tracker
                .set_labels(&self.options.repo, number, &labels)
                .await
            {
                warn!(
                    issue = number,
                    error = %err,
                    "failed to update issue labels"
                );
            }
        }
        Ok(checked)
    }

    /// Probe the URL up to `retry_times` times, stopping at the first
    /// non-error outcome. The final outcome may still be `Error`, which
    /// is a valid terminal classification, not a run failure.
    async fn check_with_retry(&self, url: &str) -> CheckOutcome {
        let attempts = self.options.retry_times.max(1);
        let mut outcome = CheckOutcome::Error;
        for attempt in 1..=attempts {
            outcome = self.probe.check(url, self.options.timeout).await;
            if !outcome.is_error() {
                break;
            }
            if attempt < attempts {
                info!(url = url, attempt = attempt, of = attempts, "retrying site check");
            }
        }
        outcome
    }
}
