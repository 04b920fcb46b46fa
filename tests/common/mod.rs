//! Common test utilities for integration tests
//!
//! Scripted fakes for the two ports plus small fixture helpers, shared
//! across the job test files.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use stellar_curator::domain::errors::{DomainError, DomainResult};
use stellar_curator::{
    CheckOutcome, IssueFilter, IssueTracker, RepoId, SiteProbe, TrackedIssue,
};

/// Create a temporary directory for test isolation.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn repo() -> RepoId {
    "org/repo".parse().unwrap()
}

pub fn issue(number: u64, body: Option<&str>, labels: &[&str]) -> TrackedIssue {
    TrackedIssue {
        number,
        body: body.map(str::to_string),
        labels: labels.iter().map(|l| (*l).to_string()).collect(),
    }
}

/// Scripted issue tracker that records every mutating call.
#[derive(Default)]
pub struct FakeTracker {
    pub issues: Vec<TrackedIssue>,
    pub fail_listing: bool,
    pub fail_set_labels: bool,
    pub fail_close: bool,
    pub closed: Mutex<Vec<u64>>,
    pub label_calls: Mutex<Vec<(u64, Vec<String>)>>,
}

impl FakeTracker {
    pub fn with_issues(issues: Vec<TrackedIssue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn list_issues(
        &self,
        _repo: &RepoId,
        _filter: &IssueFilter,
    ) -> DomainResult<Vec<TrackedIssue>> {
        if self.fail_listing {
            return Err(DomainError::ExecutionFailed(
                "listing unavailable".to_string(),
            ));
        }
        Ok(self.issues.clone())
    }

    async fn close_issue(&self, _repo: &RepoId, number: u64) -> DomainResult<()> {
        if self.fail_close {
            return Err(DomainError::ExecutionFailed("close refused".to_string()));
        }
        self.closed.lock().unwrap().push(number);
        Ok(())
    }

    async fn set_labels(
        &self,
        _repo: &RepoId,
        number: u64,
        labels: &[String],
    ) -> DomainResult<()> {
        if self.fail_set_labels {
            return Err(DomainError::ExecutionFailed("labels refused".to_string()));
        }
        self.label_calls
            .lock()
            .unwrap()
            .push((number, labels.to_vec()));
        Ok(())
    }
}

/// Scripted probe: returns queued outcomes in order, then `NotStellar`.
pub struct FakeProbe {
    outcomes: Mutex<VecDeque<CheckOutcome>>,
    pub calls: AtomicU32,
    pub urls: Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn with_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicU32::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SiteProbe for FakeProbe {
    async fn check(&self, url: &str, _timeout: Duration) -> CheckOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CheckOutcome::NotStellar)
    }
}
