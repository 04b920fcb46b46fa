//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3, providing the three operations the
//! jobs need: paginated issue listing, issue closing, and label
//! replacement. Implements [`IssueTracker`] so jobs and tests never
//! depend on this type directly.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{IssueFilter, RepoId, SortMode, TrackedIssue};
use crate::domain::ports::IssueTracker;

use super::models::{GitHubIssue, GitHubIssueUpdateRequest, GitHubSetLabelsRequest};

/// Base URL for the GitHub REST API v3.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Page size used when listing issues. GitHub caps `per_page` at 100.
const PER_PAGE: usize = 100;

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`] and map HTTP / network errors to
/// [`DomainError::ExecutionFailed`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// Personal access token; when absent, requests are anonymous
    /// (sufficient for listing public repositories, subject to the
    /// lower unauthenticated rate limit).
    token: Option<String>,
    /// API base URL, overridable for tests.
    base_url: String,
}

impl GitHubClient {
    /// Create a new client with an optional token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url: GITHUB_API_BASE.to_string(),
        }
    }

    /// Create a client from the `GITHUB_TOKEN` environment variable.
    ///
    /// An unset or empty variable yields an anonymous client.
    pub fn from_env() -> Self {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        Self::new(token)
    }

    /// Point the client at a different API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build an authorized request with the standard API headers.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "stellar-curator");
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }

    /// Map a sort mode to the API's `sort` / `direction` query values.
    fn sort_params(mode: SortMode) -> (&'static str, &'static str) {
        match mode {
            SortMode::CreatedDesc => ("created", "desc"),
            SortMode::UpdatedDesc => ("updated", "desc"),
        }
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    /// List issues from a repository, following pagination to the end.
    ///
    /// GitHub's `/issues` endpoint also returns pull requests; those are
    /// filtered out here via the `pull_request` marker field.
    async fn list_issues(
        &self,
        repo: &RepoId,
        filter: &IssueFilter,
    ) -> DomainResult<Vec<TrackedIssue>> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.base_url, repo.owner, repo.name
        );
        let (sort, direction) = Self::sort_params(filter.sort);

        let per_page = PER_PAGE.to_string();
        let mut issues = Vec::new();
        let mut page: u32 = 1;
        loop {
            let page_str = page.to_string();
            let mut req = self.request(reqwest::Method::GET, &url).query(&[
                ("state", "all"),
                ("per_page", per_page.as_str()),
                ("page", page_str.as_str()),
                ("sort", sort),
                ("direction", direction),
            ]);
            if let Some(label) = &filter.label {
                req = req.query(&[("labels", label.as_str())]);
            }

            let resp = req.send().await.map_err(|e| {
                DomainError::ExecutionFailed(format!("GitHub list_issues request failed: {e}"))
            })?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(DomainError::ExecutionFailed(format!(
                    "GitHub list_issues returned {status}: {body}"
                )));
            }

            let batch = resp.json::<Vec<GitHubIssue>>().await.map_err(|e| {
                DomainError::ExecutionFailed(format!("GitHub list_issues parse failed: {e}"))
            })?;

            let fetched = batch.len();
            issues.extend(
                batch
                    .into_iter()
                    .filter(|issue| issue.pull_request.is_none())
                    .map(TrackedIssue::from),
            );

            if fetched < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(issues)
    }

    async fn close_issue(&self, repo: &RepoId, number: u64) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}",
            self.base_url, repo.owner, repo.name, number
        );
        let body = GitHubIssueUpdateRequest {
            state: "closed".to_string(),
        };

        let resp = self
            .request(reqwest::Method::PATCH, &url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("GitHub close_issue request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub close_issue returned {status}: {body_text}"
            )));
        }

        Ok(())
    }

    async fn set_labels(
        &self,
        repo: &RepoId,
        number: u64,
        labels: &[String],
    ) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.base_url, repo.owner, repo.name, number
        );
        let body = GitHubSetLabelsRequest {
            labels: labels.to_vec(),
        };

        let resp = self
            .request(reqwest::Method::PUT, &url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("GitHub set_labels request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub set_labels returned {status}: {body_text}"
            )));
        }

        Ok(())
    }
}
