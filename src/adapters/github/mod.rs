//! GitHub Issues adapter.
//!
//! Maps the GitHub REST API v3 onto the [`IssueTracker`] port.
//!
//! [`IssueTracker`]: crate::domain::ports::IssueTracker

pub mod client;
pub mod models;

pub use client::GitHubClient;
