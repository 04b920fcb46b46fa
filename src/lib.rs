//! Stellar Curator - site directory maintenance jobs
//!
//! Automates two recurring chores for a community-curated directory of
//! Stellar-theme sites: parsing submission issues into a versioned JSON
//! data document, and periodically verifying that each listed site
//! still runs the theme, reflected back as issue labels.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors, and the ports the
//!   jobs depend on
//! - **Service Layer** (`services`): the extractor and the two job
//!   orchestrations
//! - **Adapters** (`adapters`): GitHub Issues API client and the HTTP
//!   site probe
//! - **Infrastructure Layer** (`infrastructure`): config file loading
//!   and data document persistence
//! - **CLI Layer** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CheckOutcome, DataDocument, IssueFilter, RepoId, SortMode, SubmissionRecord, TrackedIssue,
};
pub use domain::ports::{IssueTracker, SiteProbe};
pub use infrastructure::config::{ConfigLoader, ConfigSection};
pub use infrastructure::data_store::DataStore;
pub use services::{CheckerOptions, IssueParserJob, ParserOptions, SiteCheckerJob};
