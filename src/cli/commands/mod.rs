//! One module per subcommand, each exposing an `execute` entry point.

pub mod check_sites;
pub mod parse_issues;

use anyhow::{Context, Result};

use crate::domain::models::RepoId;

/// Resolve the repository scope: the config `repo` option when set,
/// otherwise the `GITHUB_REPOSITORY` environment variable.
pub(crate) fn resolve_repo(configured: Option<&str>) -> Result<RepoId> {
    let raw = match configured {
        Some(value) => value.to_string(),
        None => std::env::var("GITHUB_REPOSITORY").context(
            "no 'repo' option configured and GITHUB_REPOSITORY is not set",
        )?,
    };
    Ok(raw.parse::<RepoId>()?)
}
