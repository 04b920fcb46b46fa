//! `parse-issues` subcommand wiring.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::github::GitHubClient;
use crate::domain::models::{IssueFilter, SortMode};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::data_store::DataStore;
use crate::services::{IssueParserJob, ParserOptions};

use super::resolve_repo;

/// Section of the config file this job reads.
const CONFIG_SECTION: &str = "issue_parser";

pub async fn execute(config_path: &Path) -> Result<()> {
    let loader = ConfigLoader::from_path(config_path);
    let section = loader.load(CONFIG_SECTION);

    if !section.bool_opt("enabled").unwrap_or(false) {
        info!("issue parser is disabled in config");
        return Ok(());
    }

    let repo = resolve_repo(section.str_opt("repo"))?;
    let options = ParserOptions {
        repo,
        filter: IssueFilter {
            label: section.str_opt("label").map(str::to_string),
            sort: SortMode::from_config(section.str_opt("sort")),
        },
        auto_close: section.bool_opt("auto_close").unwrap_or(false),
        invalid_label: section.str_opt("invalid_label").map(str::to_string),
    };

    let tracker = GitHubClient::from_env();
    let root = std::env::current_dir().context("cannot resolve working directory")?;
    let store = DataStore::new(root);

    let job = IssueParserJob::new(&tracker, &store, options);
    let written = job.run().await?;
    info!(records = written, "issue parsing complete");
    Ok(())
}
