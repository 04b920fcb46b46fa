//! `check-sites` subcommand wiring.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::github::GitHubClient;
use crate::adapters::site::HttpSiteProbe;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::data_store::DataStore;
use crate::services::{CheckerOptions, SiteCheckerJob};

use super::resolve_repo;

/// Section of the config file this job reads. Older config files keep
/// these options at the document root; that form still works.
const CONFIG_SECTION: &str = "site_checker";

/// Default per-fetch timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of probe attempts per URL.
const DEFAULT_RETRY_TIMES: u32 = 3;

pub async fn execute(config_path: &Path) -> Result<()> {
    let loader = ConfigLoader::from_path(config_path);
    let mut section = loader.load(CONFIG_SECTION);
    if section.is_empty() {
        section = loader.load_root();
    }

    if !section.bool_opt("enabled").unwrap_or(false) {
        info!("site checker is disabled in config");
        return Ok(());
    }

    let repo = resolve_repo(section.str_opt("repo"))?;
    let options = CheckerOptions {
        repo,
        timeout: Duration::from_millis(
            section.u64_opt("timeout").unwrap_or(DEFAULT_TIMEOUT_MS),
        ),
        retry_times: section
            .u64_opt("retry_times")
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(DEFAULT_RETRY_TIMES)
            .max(1),
    };

    let tracker = GitHubClient::from_env();
    let probe = HttpSiteProbe::new();
    let root = std::env::current_dir().context("cannot resolve working directory")?;
    let store = DataStore::new(root);

    let job = SiteCheckerJob::new(&tracker, &probe, &store, options);
    let checked = job.run().await?;
    info!(sites = checked, "site checking complete");
    Ok(())
}
