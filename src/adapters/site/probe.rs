//! HTTP site probe.
//!
//! Fetches a listed site and inspects its HTML for the theme marker
//! meta tag. All failures along the way (connect, timeout, non-success
//! status, unreadable body) classify as [`CheckOutcome::Error`] — a
//! probe never fails the run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::domain::models::CheckOutcome;
use crate::domain::ports::SiteProbe;

/// The meta tag Stellar-based sites emit into every page head.
const THEME_META_SELECTOR: &str = r#"meta[name="hexo-theme"]"#;

/// Value of the `theme-name` attribute that identifies the theme.
/// Matched exactly; forks that rename the theme are classified as
/// not running it.
const THEME_NAME: &str = "Stellar";

/// Probe that performs a real HTTP GET and parses the response HTML.
#[derive(Debug, Clone, Default)]
pub struct HttpSiteProbe {
    http: Client,
}

impl HttpSiteProbe {
    pub fn new() -> Self {
        Self::default()
    }

    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, reqwest::Error> {
        self.http
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// Classify a page body by its theme marker tag.
    fn classify(html: &str) -> CheckOutcome {
        let document = Html::parse_document(html);
        let selector = Selector::parse(THEME_META_SELECTOR).unwrap();

        match document.select(&selector).next() {
            Some(tag) if tag.value().attr("theme-name") == Some(THEME_NAME) => {
                CheckOutcome::Stellar {
                    version: tag.value().attr("theme-version").map(str::to_string),
                }
            }
            Some(_) | None => CheckOutcome::NotStellar,
        }
    }
}

#[async_trait]
impl SiteProbe for HttpSiteProbe {
    async fn check(&self, url: &str, timeout: Duration) -> CheckOutcome {
        match self.fetch(url, timeout).await {
            Ok(body) => Self::classify(&body),
            Err(err) => {
                tracing::warn!(url = url, error = %err, "site fetch failed");
                CheckOutcome::Error
            }
        }
    }
}
