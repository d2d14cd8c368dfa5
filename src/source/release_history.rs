//! Release-history page scraper

use regex::Regex;
use tracing::{debug, warn};

use crate::config;
use crate::source::provider::BootstrapperSource;
use crate::version::error::SourceError;
use crate::version::types::{BootstrapperTable, MajorLine};

/// Default host for the release-history documents
const DEFAULT_BASE_URL: &str = "https://learn.microsoft.com";

/// Scrapes release-history pages for Build Tools bootstrapper rows
pub struct ReleaseHistorySource {
    client: reqwest::Client,
    base_url: String,
    /// A version cell followed by a "Build Tools" download link. The 2019
    /// page and the 2022/2026 pages lay their tables out differently, but
    /// this matches both.
    row_re: Regex,
}

impl ReleaseHistorySource {
    /// Creates a source with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(config::USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            row_re: Regex::new(
                r#"(?s)<td>(\d{2}\.\d{1,2}\.\d{1,2})</td>.*?<a href="([^"]*?vs_[Bb]uild[Tt]ools\.exe)".*?>(?:<u>)?Build ?Tools(?:</u>)?</a></td>"#,
            )
            .unwrap(),
        }
    }

    /// Extracts version -> URL rows from a fetched document.
    ///
    /// Some versions appear twice, once under "LTSC" and once under
    /// "current", in adjacent rows; the first URL encountered is kept.
    fn extract_bootstrappers(&self, html: &str) -> BootstrapperTable {
        let mut table = BootstrapperTable::new();
        for caps in self.row_re.captures_iter(html) {
            let version = &caps[1];
            let url = &caps[2];
            if !table.insert_first(version, url) {
                debug!("duplicate row for {version}, keeping first URL");
            }
        }
        table
    }
}

impl Default for ReleaseHistorySource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl BootstrapperSource for ReleaseHistorySource {
    async fn bootstrappers(&self, line: MajorLine) -> Result<BootstrapperTable, SourceError> {
        let url = format!("{}{}", self.base_url, config::history_path(line));

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("release history returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let html = response.text().await.map_err(|e| {
            warn!("Failed to read release history response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        let table = self.extract_bootstrappers(&html);
        if table.is_empty() {
            return Err(SourceError::NoBootstrappers { url });
        }

        for sentinel in config::sentinel_versions(line) {
            if !table.contains(sentinel) {
                warn!("expected version {sentinel} missing from {url}; page format may have drifted");
            }
        }

        Ok(table)
    }
}
