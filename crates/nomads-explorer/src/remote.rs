//! Discovery over HTTP directory indexes (NOMADS).
//!
//! The production tree is laid out as
//! `<root>/nwm.YYYYMMDD/<configuration directory>/<file>.nc`, each level
//! served as an Apache-style HTML index. Requests are made one at a time.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use reqwest::{Client, Url};
use tracing::{debug, info, instrument, warn};

use crate::catalog::{parse_date_directory, CatalogEntry, CatalogFilter};
use crate::discovery::Explorer;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filename::parse_nwm_filename;

/// Production NOMADS root for the National Water Model.
pub const NOMADS_PROD_URL: &str = "https://nomads.ncep.noaa.gov/pub/data/nccf/com/nwm/prod/";

/// HTTP settings for the remote explorer.
#[derive(Debug, Clone)]
pub struct RemoteExplorerConfig {
    /// Timeout for a single index request
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for RemoteExplorerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// Walks NOMADS-style HTML directory indexes.
pub struct RemoteExplorer {
    client: Client,
}

impl RemoteExplorer {
    pub fn new() -> ExplorerResult<Self> {
        Self::with_config(RemoteExplorerConfig::default())
    }

    pub fn with_config(config: RemoteExplorerConfig) -> ExplorerResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch an index page and return the links it names.
    async fn list(&self, url: &Url) -> ExplorerResult<Vec<String>> {
        debug!(url = %url, "Listing directory index");

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ExplorerError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(extract_links(&body))
    }
}

/// Parse the root address, making sure it is treated as a directory.
pub fn directory_url(address: &str) -> ExplorerResult<Url> {
    let mut address = address.trim().to_string();
    if !address.ends_with('/') {
        address.push('/');
    }

    let url = Url::parse(&address).map_err(|e| ExplorerError::InvalidAddress {
        address: address.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ExplorerError::InvalidAddress {
            address,
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)href\s*=\s*"([^"]+)""#).expect("valid href pattern"))
}

/// Extract relative child links from an HTML directory index.
///
/// Sort links (`?C=N;O=D`), absolute paths (the parent directory), anchors
/// and links to other hosts are dropped.
pub fn extract_links(html: &str) -> Vec<String> {
    href_pattern()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|href| {
            !href.starts_with('?')
                && !href.starts_with('/')
                && !href.starts_with('#')
                && !href.starts_with("..")
                && !href.contains("://")
        })
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl Explorer for RemoteExplorer {
    fn name(&self) -> &'static str {
        "remote"
    }

    #[instrument(skip(self, filter), fields(explorer = "remote"))]
    async fn explore(
        &self,
        address: &str,
        filter: &CatalogFilter,
    ) -> ExplorerResult<Vec<CatalogEntry>> {
        let root = directory_url(address)?;
        let now = Utc::now();
        let mut entries = Vec::new();

        let mut dates: Vec<_> = self
            .list(&root)
            .await?
            .into_iter()
            .filter(|link| link.ends_with('/'))
            .filter_map(|link| parse_date_directory(&link).map(|date| (date, link)))
            .collect();
        dates.sort();

        info!(count = dates.len(), "Found NWM date directories");

        for (date, date_link) in dates {
            if !filter.admits_date(date, now) {
                debug!(date = %date, "Skipping date outside issuance window");
                continue;
            }

            let date_url = match root.join(&date_link) {
                Ok(url) => url,
                Err(e) => {
                    warn!(link = %date_link, error = %e, "Unusable date link");
                    continue;
                }
            };

            let dir_links = match self.list(&date_url).await {
                Ok(links) => links,
                Err(e) => {
                    warn!(url = %date_url, error = %e, "Failed to list date directory");
                    continue;
                }
            };

            for dir_link in dir_links {
                if !dir_link.ends_with('/') || !filter.admits_directory(&dir_link) {
                    continue;
                }
                let dir_url = match date_url.join(&dir_link) {
                    Ok(url) => url,
                    Err(e) => {
                        warn!(link = %dir_link, error = %e, "Unusable directory link");
                        continue;
                    }
                };

                let files = match self.list(&dir_url).await {
                    Ok(files) => files,
                    Err(e) => {
                        warn!(url = %dir_url, error = %e, "Failed to list directory");
                        continue;
                    }
                };

                for file in files {
                    let Some(info) = parse_nwm_filename(&file) else {
                        debug!(file = %file, "Skipping non-NWM file");
                        continue;
                    };
                    let Ok(location) = dir_url.join(&file) else {
                        continue;
                    };
                    let Some(entry) = CatalogEntry::new(location.to_string(), date, info) else {
                        continue;
                    };
                    if filter.admits(&entry, now) {
                        entries.push(entry);
                    }
                }
            }
        }

        info!(count = entries.len(), "Remote exploration complete");
        Ok(entries)
    }
}
