//! Loading the roster and results tables from disk or over HTTP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use boulderboard_core::Dataset;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed with status {status}: {url}")]
    HttpStatus { url: String, status: reqwest::StatusCode },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` values are URLs; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(raw.to_string())
        } else {
            Source::File(PathBuf::from(raw))
        }
    }

    pub async fn fetch(&self, client: &reqwest::Client) -> Result<String, SourceError> {
        match self {
            Source::Url(url) => {
                debug!(url = %url, "Fetching table");
                let resp = client.get(url).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(SourceError::HttpStatus {
                        url: url.clone(),
                        status,
                    });
                }
                Ok(resp.text().await?)
            }
            Source::File(path) => {
                debug!(path = %path.display(), "Reading table");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch both tables concurrently, then parse them. Nothing is aggregated
/// until both have arrived.
pub async fn load_dataset(roster: &Source, results: &Source) -> Result<Dataset> {
    let client = reqwest::Client::new();

    let (roster_text, results_text) = tokio::try_join!(
        async {
            roster
                .fetch(&client)
                .await
                .with_context(|| format!("Failed to load roster from {}", roster))
        },
        async {
            results
                .fetch(&client)
                .await
                .with_context(|| format!("Failed to load results from {}", results))
        },
    )?;

    let dataset = Dataset::from_csv(&roster_text, &results_text)?;
    info!(
        roster_rows = dataset.roster.len(),
        result_rows = dataset.results.len(),
        "Dataset loaded"
    );
    Ok(dataset)
}
