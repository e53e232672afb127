//! Phrase sources — the one-shot asynchronous load of the card's phrase pool.
//!
//! A source yields an ordered list of strings from a JSON array. Two backends:
//! `FilePhraseSource` (local file, tokio fs) and `HttpPhraseSource` (reqwest GET).
//! There is no retry here; a failed load is reported to the caller as-is.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("Failed to read phrase file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Phrase source returned status {status}")]
    Status { status: u16 },

    #[error("Phrase data is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the card's phrases come from. Implement this to add a backend without
/// touching the startup code.
#[async_trait]
pub trait PhraseSource: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, PhraseError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Parses a JSON array of strings.
pub fn parse_phrases(bytes: &[u8]) -> Result<Vec<String>, PhraseError> {
    Ok(serde_json::from_slice::<Vec<String>>(bytes)?)
}

// ────────────────────────────────────────────────────────────────────────────
// File
// ────────────────────────────────────────────────────────────────────────────

pub struct FilePhraseSource {
    path: PathBuf,
}

impl FilePhraseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PhraseSource for FilePhraseSource {
    async fn load(&self) -> Result<Vec<String>, PhraseError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| PhraseError::Io {
                path: self.path.clone(),
                source,
            })?;
        let phrases = parse_phrases(&bytes)?;
        debug!(path = %self.path.display(), count = phrases.len(), "Read phrase file");
        Ok(phrases)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpPhraseSource {
    client: Client,
    url: String,
}

impl HttpPhraseSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PhraseError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl PhraseSource for HttpPhraseSource {
    async fn load(&self) -> Result<Vec<String>, PhraseError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PhraseError::Status {
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;
        let phrases = parse_phrases(&bytes)?;
        debug!(url = %self.url, count = phrases.len(), "Fetched phrases");
        Ok(phrases)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// Picks a backend from a `PHRASES_SOURCE`-style setting: `http://` and `https://`
/// select HTTP, anything else is a file path.
pub fn source_from_setting(
    setting: &str,
    timeout: Duration,
) -> Result<Box<dyn PhraseSource>, PhraseError> {
    let source: Box<dyn PhraseSource> =
        if setting.starts_with("http://") || setting.starts_with("https://") {
            Box::new(HttpPhraseSource::new(setting, timeout)?)
        } else {
            Box::new(FilePhraseSource::new(setting))
        };
    info!(source = %source.describe(), "Phrase source configured");
    Ok(source)
}
