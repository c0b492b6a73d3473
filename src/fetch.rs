// src/fetch.rs

//! Manifest retrieval over HTTP
//!
//! Manifests are read straight from the source repositories' default branch:
//! `{source_url}/mediawiki-{kind}s-{name}/master/{kind}.json`.
//! One request per target, no retries and no caching.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::target::SurveyTarget;
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Default location of the MediaWiki extension/skin repositories
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/wikimedia";

/// Something that can produce the manifest for a survey target
pub trait ManifestSource {
    /// Fetch and decode the manifest for `target`
    fn fetch(&self, target: &SurveyTarget) -> Result<Manifest>;
}

/// Build the manifest URL for a target under `source_url`
pub fn manifest_url(source_url: &str, target: &SurveyTarget) -> String {
    let kind = target.kind.as_str();
    format!(
        "{}/mediawiki-{kind}s-{}/master/{}",
        source_url.trim_end_matches('/'),
        target.name,
        target.kind.manifest_file()
    )
}

/// Fetch a manifest, logging and swallowing any failure
///
/// `None` means the target contributes nothing to the report.
pub fn fetch_or_skip<S: ManifestSource + ?Sized>(
    source: &S,
    target: &SurveyTarget,
) -> Option<Manifest> {
    match source.fetch(target) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!("Skipping {}: {}", target, e);
            None
        }
    }
}

/// HTTP client for manifest downloads
pub struct ManifestClient {
    client: Client,
    source_url: String,
}

impl ManifestClient {
    /// Create a client for the default source
    pub fn new() -> Result<Self> {
        Self::with_source_url(DEFAULT_SOURCE_URL)
    }

    /// Create a client reading manifests from `source_url`
    pub fn with_source_url(source_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            source_url: source_url.into(),
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Download the raw manifest body for a target
    fn download(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::DownloadError(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .map_err(|e| Error::DownloadError(format!("Failed to read response from {url}: {e}")))
    }
}

impl ManifestSource for ManifestClient {
    fn fetch(&self, target: &SurveyTarget) -> Result<Manifest> {
        let url = manifest_url(&self.source_url, target);
        debug!("Fetching manifest for {} from {}", target, url);

        let body = self.download(&url)?;
        let manifest = Manifest::from_json(&body).map_err(|e| match e {
            Error::ParseError(msg) => Error::ParseError(format!("{msg} (from {url})")),
            other => other,
        })?;

        debug!("Decoded {} top-level keys for {}", manifest.len(), target);
        Ok(manifest)
    }
}
