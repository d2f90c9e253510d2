//! Upstream HTTP client
//!
//! Thin wrapper around `reqwest` for the two provider calls: the video
//! metadata lookup and the raw playlist fetch. The provider expects a
//! browser-like header set (`User-Agent`, `Referer`), so those are baked
//! into the client as default headers. Non-success responses are mapped to
//! [`AppError::Upstream`] with the provider's status preserved; failures
//! are surfaced, never retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::errors::AppError;
use crate::models::VideoMetadata;

const METADATA_TIMEOUT: Duration = Duration::from_secs(10);
const PLAYLIST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    metadata_base: String,
}

impl Client {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(REFERER, HeaderValue::from_str(&config.referer)?);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            metadata_base: config.metadata_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the player metadata document for a video id
    pub async fn fetch_metadata(&self, id: &str) -> Result<VideoMetadata, AppError> {
        let url = format!("{}/player/metadata/video/{}", self.metadata_base, id);
        debug!("Fetching video metadata: {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .timeout(METADATA_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::upstream(response.status().as_u16(), url));
        }

        Ok(response.json().await?)
    }

    /// Fetch raw playlist text from a master playlist URL
    pub async fn fetch_playlist(&self, url: &str) -> Result<String, AppError> {
        debug!("Fetching playlist: {}", url);

        let response = self.http.get(url).timeout(PLAYLIST_TIMEOUT).send().await?;

        if !response.status().is_success() {
            return Err(AppError::upstream(response.status().as_u16(), url));
        }

        Ok(response.text().await?)
    }
}
