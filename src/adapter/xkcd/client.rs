//! xkcd HTTP Client

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{ComicInfo, LatestComic};
use crate::adapter::http::endpoint;

/// Thin client over the xkcd JSON API.
pub struct XkcdClient {
    http: reqwest::Client,
    base_url: Url,
}

impl XkcdClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the index of the current comic
    pub async fn latest(&self) -> Result<LatestComic> {
        let url = endpoint(&self.base_url, "info.0.json")?;
        self.get_json(url).await
    }

    /// Fetch metadata of comic `num`
    pub async fn comic(&self, num: u32) -> Result<ComicInfo> {
        let url = endpoint(&self.base_url, &format!("{}/info.0.json", num))?;
        self.get_json(url).await
    }

    /// Download raw bytes from `url`
    pub async fn download(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let bytes = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;

        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Unexpected response from {}", url))
    }
}
