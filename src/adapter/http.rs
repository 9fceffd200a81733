//! Shared HTTP plumbing
//!
//! HTTPクライアントの構築とエンドポイントURLの組み立て

use anyhow::{Context, Result};
use url::Url;

/// Build the shared HTTP client used by every adapter.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("Failed to build HTTP client")
}

/// Append `path` to `base`, keeping every segment of `base`.
pub fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).with_context(|| format!("Invalid endpoint URL: {}", joined))
}
