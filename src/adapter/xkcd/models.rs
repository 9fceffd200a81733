//! xkcd wire models

use serde::Deserialize;
use url::Url;

/// `GET {base}/info.0.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LatestComic {
    pub num: u32,
}

/// `GET {base}/{num}/info.0.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ComicInfo {
    pub img: Url,
    pub alt: String,
    pub title: String,
}
