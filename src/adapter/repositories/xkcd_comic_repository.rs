//! xkcd Comic Repository Implementation
//!
//! ComicRepositoryのxkcd実装

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use url::Url;

use crate::adapter::xkcd::client::XkcdClient;
use crate::adapter::xkcd::models::ComicInfo;
use crate::domain::entities::comic::ComicMetadata;
use crate::domain::repositories::comic_repository::ComicRepository;

pub struct XkcdComicRepository {
    client: XkcdClient,
}

impl XkcdComicRepository {
    pub fn new(client: XkcdClient) -> Self {
        Self { client }
    }

    fn to_domain(info: ComicInfo) -> ComicMetadata {
        ComicMetadata::new(info.img, info.alt, info.title)
    }
}

#[async_trait]
impl ComicRepository for XkcdComicRepository {
    async fn latest_comic_num(&self) -> Result<u32> {
        let latest = self.client.latest().await?;
        info!("Latest comic is #{}", latest.num);
        Ok(latest.num)
    }

    async fn fetch_comic(&self, num: u32) -> Result<ComicMetadata> {
        let info = self.client.comic(num).await?;
        info!("Fetched comic #{}: {}", num, info.title);
        Ok(Self::to_domain(info))
    }

    async fn download_image(&self, image_url: &Url) -> Result<Vec<u8>> {
        self.client.download(image_url).await
    }
}
