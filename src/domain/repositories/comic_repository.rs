//! # Comic Repository Trait
//!
//! コミックの取得を抽象化

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::comic::ComicMetadata;

/// コミックリポジトリ
///
/// コミックソースからのメタデータと画像の取得を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ComicRepository: Send + Sync {
    /// 最新のコミック番号を取得
    async fn latest_comic_num(&self) -> Result<u32>;

    /// 指定番号のコミックのメタデータを取得
    ///
    /// # Arguments
    ///
    /// * `num` - コミック番号（1以上）
    async fn fetch_comic(&self, num: u32) -> Result<ComicMetadata>;

    /// 画像の生バイト列をダウンロード
    ///
    /// # Arguments
    ///
    /// * `image_url` - 画像のURL
    async fn download_image(&self, image_url: &Url) -> Result<Vec<u8>>;
}
