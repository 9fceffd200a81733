//! # Fetch Image Use Case
//!
//! 画像取得ユースケース

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::domain::entities::comic::ComicMetadata;
use crate::domain::entities::temp_image::TempImage;
use crate::domain::repositories::comic_repository::ComicRepository;

/// 画像取得ユースケース
///
/// コミックの画像をダウンロードし、`<title><ext>` として一時保存する
pub struct FetchImageUseCase<C: ComicRepository> {
    comic_repository: Arc<C>,
}

impl<C: ComicRepository> FetchImageUseCase<C> {
    /// 新しいユースケースを作成
    pub fn new(comic_repository: Arc<C>) -> Self {
        Self { comic_repository }
    }

    /// 画像をダウンロードして一時ファイルに書き込む
    ///
    /// # Arguments
    ///
    /// * `comic` - 対象コミックのメタデータ
    /// * `work_dir` - 一時ファイルを置くディレクトリ
    ///
    /// # Returns
    ///
    /// 書き込み済みの一時画像（ドロップ時に削除される）
    pub async fn execute(&self, comic: &ComicMetadata, work_dir: &Path) -> Result<TempImage> {
        let bytes = self
            .comic_repository
            .download_image(&comic.image_url)
            .await
            .with_context(|| format!("Failed to download image {}", comic.image_url))?;

        let file_name = comic.image_file_name();
        let image = TempImage::create(work_dir, &file_name, &bytes).with_context(|| {
            format!(
                "Failed to write image to {}",
                work_dir.join(&file_name).display()
            )
        })?;

        info!(
            "Saved {} bytes of '{}' to {}",
            bytes.len(),
            comic.title,
            image.path().display()
        );

        Ok(image)
    }
}
