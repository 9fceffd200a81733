//! # Select Comic Use Case
//!
//! コミック選択ユースケース

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::domain::entities::comic::ComicMetadata;
use crate::domain::repositories::comic_repository::ComicRepository;
use crate::domain::services::comic_picker::ComicPicker;

/// 選ばれたコミック
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedComic {
    /// コミック番号
    pub num: u32,
    /// メタデータ
    pub comic: ComicMetadata,
}

/// コミック選択ユースケース
///
/// 最新番号を取得し、[1, 最新] から番号を選んでメタデータを取得する
pub struct SelectComicUseCase<C: ComicRepository, P: ComicPicker + ?Sized> {
    comic_repository: Arc<C>,
    picker: Arc<P>,
}

impl<C: ComicRepository, P: ComicPicker + ?Sized> SelectComicUseCase<C, P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `comic_repository` - コミックリポジトリ
    /// * `picker` - 番号の選択戦略
    pub fn new(comic_repository: Arc<C>, picker: Arc<P>) -> Self {
        Self {
            comic_repository,
            picker,
        }
    }

    /// コミックを選んでメタデータを取得
    ///
    /// # Errors
    ///
    /// 取得に失敗した場合、またはコミックが一つも存在しない場合にエラーを返す
    pub async fn execute(&self) -> Result<SelectedComic> {
        let latest = self
            .comic_repository
            .latest_comic_num()
            .await
            .context("Failed to fetch latest comic number")?;

        let num = self
            .picker
            .pick(latest)
            .ok_or_else(|| anyhow!("Comic source reports no comics (latest = {})", latest))?;

        info!("Selected comic #{} of {}", num, latest);

        let comic = self
            .comic_repository
            .fetch_comic(num)
            .await
            .with_context(|| format!("Failed to fetch comic #{}", num))?;

        Ok(SelectedComic { num, comic })
    }
}
