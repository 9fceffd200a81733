//! # Publish Comic Use Case
//!
//! コミック投稿ユースケース（パイプライン全体）
//!
//! 5つのステージを順に実行する。各ステージは前のステージの成功を条件とし、
//! いずれかが失敗した時点で [`Aborted`] として終了する。リトライや分岐はない。
//!
//! ```text
//! SelectComic → FetchImage → NegotiateUpload → UploadImage → Publish
//! ```
//!
//! 一時画像は `FetchImage` で作られ、成功時は明示的に、失敗時はドロップで削除される。

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use thiserror::Error;

use crate::application::dto::post_config::PostConfig;
use crate::application::use_cases::fetch_image::FetchImageUseCase;
use crate::application::use_cases::select_comic::SelectComicUseCase;
use crate::domain::entities::photo::WallAttachment;
use crate::domain::repositories::comic_repository::ComicRepository;
use crate::domain::repositories::wall_repository::WallRepository;
use crate::domain::services::comic_picker::ComicPicker;

/// パイプラインのステージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectComic,
    FetchImage,
    NegotiateUpload,
    UploadImage,
    Publish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SelectComic => "select comic",
            Stage::FetchImage => "fetch image",
            Stage::NegotiateUpload => "negotiate upload",
            Stage::UploadImage => "upload image",
            Stage::Publish => "publish",
        };
        f.write_str(name)
    }
}

/// 終端状態：どのステージで中断したか
///
/// エラーチェーンのコンテキストとして付与されるため、
/// `err.downcast_ref::<Aborted>()` で取り出せる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pipeline aborted at stage '{0}'")]
pub struct Aborted(pub Stage);

/// 投稿結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// 投稿したコミック番号
    pub comic_num: u32,
    /// コミックのタイトル
    pub title: String,
    /// 添付した写真
    pub attachment: WallAttachment,
    /// 作成された投稿のID
    pub post_id: i64,
}

/// コミック投稿ユースケース
pub struct PublishComicUseCase<C, W, P>
where
    C: ComicRepository,
    W: WallRepository,
    P: ComicPicker + ?Sized,
{
    select_use_case: SelectComicUseCase<C, P>,
    fetch_use_case: FetchImageUseCase<C>,
    wall_repository: Arc<W>,
}

impl<C, W, P> PublishComicUseCase<C, W, P>
where
    C: ComicRepository,
    W: WallRepository,
    P: ComicPicker + ?Sized,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `comic_repository` - コミックリポジトリ
    /// * `wall_repository` - ウォールリポジトリ
    /// * `picker` - コミック番号の選択戦略
    pub fn new(comic_repository: Arc<C>, wall_repository: Arc<W>, picker: Arc<P>) -> Self {
        Self {
            select_use_case: SelectComicUseCase::new(comic_repository.clone(), picker),
            fetch_use_case: FetchImageUseCase::new(comic_repository),
            wall_repository,
        }
    }

    /// パイプラインを実行
    ///
    /// # Errors
    ///
    /// いずれかのステージが失敗した場合、[`Aborted`] をコンテキストに持つエラーを返す。
    /// 一時画像はその時点で削除済み。
    pub async fn execute(&self, config: &PostConfig) -> Result<PublishedPost> {
        let selected = self
            .select_use_case
            .execute()
            .await
            .context(Aborted(Stage::SelectComic))?;

        let image = self
            .fetch_use_case
            .execute(&selected.comic, &config.work_dir)
            .await
            .context(Aborted(Stage::FetchImage))?;

        let upload_url = self
            .wall_repository
            .get_upload_url(config.group_id)
            .await
            .context(Aborted(Stage::NegotiateUpload))?;
        info!("Negotiated upload slot for group {}", config.group_id);

        let bytes = image
            .read()
            .with_context(|| format!("Failed to read {}", image.path().display()))
            .context(Aborted(Stage::UploadImage))?;
        let upload = self
            .wall_repository
            .upload_photo(&upload_url, &image.file_name(), bytes)
            .await
            .context(Aborted(Stage::UploadImage))?;
        info!("Uploaded image to server {}", upload.server);

        let attachment = self
            .wall_repository
            .save_wall_photo(config.group_id, &upload)
            .await
            .context(Aborted(Stage::Publish))?;
        let post_id = self
            .wall_repository
            .post_to_wall(config.group_id, &attachment, &selected.comic.caption)
            .await
            .context(Aborted(Stage::Publish))?;
        info!("Published post {} with {}", post_id, attachment);

        image
            .remove()
            .context("Failed to remove temporary image")?;

        Ok(PublishedPost {
            comic_num: selected.num,
            title: selected.comic.title,
            attachment,
            post_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use mockall::predicate::eq;
    use tempfile::TempDir;
    use url::Url;

    use crate::domain::entities::comic::ComicMetadata;
    use crate::domain::entities::photo::UploadResult;
    use crate::domain::repositories::comic_repository::MockComicRepository;
    use crate::domain::repositories::wall_repository::MockWallRepository;
    use crate::domain::services::comic_picker::FixedPicker;

    const GROUP_ID: u64 = 100;
    const UPLOAD_URL: &str = "https://pu.vk.com/c1/upload.php?act=do_add";

    fn comic_three() -> ComicMetadata {
        ComicMetadata::new(
            Url::parse("https://imgs.xkcd.com/comics/island_color.png").unwrap(),
            "Hello, island".to_string(),
            "Island".to_string(),
        )
    }

    fn comic_repository() -> MockComicRepository {
        let mut repo = MockComicRepository::new();
        repo.expect_latest_comic_num().times(1).returning(|| Ok(5));
        repo.expect_fetch_comic()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(comic_three()));
        repo.expect_download_image()
            .withf(|url| url.as_str() == "https://imgs.xkcd.com/comics/island_color.png")
            .times(1)
            .returning(|_| Ok(b"IMG".to_vec()));
        repo
    }

    fn use_case(
        comic_repo: MockComicRepository,
        wall_repo: MockWallRepository,
    ) -> PublishComicUseCase<MockComicRepository, MockWallRepository, FixedPicker> {
        PublishComicUseCase::new(
            Arc::new(comic_repo),
            Arc::new(wall_repo),
            Arc::new(FixedPicker(3)),
        )
    }

    fn aborted_stage(err: &anyhow::Error) -> Option<Stage> {
        err.downcast_ref::<Aborted>().map(|a| a.0)
    }

    #[tokio::test]
    async fn test_publish_full_pipeline() {
        let dir = TempDir::new().unwrap();
        let image_path = dir.path().join("Island.png");

        let mut wall = MockWallRepository::new();
        wall.expect_get_upload_url()
            .with(eq(GROUP_ID))
            .times(1)
            .returning(|_| Ok(Url::parse(UPLOAD_URL).unwrap()));

        let path_during_upload = image_path.clone();
        wall.expect_upload_photo()
            .withf(move |url, name, bytes| {
                url.as_str() == UPLOAD_URL
                    && name == "Island.png"
                    && bytes.as_slice() == b"IMG"
                    && path_during_upload.exists()
            })
            .times(1)
            .returning(|_, _, _| Ok(UploadResult::new(1, "h".to_string(), "p".to_string())));
        wall.expect_save_wall_photo()
            .withf(|group_id, upload| {
                *group_id == GROUP_ID
                    && *upload == UploadResult::new(1, "h".to_string(), "p".to_string())
            })
            .times(1)
            .returning(|_, _| Ok(WallAttachment::new(-100, 77)));
        wall.expect_post_to_wall()
            .withf(|group_id, attachment, message| {
                *group_id == GROUP_ID
                    && attachment.to_string() == "photo-100_77"
                    && message == "Hello, island"
            })
            .times(1)
            .returning(|_, _, _| Ok(9001));

        let config = PostConfig::new(GROUP_ID, dir.path().to_path_buf());
        let post = use_case(comic_repository(), wall)
            .execute(&config)
            .await
            .unwrap();

        assert_eq!(
            post,
            PublishedPost {
                comic_num: 3,
                title: "Island".to_string(),
                attachment: WallAttachment::new(-100, 77),
                post_id: 9001,
            }
        );
        assert!(!image_path.exists());
    }

    #[tokio::test]
    async fn test_negotiate_failure_removes_image() {
        let dir = TempDir::new().unwrap();

        let mut wall = MockWallRepository::new();
        wall.expect_get_upload_url()
            .returning(|_| Err(anyhow!("VK API error 15: Access denied")));
        wall.expect_upload_photo().never();
        wall.expect_save_wall_photo().never();
        wall.expect_post_to_wall().never();

        let config = PostConfig::new(GROUP_ID, dir.path().to_path_buf());
        let err = use_case(comic_repository(), wall)
            .execute(&config)
            .await
            .unwrap_err();

        assert_eq!(aborted_stage(&err), Some(Stage::NegotiateUpload));
        assert!(format!("{:#}", err).contains("Access denied"));
        assert!(!dir.path().join("Island.png").exists());
    }

    #[tokio::test]
    async fn test_upload_failure_removes_image() {
        let dir = TempDir::new().unwrap();

        let mut wall = MockWallRepository::new();
        wall.expect_get_upload_url()
            .returning(|_| Ok(Url::parse(UPLOAD_URL).unwrap()));
        wall.expect_upload_photo()
            .returning(|_, _, _| Err(anyhow!("connection reset")));
        wall.expect_save_wall_photo().never();
        wall.expect_post_to_wall().never();

        let config = PostConfig::new(GROUP_ID, dir.path().to_path_buf());
        let err = use_case(comic_repository(), wall)
            .execute(&config)
            .await
            .unwrap_err();

        assert_eq!(aborted_stage(&err), Some(Stage::UploadImage));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_post_failure_removes_image() {
        let dir = TempDir::new().unwrap();

        let mut wall = MockWallRepository::new();
        wall.expect_get_upload_url()
            .returning(|_| Ok(Url::parse(UPLOAD_URL).unwrap()));
        wall.expect_upload_photo()
            .returning(|_, _, _| Ok(UploadResult::new(1, "h".to_string(), "p".to_string())));
        wall.expect_save_wall_photo()
            .returning(|_, _| Ok(WallAttachment::new(-100, 77)));
        wall.expect_post_to_wall()
            .returning(|_, _, _| Err(anyhow!("VK API error 214: Access to adding post denied")));

        let config = PostConfig::new(GROUP_ID, dir.path().to_path_buf());
        let err = use_case(comic_repository(), wall)
            .execute(&config)
            .await
            .unwrap_err();

        assert_eq!(aborted_stage(&err), Some(Stage::Publish));
        assert!(!dir.path().join("Island.png").exists());
    }

    #[tokio::test]
    async fn test_select_failure_touches_nothing() {
        let dir = TempDir::new().unwrap();

        let mut comic_repo = MockComicRepository::new();
        comic_repo
            .expect_latest_comic_num()
            .returning(|| Err(anyhow!("500 Internal Server Error")));
        comic_repo.expect_download_image().never();

        let mut wall = MockWallRepository::new();
        wall.expect_get_upload_url().never();

        let config = PostConfig::new(GROUP_ID, dir.path().to_path_buf());
        let err = use_case(comic_repo, wall)
            .execute(&config)
            .await
            .unwrap_err();

        assert_eq!(aborted_stage(&err), Some(Stage::SelectComic));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_aborted_display() {
        assert_eq!(
            Aborted(Stage::NegotiateUpload).to_string(),
            "pipeline aborted at stage 'negotiate upload'"
        );
    }
}
