//! # Wall Repository Trait
//!
//! コミュニティウォールへの写真アップロードと投稿を抽象化
//!
//! 各メソッドはプラットフォームのAPI契約に従った一連の手順に対応する：
//! アップロード先の取得 → アップロード → 写真の保存 → 投稿

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::photo::{UploadResult, WallAttachment};

/// ウォールリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WallRepository: Send + Sync {
    /// グループ用の一回限りのアップロードURLを取得
    async fn get_upload_url(&self, group_id: u64) -> Result<Url>;

    /// 画像をアップロード先にマルチパートで送信
    ///
    /// # Arguments
    ///
    /// * `upload_url` - `get_upload_url` で取得したURL
    /// * `file_name` - マルチパートのファイル名
    /// * `bytes` - 画像の生バイト列
    async fn upload_photo(
        &self,
        upload_url: &Url,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult>;

    /// アップロード結果を恒久的な写真に変換
    async fn save_wall_photo(&self, group_id: u64, upload: &UploadResult)
        -> Result<WallAttachment>;

    /// 添付付きのメッセージをグループのウォールに投稿
    ///
    /// # Returns
    ///
    /// 作成された投稿のID
    async fn post_to_wall(
        &self,
        group_id: u64,
        attachment: &WallAttachment,
        message: &str,
    ) -> Result<i64>;
}
