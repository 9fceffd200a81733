//! # Post Configuration DTO
//!
//! 投稿設定のData Transfer Object

use std::path::PathBuf;

/// 投稿設定
///
/// パイプライン全体に引数として渡される。環境変数はここでは読まない。
#[derive(Debug, Clone)]
pub struct PostConfig {
    /// 投稿先コミュニティのID（正の値）
    pub group_id: u64,
    /// 一時画像を書き込むディレクトリ
    pub work_dir: PathBuf,
}

impl PostConfig {
    /// 新しい投稿設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use comic_poster::application::dto::post_config::PostConfig;
    ///
    /// let config = PostConfig::new(123, "/tmp".into());
    /// assert_eq!(config.group_id, 123);
    /// ```
    pub fn new(group_id: u64, work_dir: PathBuf) -> Self {
        Self { group_id, work_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_config_new() {
        let config = PostConfig::new(42, PathBuf::from("/work"));

        assert_eq!(config.group_id, 42);
        assert_eq!(config.work_dir, PathBuf::from("/work"));
    }
}
