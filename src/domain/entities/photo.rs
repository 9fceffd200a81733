//! # Photo Entities
//!
//! アップロードされた写真と、ウォール投稿用の添付参照

use std::fmt;

/// アップロードエンドポイントの応答
///
/// Uploader が生成し、Publisher の保存ステップで消費する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// アップロード先サーバーの識別子
    pub server: i64,
    /// アップロードのハッシュ
    pub hash: String,
    /// 不透明な写真トークン
    pub photo_token: String,
}

impl UploadResult {
    pub fn new(server: i64, hash: String, photo_token: String) -> Self {
        Self {
            server,
            hash,
            photo_token,
        }
    }
}

/// 保存済みの写真への参照
///
/// `Display` で `photo{owner_id}_{media_id}` 形式の添付文字列になる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallAttachment {
    pub owner_id: i64,
    pub media_id: i64,
}

impl WallAttachment {
    pub fn new(owner_id: i64, media_id: i64) -> Self {
        Self { owner_id, media_id }
    }
}

/// コミュニティのウォール所有者ID
///
/// コミュニティとして投稿する場合、所有者IDはグループIDの負数になる
pub fn community_owner_id(group_id: u64) -> i64 {
    -(group_id as i64)
}

impl fmt::Display for WallAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "photo{}_{}", self.owner_id, self.media_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_negative_owner() {
        let attachment = WallAttachment::new(-123, 456);
        assert_eq!(attachment.to_string(), "photo-123_456");
    }

    #[test]
    fn test_attachment_positive_owner() {
        let attachment = WallAttachment::new(42, 7);
        assert_eq!(attachment.to_string(), "photo42_7");
    }

    #[test]
    fn test_community_owner_id() {
        assert_eq!(community_owner_id(123), -123);
        let attachment = WallAttachment::new(community_owner_id(123), 456);
        assert_eq!(attachment.to_string(), "photo-123_456");
    }
}
