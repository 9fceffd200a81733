//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ComicMetadata**: 投稿対象のコミック
//! - **UploadResult / WallAttachment**: アップロード済み写真の識別子
//! - **TempImage**: スコープ付きの一時画像ファイル

pub mod comic;
pub mod photo;
pub mod temp_image;
