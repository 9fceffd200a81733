//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SelectComicUseCase**: コミックの選択とメタデータ取得
//! - **FetchImageUseCase**: 画像のダウンロードと一時保存
//! - **PublishComicUseCase**: 選択からウォール投稿までのパイプライン全体

pub mod fetch_image;
pub mod publish_comic;
pub mod select_comic;
