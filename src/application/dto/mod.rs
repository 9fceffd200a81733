//! # DTO
//!
//! - **PostConfig**: 投稿パイプラインの設定

pub mod post_config;
