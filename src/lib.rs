//! # Comic Poster
//!
//! ランダムな xkcd コミックを取得し、VK コミュニティのウォールに画像とキャプションを投稿するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティとRepository trait（外部システムを知らない）
//! - **Application層**: 投稿パイプライン（ユースケース）
//! - **Adapter層**: 外部システムとの統合（xkcd, VK, 環境変数）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
