//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - HTTPやプラットフォームAPIについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ComicMetadata, WallAttachmentなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（コミック番号の選択）

pub mod entities;
pub mod repositories;
pub mod services;
