//! Adapter Layer
//!
//! 外部システム（xkcd, VK, 環境変数）との統合

pub mod config;
pub mod http;
pub mod repositories;
pub mod vk;
pub mod xkcd;
