//! VK Adapter Modules
//!
//! ソーシャルネットワークのAPI（写真アップロードとウォール投稿）との統合

pub mod client;
pub mod error;
pub mod models;
