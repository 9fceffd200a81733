//! xkcd Adapter Modules
//!
//! コミックソース（xkcd JSON API）との統合

pub mod client;
pub mod models;
