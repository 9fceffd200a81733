//! # Domain Services
//!
//! - **ComicPicker**: 投稿するコミック番号の選択

pub mod comic_picker;
