//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod vk_wall_repository;
pub mod xkcd_comic_repository;
