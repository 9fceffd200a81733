//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション（依存性注入とパイプラインの起動）

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::build_http_client;
use crate::adapter::repositories::vk_wall_repository::VkWallRepository;
use crate::adapter::repositories::xkcd_comic_repository::XkcdComicRepository;
use crate::adapter::vk::client::VkClient;
use crate::adapter::xkcd::client::XkcdClient;
use crate::application::use_cases::publish_comic::{PublishComicUseCase, PublishedPost};
use crate::domain::services::comic_picker::{ComicPicker, RandomPicker};

/// Comic Post Workflow
pub struct ComicPostWorkflow {
    config: Config,
    picker: Arc<dyn ComicPicker>,
}

impl ComicPostWorkflow {
    /// Create a workflow that posts a uniformly random comic
    pub fn new(config: Config) -> Self {
        Self::with_picker(config, Arc::new(RandomPicker))
    }

    /// Create a workflow with a custom comic picker
    pub fn with_picker(config: Config, picker: Arc<dyn ComicPicker>) -> Self {
        Self { config, picker }
    }

    /// Execute the post workflow
    pub async fn execute(&self) -> Result<PublishedPost> {
        info!("Starting comic poster...");

        println!("✓ Using configuration:");
        println!("  Group: {}", self.config.group_id);
        println!("  API version: {}", self.config.api_version);
        println!("  Work dir: {}", self.config.work_dir.display());

        let http = build_http_client()?;

        let comic_repo = Arc::new(XkcdComicRepository::new(XkcdClient::new(
            http.clone(),
            self.config.xkcd_base_url.clone(),
        )));
        let wall_repo = Arc::new(VkWallRepository::new(VkClient::new(http, &self.config)));

        let use_case = PublishComicUseCase::new(comic_repo, wall_repo, self.picker.clone());
        let post = use_case.execute(&self.config.post_config()).await?;

        println!("✓ Posted comic #{} \"{}\"", post.comic_num, post.title);
        println!("  Attachment: {}", post.attachment);
        println!("  Post ID: {}", post.post_id);

        Ok(post)
    }
}
