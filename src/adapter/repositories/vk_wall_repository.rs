//! VK Wall Repository Implementation
//!
//! WallRepositoryのVK実装

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::adapter::vk::client::VkClient;
use crate::adapter::vk::error::VkError;
use crate::adapter::vk::models::{SavedPhoto, UploadedPhoto};
use crate::domain::entities::photo::{community_owner_id, UploadResult, WallAttachment};
use crate::domain::repositories::wall_repository::WallRepository;

pub struct VkWallRepository {
    client: VkClient,
}

impl VkWallRepository {
    pub fn new(client: VkClient) -> Self {
        Self { client }
    }

    fn to_upload_result(photo: UploadedPhoto) -> Result<UploadResult, VkError> {
        if photo.is_empty() {
            return Err(VkError::MalformedResponse(
                "upload endpoint returned no photo".to_string(),
            ));
        }
        Ok(UploadResult::new(photo.server, photo.hash, photo.photo))
    }

    fn to_attachment(saved: Vec<SavedPhoto>) -> Result<WallAttachment, VkError> {
        saved
            .into_iter()
            .next()
            .map(|p| WallAttachment::new(p.owner_id, p.id))
            .ok_or_else(|| {
                VkError::MalformedResponse("photos.saveWallPhoto returned no photos".to_string())
            })
    }
}

#[async_trait]
impl WallRepository for VkWallRepository {
    async fn get_upload_url(&self, group_id: u64) -> Result<Url> {
        let server = self.client.get_wall_upload_server(group_id).await?;
        Ok(server.upload_url)
    }

    async fn upload_photo(
        &self,
        upload_url: &Url,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult> {
        let photo = self.client.upload_photo(upload_url, file_name, bytes).await?;
        Ok(Self::to_upload_result(photo)?)
    }

    async fn save_wall_photo(&self, group_id: u64, upload: &UploadResult) -> Result<WallAttachment> {
        let saved = self
            .client
            .save_wall_photo(group_id, &upload.photo_token, upload.server, &upload.hash)
            .await?;
        Ok(Self::to_attachment(saved)?)
    }

    async fn post_to_wall(
        &self,
        group_id: u64,
        attachment: &WallAttachment,
        message: &str,
    ) -> Result<i64> {
        let created = self
            .client
            .wall_post(community_owner_id(group_id), &attachment.to_string(), message)
            .await?;
        Ok(created.post_id)
    }
}
