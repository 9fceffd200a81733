//! VK HTTP Client
//!
//! Calls the platform's REST methods. Each call fails on a non-2xx status
//! and on an error payload embedded in a 200 body.

use anyhow::{Context, Result};
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::VkError;
use super::models::{
    ApiReply, MethodResponse, SavedPhoto, UploadServer, UploadedPhoto, WallPostCreated,
};
use crate::adapter::config::Config;
use crate::adapter::http::endpoint;

const MAX_BODY_IN_ERROR: usize = 200;

pub struct VkClient {
    http: reqwest::Client,
    base_url: Url,
    access_token: String,
    api_version: String,
}

impl VkClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.vk_api_base_url.clone(),
            access_token: config.access_token.clone(),
            api_version: config.api_version.clone(),
        }
    }

    /// photos.getWallUploadServer
    pub async fn get_wall_upload_server(&self, group_id: u64) -> Result<UploadServer> {
        let request = self
            .method(Method::GET, "photos.getWallUploadServer")?
            .query(&[("group_id", group_id.to_string())]);

        let reply: MethodResponse<UploadServer> = self.call(request).await?;
        Ok(reply.response)
    }

    /// POST the image as multipart field `photo` to a negotiated upload URL
    pub async fn upload_photo(
        &self,
        upload_url: &Url,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedPhoto> {
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("photo", part);
        let request = self.http.post(upload_url.clone()).multipart(form);

        self.call(request).await
    }

    /// photos.saveWallPhoto
    pub async fn save_wall_photo(
        &self,
        group_id: u64,
        photo: &str,
        server: i64,
        hash: &str,
    ) -> Result<Vec<SavedPhoto>> {
        let request = self.method(Method::POST, "photos.saveWallPhoto")?.query(&[
            ("group_id", group_id.to_string()),
            ("photo", photo.to_string()),
            ("server", server.to_string()),
            ("hash", hash.to_string()),
        ]);

        let reply: MethodResponse<Vec<SavedPhoto>> = self.call(request).await?;
        Ok(reply.response)
    }

    /// wall.post on behalf of the community
    pub async fn wall_post(
        &self,
        owner_id: i64,
        attachments: &str,
        message: &str,
    ) -> Result<WallPostCreated> {
        let request = self.method(Method::POST, "wall.post")?.query(&[
            ("attachments", attachments.to_string()),
            ("owner_id", owner_id.to_string()),
            ("message", message.to_string()),
            ("from_group", "1".to_string()),
        ]);

        let reply: MethodResponse<WallPostCreated> = self.call(request).await?;
        Ok(reply.response)
    }

    fn method(&self, method: Method, name: &str) -> Result<RequestBuilder> {
        let url = endpoint(&self.base_url, name)?;
        debug!("{} {}", method, url);

        Ok(self.http.request(method, url).query(&[
            ("access_token", self.access_token.as_str()),
            ("v", self.api_version.as_str()),
        ]))
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .context("Request to VK failed")?
            .error_for_status()?;

        let body = response
            .text()
            .await
            .context("Failed to read VK response body")?;

        let reply: ApiReply<T> = serde_json::from_str(&body).map_err(|e| {
            VkError::MalformedResponse(format!("{} in {}", e, truncate(&body, MAX_BODY_IN_ERROR)))
        })?;

        Ok(reply.into_result()?)
    }
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
