//! VK wire models
//!
//! Every reply goes through [`ApiReply`], which separates an embedded
//! `{"error": {...}}` payload from a successful one.

use serde::Deserialize;
use url::Url;

use super::error::VkError;

/// Either an application error or the expected payload.
///
/// The platform reports most failures with HTTP 200, so this is checked
/// after every call.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure { error: ApiErrorBody },
    Success(T),
}

impl<T> ApiReply<T> {
    pub fn into_result(self) -> Result<T, VkError> {
        match self {
            ApiReply::Success(payload) => Ok(payload),
            ApiReply::Failure { error } => Err(VkError::Api {
                code: error.error_code,
                message: error.error_msg,
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error_code: i64,
    pub error_msg: String,
}

/// `{"response": ...}` wrapper used by `api.vk.com/method/*`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MethodResponse<T> {
    pub response: T,
}

/// photos.getWallUploadServer
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadServer {
    pub upload_url: Url,
}

/// Reply of the negotiated upload endpoint (not wrapped in `response`)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadedPhoto {
    pub server: i64,
    pub hash: String,
    pub photo: String,
}

impl UploadedPhoto {
    /// The endpoint answers `"photo": "[]"` when it accepted the request
    /// but stored nothing.
    pub fn is_empty(&self) -> bool {
        let photo = self.photo.trim();
        photo.is_empty() || photo == "[]"
    }
}

/// photos.saveWallPhoto item
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SavedPhoto {
    pub owner_id: i64,
    pub id: i64,
}

/// wall.post
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WallPostCreated {
    pub post_id: i64,
}
