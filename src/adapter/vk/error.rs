use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VkError {
    /// Application error embedded in a 200 response body
    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("malformed VK response: {0}")]
    MalformedResponse(String),
}
