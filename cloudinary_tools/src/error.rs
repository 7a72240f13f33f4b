use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudinaryApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach Cloudinary: {0}")]
    RequestError(String),
    #[error("Could not deserialize Cloudinary response: {0}")]
    JsonError(String),
    #[error("Cloudinary returned HTTP {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Could not derive a public id from the URL {0}")]
    InvalidAssetUrl(String),
    #[error("Cloudinary did not destroy the asset: {0}")]
    DestroyFailed(String),
}
