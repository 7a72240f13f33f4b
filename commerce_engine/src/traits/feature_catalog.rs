use thiserror::Error;

use crate::db_types::FeatureImage;

#[derive(Debug, Clone, Error)]
pub enum FeatureApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Feature image {0} can not be found")]
    ImageNotFound(i64),
}

impl From<sqlx::Error> for FeatureApiError {
    fn from(e: sqlx::Error) -> Self {
        FeatureApiError::DatabaseError(e.to_string())
    }
}

/// Persistence contract for the storefront's promotional "feature" images. Straight passthrough
/// CRUD; the hosted asset itself is managed by the image-host client, not by this trait.
#[allow(async_fn_in_trait)]
pub trait FeatureCatalog: Clone {
    /// Persists a new feature-image record and returns it.
    async fn insert_feature_image(&self, image_url: &str) -> Result<FeatureImage, FeatureApiError>;

    /// Returns all feature-image records, oldest first.
    async fn fetch_feature_images(&self) -> Result<Vec<FeatureImage>, FeatureApiError>;

    /// Deletes the record with the given id. Returns [`FeatureApiError::ImageNotFound`] if it does
    /// not exist.
    async fn delete_feature_image(&self, id: i64) -> Result<(), FeatureApiError>;
}
