use log::*;

use crate::{
    db_types::FeatureImage,
    traits::{FeatureApiError, FeatureCatalog},
};

/// `FeaturesApi` manages the storefront's promotional feature-image records. Plain persistence
/// passthrough; the hosted asset lives with the image host and is handled by its client.
pub struct FeaturesApi<B> {
    db: B,
}

impl<B> FeaturesApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> FeaturesApi<B>
where B: FeatureCatalog
{
    pub async fn add_image(&self, image_url: &str) -> Result<FeatureImage, FeatureApiError> {
        let image = self.db.insert_feature_image(image_url).await?;
        debug!("🖼️ Feature image #{} added", image.id);
        Ok(image)
    }

    pub async fn list_images(&self) -> Result<Vec<FeatureImage>, FeatureApiError> {
        self.db.fetch_feature_images().await
    }

    pub async fn remove_image(&self, id: i64) -> Result<(), FeatureApiError> {
        self.db.delete_feature_image(id).await?;
        debug!("🖼️ Feature image #{id} removed");
        Ok(())
    }
}
