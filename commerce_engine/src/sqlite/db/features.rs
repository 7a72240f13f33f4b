use log::debug;
use sqlx::SqliteConnection;

use crate::{db_types::FeatureImage, traits::FeatureApiError};

pub async fn insert_feature_image(
    image_url: &str,
    conn: &mut SqliteConnection,
) -> Result<FeatureImage, sqlx::Error> {
    let image: FeatureImage = sqlx::query_as("INSERT INTO feature_images (image_url) VALUES ($1) RETURNING *")
        .bind(image_url)
        .fetch_one(conn)
        .await?;
    debug!("🖼️ Feature image {} stored", image.id);
    Ok(image)
}

pub async fn fetch_feature_images(conn: &mut SqliteConnection) -> Result<Vec<FeatureImage>, sqlx::Error> {
    let images = sqlx::query_as("SELECT * FROM feature_images ORDER BY id ASC").fetch_all(conn).await?;
    Ok(images)
}

pub async fn delete_feature_image(id: i64, conn: &mut SqliteConnection) -> Result<(), FeatureApiError> {
    let result = sqlx::query("DELETE FROM feature_images WHERE id = $1").bind(id).execute(conn).await?;
    if result.rows_affected() == 0 {
        return Err(FeatureApiError::ImageNotFound(id));
    }
    Ok(())
}
