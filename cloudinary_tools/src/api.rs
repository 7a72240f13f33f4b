use std::sync::Arc;

use chrono::Utc;
use log::*;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{config::CloudinaryConfig, helpers::public_id_from_url, CloudinaryApiError};

/// The asset-host operations the storefront needs. Behind a trait so the feature endpoints can be
/// tested without a Cloudinary account.
#[allow(async_fn_in_trait)]
pub trait HostedImages {
    /// Destroys the hosted asset behind the given delivery URL. Destroying an asset that is
    /// already gone is not an error.
    async fn destroy_image(&self, image_url: &str) -> Result<(), CloudinaryApiError>;
}

#[derive(Clone)]
pub struct CloudinaryApi {
    config: CloudinaryConfig,
    client: Arc<Client>,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryApi {
    pub fn new(config: CloudinaryConfig) -> Result<Self, CloudinaryApiError> {
        let client = Client::builder().build().map_err(|e| CloudinaryApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    fn destroy_url(&self) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/image/destroy", self.config.cloud_name)
    }

    /// Signs an API request the way Cloudinary expects: the parameters, sorted by key and
    /// ampersand-joined, with the API secret appended, hashed and hex-encoded.
    fn sign(&self, public_id: &str, timestamp: i64) -> String {
        let payload = format!("public_id={public_id}&timestamp={timestamp}{}", self.config.api_secret.reveal());
        let digest = Sha256::digest(payload.as_bytes());
        format!("{digest:x}")
    }
}

impl HostedImages for CloudinaryApi {
    async fn destroy_image(&self, image_url: &str) -> Result<(), CloudinaryApiError> {
        let public_id = public_id_from_url(image_url)
            .ok_or_else(|| CloudinaryApiError::InvalidAssetUrl(image_url.to_string()))?;
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(&public_id, timestamp);
        let timestamp = timestamp.to_string();
        let form = [
            ("public_id", public_id.as_str()),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ];
        debug!("🖼️ Destroying hosted asset {public_id}");
        let response = self
            .client
            .post(self.destroy_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| CloudinaryApiError::RequestError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| CloudinaryApiError::RequestError(e.to_string()))?;
            return Err(CloudinaryApiError::QueryError { status, message });
        }
        let result =
            response.json::<DestroyResponse>().await.map_err(|e| CloudinaryApiError::JsonError(e.to_string()))?;
        match result.result.as_str() {
            "ok" => {
                info!("🖼️ Hosted asset {public_id} destroyed");
                Ok(())
            },
            // The catalog record is being deleted either way; a missing asset is nothing to act on.
            "not found" => {
                warn!("🖼️ Hosted asset {public_id} was already gone");
                Ok(())
            },
            other => Err(CloudinaryApiError::DestroyFailed(other.to_string())),
        }
    }
}
