use log::*;
use shop_common::Secret;

#[derive(Debug, Clone, Default)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: Secret<String>,
}

impl CloudinaryConfig {
    pub fn new_from_env_or_default() -> Self {
        let cloud_name = std::env::var("SFS_CLOUDINARY_CLOUD_NAME").unwrap_or_else(|_| {
            warn!("SFS_CLOUDINARY_CLOUD_NAME not set, using (probably useless) default");
            "demo".to_string()
        });
        let api_key = std::env::var("SFS_CLOUDINARY_API_KEY").unwrap_or_else(|_| {
            warn!("SFS_CLOUDINARY_API_KEY not set, using (probably useless) default");
            "000000000000000".to_string()
        });
        let api_secret = Secret::new(std::env::var("SFS_CLOUDINARY_API_SECRET").unwrap_or_else(|_| {
            warn!("SFS_CLOUDINARY_API_SECRET not set, using (probably useless) default");
            "00000000000000".to_string()
        }));
        Self { cloud_name, api_key, api_secret }
    }
}
