use std::env;

use cloudinary_tools::CloudinaryConfig;
use log::*;
use sslcommerz_tools::SslCommerzConfig;

const DEFAULT_SFS_HOST: &str = "127.0.0.1";
const DEFAULT_SFS_PORT: u16 = 8360;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// URLs the shopper gets redirected to after the gateway reports an outcome.
    pub urls: UrlConfig,
    /// SSLCommerz gateway configuration
    pub sslcommerz_config: SslCommerzConfig,
    /// Cloudinary image host configuration
    pub cloudinary_config: CloudinaryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SFS_HOST.to_string(),
            port: DEFAULT_SFS_PORT,
            database_url: String::default(),
            urls: UrlConfig::default(),
            sslcommerz_config: SslCommerzConfig::default(),
            cloudinary_config: CloudinaryConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SFS_HOST").ok().unwrap_or_else(|| DEFAULT_SFS_HOST.into());
        let port = env::var("SFS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SFS_PORT. {e} Using the default, {DEFAULT_SFS_PORT}, instead."
                    );
                    DEFAULT_SFS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SFS_PORT);
        let database_url = env::var("SFS_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ SFS_DATABASE_URL is not set. Please set it to the URL for the storefront database.");
            String::default()
        });
        let urls = UrlConfig::from_env_or_default(&host, port);
        let sslcommerz_config = SslCommerzConfig::new_from_env_or_default();
        let cloudinary_config = CloudinaryConfig::new_from_env_or_default();
        Self { host, port, database_url, urls, sslcommerz_config, cloudinary_config }
    }
}

/// The frontend base URL builds the shopper-facing redirect targets; the backend base URL builds
/// the callback URLs handed to the gateway when a session is opened.
#[derive(Clone, Debug, Default)]
pub struct UrlConfig {
    pub frontend_url: String,
    pub backend_url: String,
}

impl UrlConfig {
    pub fn from_env_or_default(host: &str, port: u16) -> Self {
        let frontend_url = env::var("SFS_FRONTEND_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ SFS_FRONTEND_URL is not set, using {DEFAULT_FRONTEND_URL} as default");
            DEFAULT_FRONTEND_URL.to_string()
        });
        let backend_url = env::var("SFS_BACKEND_URL").ok().unwrap_or_else(|| {
            let url = format!("http://{host}:{port}");
            warn!("🪛️ SFS_BACKEND_URL is not set, using {url} as default. The gateway must be able to reach this URL.");
            url
        });
        Self { frontend_url, backend_url }
    }
}
