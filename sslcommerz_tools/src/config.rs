use log::*;
use shop_common::{parse_boolean_flag, Secret};

const SANDBOX_URL: &str = "https://sandbox.sslcommerz.com";
const LIVE_URL: &str = "https://securepay.sslcommerz.com";

#[derive(Debug, Clone, Default)]
pub struct SslCommerzConfig {
    pub store_id: String,
    pub store_password: Secret<String>,
    /// When set, sessions are opened against the sandbox gateway rather than the live one.
    pub sandbox: bool,
    /// Request timeout for gateway calls, in seconds.
    pub timeout: u64,
}

impl SslCommerzConfig {
    pub fn new_from_env_or_default() -> Self {
        let store_id = std::env::var("SFS_SSLCZ_STORE_ID").unwrap_or_else(|_| {
            warn!("SFS_SSLCZ_STORE_ID not set, using (probably useless) default");
            "teststore".to_string()
        });
        let store_password = Secret::new(std::env::var("SFS_SSLCZ_STORE_PASSWORD").unwrap_or_else(|_| {
            warn!("SFS_SSLCZ_STORE_PASSWORD not set, using (probably useless) default");
            "teststore@ssl".to_string()
        }));
        let sandbox = parse_boolean_flag(std::env::var("SFS_SSLCZ_SANDBOX").ok(), true);
        let timeout = std::env::var("SFS_SSLCZ_TIMEOUT").ok().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
            info!("SFS_SSLCZ_TIMEOUT not set, using 30s as default");
            30
        });
        Self { store_id, store_password, sandbox, timeout }
    }

    /// The base URL of the gateway, chosen by the sandbox flag.
    pub fn base_url(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_URL
        } else {
            LIVE_URL
        }
    }

    pub fn session_url(&self) -> String {
        format!("{}/gwprocess/v4/api.php", self.base_url())
    }
}
