use std::{sync::Arc, time::Duration};

use log::*;
use reqwest::Client;

use crate::{config::SslCommerzConfig, PaymentSessionRequest, SessionResponse, SslCommerzApiError};

/// The one gateway operation the storefront needs. Behind a trait so the server endpoints can be
/// tested without talking to SSLCommerz.
#[allow(async_fn_in_trait)]
pub trait PaymentSessions {
    /// Opens a hosted-checkout session and returns the URL the shopper must be redirected to.
    async fn create_session(&self, request: PaymentSessionRequest) -> Result<String, SslCommerzApiError>;
}

#[derive(Clone)]
pub struct SslCommerzApi {
    config: SslCommerzConfig,
    client: Arc<Client>,
}

impl SslCommerzApi {
    pub fn new(config: SslCommerzConfig) -> Result<Self, SslCommerzApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| SslCommerzApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }
}

impl PaymentSessions for SslCommerzApi {
    async fn create_session(&self, request: PaymentSessionRequest) -> Result<String, SslCommerzApiError> {
        let url = self.config.session_url();
        debug!("💳️ Opening payment session {} for {}", request.tran_id, request.total_amount);
        // Store credentials are merged into the form at send time rather than being carried around
        // in the request object.
        let mut form = match serde_json::to_value(&request) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return Err(SslCommerzApiError::RequestError("Could not encode session request".to_string())),
        };
        form.insert("store_id".to_string(), self.config.store_id.clone().into());
        form.insert("store_passwd".to_string(), self.config.store_password.reveal().clone().into());
        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| SslCommerzApiError::RequestError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| SslCommerzApiError::RequestError(e.to_string()))?;
            return Err(SslCommerzApiError::QueryError { status, message });
        }
        let session =
            response.json::<SessionResponse>().await.map_err(|e| SslCommerzApiError::JsonError(e.to_string()))?;
        if !session.is_success() {
            warn!("💳️ Gateway rejected session {}: {}", request.tran_id, session.failedreason);
            return Err(SslCommerzApiError::SessionRejected(session.failedreason));
        }
        info!("💳️ Payment session {} opened (sessionkey {})", request.tran_id, session.sessionkey);
        Ok(session.gateway_page_url)
    }
}
