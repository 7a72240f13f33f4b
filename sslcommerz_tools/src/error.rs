use thiserror::Error;

#[derive(Debug, Error)]
pub enum SslCommerzApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach the payment gateway: {0}")]
    RequestError(String),
    #[error("Could not deserialize gateway response: {0}")]
    JsonError(String),
    #[error("Gateway returned HTTP {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("The gateway declined to open a session: {0}")]
    SessionRejected(String),
}
