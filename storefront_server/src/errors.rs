use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use cloudinary_tools::CloudinaryApiError;
use commerce_engine::traits::{FeatureApiError, OrderApiError, OrderFlowError};
use log::error;
use sslcommerz_tools::SslCommerzApiError;
use thiserror::Error;

use crate::data_objects::JsonResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Payload deserialization error")]
    CouldNotDeserializePayload,
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("Could not read request path: {0}")]
    InvalidRequestPath(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("The payment gateway could not open a session. {0}")]
    PaymentGatewayUnavailable(String),
    #[error("The requested order transition is not allowed. {0}")]
    TransitionForbidden(String),
    #[error("The image host rejected the request. {0}")]
    ImageHostError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::CouldNotDeserializePayload => StatusCode::BAD_REQUEST,
            Self::InvalidRequestPath(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::PaymentGatewayUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::TransitionForbidden(_) => StatusCode::CONFLICT,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ImageHostError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 5xx details go to the log; clients get the storefront's stock error body.
        let body = if status.is_server_error() {
            error!("💻️ Internal error serving request: {self}");
            JsonResponse::failure("Some error occured!")
        } else {
            JsonResponse::failure(self)
        };
        HttpResponse::build(status).json(body)
    }
}

impl From<OrderFlowError> for ServerError {
    fn from(e: OrderFlowError) -> Self {
        match e {
            OrderFlowError::OrderNotFound(_) | OrderFlowError::UserNotFound(_) => Self::NoRecordFound(e.to_string()),
            OrderFlowError::ProductNotFound { .. } => Self::NoRecordFound(e.to_string()),
            OrderFlowError::OrderAlreadyExists(_) => Self::InvalidRequestBody(e.to_string()),
            OrderFlowError::OrderModificationForbidden | OrderFlowError::OrderModificationNoOp => {
                Self::TransitionForbidden(e.to_string())
            },
            OrderFlowError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<OrderApiError> for ServerError {
    fn from(e: OrderApiError) -> Self {
        match e {
            OrderApiError::NoOrdersFound(_) => Self::NoRecordFound("No orders found!".to_string()),
            OrderApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<FeatureApiError> for ServerError {
    fn from(e: FeatureApiError) -> Self {
        match e {
            FeatureApiError::ImageNotFound(_) => Self::NoRecordFound(e.to_string()),
            FeatureApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

impl From<SslCommerzApiError> for ServerError {
    fn from(e: SslCommerzApiError) -> Self {
        Self::PaymentGatewayUnavailable(e.to_string())
    }
}

impl From<CloudinaryApiError> for ServerError {
    fn from(e: CloudinaryApiError) -> Self {
        match e {
            CloudinaryApiError::InvalidAssetUrl(_) => Self::InvalidRequestBody(e.to_string()),
            e => Self::ImageHostError(e.to_string()),
        }
    }
}
