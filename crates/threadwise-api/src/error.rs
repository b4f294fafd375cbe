use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use threadwise_llm::ModelError;
use threadwise_types::ValidationError;
use utoipa::ToSchema;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Model(e) => {
                tracing::error!(kind = e.kind(), "Model error: {}", e);
            }
            ApiError::InvalidBody { .. } | ApiError::Validation(_) => {
                tracing::debug!(status = %status, "Rejected request: {}", self);
            }
        }

        let body = Json(ErrorBody {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
