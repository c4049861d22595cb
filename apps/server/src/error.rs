use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use savings_goals_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for any failure that is not a validation or lookup error.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to process the request";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Body(#[from] JsonRejection),
}

/// `Json` extractor whose rejections render as [`ErrorBody`] with a 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(ValidationError::InvalidField { .. }) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
                }
                CoreError::Validation(v) => (StatusCode::BAD_REQUEST, v.to_string()),
                CoreError::Database(DatabaseError::NotFound(reason)) => {
                    (StatusCode::NOT_FOUND, reason.clone())
                }
                _ => (StatusCode::BAD_REQUEST, GENERIC_ERROR_MESSAGE.to_string()),
            },
            ApiError::Body(rejection) => (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if message == GENERIC_ERROR_MESSAGE {
            // Details stay in the logs, never in the response.
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
