use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BODY_VALIDATION_FAILED: &str = "bodyValidationFailed";
pub const OPENAI_ERROR: &str = "openAIError";
pub const INTERNAL_SERVER_ERROR: &str = "internalServerError";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error_code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_validation() {
            return Self::new(StatusCode::BAD_REQUEST, BODY_VALIDATION_FAILED, err.to_string());
        }

        match err {
            ApplicationError::Enrichment(msg) => {
                tracing::warn!(error = %msg, "enrichment provider failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, OPENAI_ERROR, msg)
            }
            other => {
                tracing::error!(error = %other, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR,
                    other.to_string(),
                )
            }
        }
    }

    /// Unreadable or mistyped JSON bodies are validation failures too.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            BODY_VALIDATION_FAILED,
            rejection.body_text(),
        )
    }

    fn new(status: StatusCode, error_code: &'static str, message: String) -> Self {
        Self {
            status,
            error_code,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error_code(&self) -> &'static str {
        self.error_code
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            status_code: self.status.as_u16().to_string(),
            error_code: self.error_code.to_string(),
            message: self.message,
            details: None,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: String,
    pub error_code: String,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
