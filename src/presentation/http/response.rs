// src/presentation/http/response.rs
use crate::application::dto::{ArticleDto, IngestOutcome, UpsertAction};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ARTICLE_CREATED: &str = "Article created successfully";
pub const ARTICLE_UPDATED: &str = "Article updated successfully";

/// Success envelope `{statusCode, message, data}`. The HTTP status and the
/// `statusCode` field always agree.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub status_code: String,
    pub message: String,
    pub data: ArticleDto,
}

impl ArticleResponse {
    pub fn from_outcome(outcome: IngestOutcome) -> Self {
        let message = match outcome.action {
            UpsertAction::Created => ARTICLE_CREATED,
            UpsertAction::Updated => ARTICLE_UPDATED,
        };
        Self {
            status_code: StatusCode::OK.as_u16().to_string(),
            message: message.to_string(),
            data: outcome.article,
        }
    }
}

impl IntoResponse for ArticleResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
