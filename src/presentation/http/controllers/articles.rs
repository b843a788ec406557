// src/presentation/http/controllers/articles.rs
use crate::application::commands::articles::IngestArticleCommand;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::response::ArticleResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /extract-meata-data`. Fields are optional at this level so
/// that a missing one is reported as `bodyValidationFailed` naming the field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractMetadataRequest {
    pub article_id: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    /// RFC 3339 timestamp.
    pub publication_date: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub content_s3_path: Option<String>,
    /// `published` (default) or `unpublished`.
    pub status: Option<String>,
}

impl From<ExtractMetadataRequest> for IngestArticleCommand {
    fn from(payload: ExtractMetadataRequest) -> Self {
        Self {
            article_id: payload.article_id,
            title: payload.title,
            publisher: payload.publisher,
            publication_date: payload.publication_date,
            url: payload.url,
            content: payload.content,
            summary: payload.summary,
            tags: payload.tags,
            content_s3_path: payload.content_s3_path,
            status: payload.status,
        }
    }
}

#[utoipa::path(
    post,
    path = "/extract-meata-data",
    request_body = ExtractMetadataRequest,
    responses(
        (status = 200, description = "Article enriched and created or updated.", body = ArticleResponse),
        (status = 400, description = "Missing or malformed field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Enrichment provider or store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn extract_metadata(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<ExtractMetadataRequest>, JsonRejection>,
) -> HttpResult<ArticleResponse> {
    let Json(payload) = payload.map_err(HttpError::from_rejection)?;

    state
        .services
        .article_commands
        .ingest_article(payload.into())
        .await
        .into_http()
        .map(ArticleResponse::from_outcome)
}
