use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub article_id: String,
    pub title: String,
    pub publisher: String,
    pub publication_date: DateTime<Utc>,
    pub url: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[schema(value_type = Object)]
    pub entities: serde_json::Value,
    pub sentiment_score: String,
    pub categories: Vec<String>,
    pub content_s3_path: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let data = article.data;
        Self {
            article_id: article.id.into_inner(),
            title: data.title.into_inner(),
            publisher: data.publisher.into_inner(),
            publication_date: data.publication_date,
            url: data.url.into_inner(),
            content: data.content.into_inner(),
            summary: data.summary,
            tags: data.tags,
            entities: data.entities.into_value(),
            sentiment_score: data.sentiment_score,
            categories: data.categories,
            content_s3_path: data.content_s3_path.into_inner(),
            status: data.status.as_str().to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Which branch of the upsert ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Created,
    Updated,
}

#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub action: UpsertAction,
    pub article: ArticleDto,
}

impl IngestOutcome {
    pub fn created(article: ArticleDto) -> Self {
        Self {
            action: UpsertAction::Created,
            article,
        }
    }

    pub fn updated(article: ArticleDto) -> Self {
        Self {
            action: UpsertAction::Updated,
            article,
        }
    }
}
