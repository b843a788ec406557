// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleEntities, ArticleId, ArticleStatus, ArticleTitle, ArticleUrl,
    ContentS3Path, Publisher,
};
use chrono::{DateTime, Utc};

/// Every stored column except identity and the store-managed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleData {
    pub title: ArticleTitle,
    pub publisher: Publisher,
    pub publication_date: DateTime<Utc>,
    pub url: ArticleUrl,
    pub content: ArticleContent,
    pub summary: String,
    pub tags: Vec<String>,
    pub entities: ArticleEntities,
    pub sentiment_score: String,
    pub categories: Vec<String>,
    pub content_s3_path: ContentS3Path,
    pub status: ArticleStatus,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub data: ArticleData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub data: ArticleData,
}

/// Full replacement of an existing row. `created_at` is never touched and
/// the store stamps `updated_at` itself.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub data: ArticleData,
}

impl NewArticle {
    pub fn new(id: ArticleId, data: ArticleData) -> Self {
        Self { id, data }
    }
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, data: ArticleData) -> Self {
        Self { id, data }
    }
}
