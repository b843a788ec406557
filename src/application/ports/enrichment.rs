// src/application/ports/enrichment.rs
use crate::{application::ApplicationResult, domain::article::ArticleEntities};
use async_trait::async_trait;

/// What the language model derived from an article body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetadata {
    pub sentiment_score: String,
    pub categories: Vec<String>,
    pub entities: ArticleEntities,
}

/// External enrichment provider. Each call is a single attempt; failures are
/// reported as `ApplicationError::Enrichment`.
#[async_trait]
pub trait ArticleEnricher: Send + Sync {
    async fn extract_metadata(&self, content: &str) -> ApplicationResult<ArticleMetadata>;
    async fn summarize(&self, content: &str) -> ApplicationResult<String>;
}
