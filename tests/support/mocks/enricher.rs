// tests/support/mocks/enricher.rs
use async_trait::async_trait;
use news_enrichment::application::ApplicationResult;
use news_enrichment::application::error::ApplicationError;
use news_enrichment::application::ports::enrichment::{ArticleEnricher, ArticleMetadata};
use news_enrichment::domain::article::ArticleEntities;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const STUB_SUMMARY: &str = "A short generated summary.";

/// 固定の応答を返すエンリッチャー。失敗モードを切り替えられる。
#[derive(Default)]
pub struct StubEnricher {
    fail_metadata: bool,
    fail_summary: bool,
    metadata_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl StubEnricher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_metadata() -> Self {
        Self {
            fail_metadata: true,
            ..Self::default()
        }
    }

    pub fn failing_summary() -> Self {
        Self {
            fail_summary: true,
            ..Self::default()
        }
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.metadata_calls() + self.summary_calls()
    }

    pub fn metadata() -> ArticleMetadata {
        let entities = ArticleEntities::from_value(json!({
            "organizations": ["Acme"],
            "people": ["Jane Doe"]
        }))
        .expect("entities object");
        ArticleMetadata {
            sentiment_score: "0.4".into(),
            categories: vec!["technology".into()],
            entities,
        }
    }
}

#[async_trait]
impl ArticleEnricher for StubEnricher {
    async fn extract_metadata(&self, _content: &str) -> ApplicationResult<ArticleMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_metadata {
            return Err(ApplicationError::enrichment("provider returned 503"));
        }
        Ok(Self::metadata())
    }

    async fn summarize(&self, _content: &str) -> ApplicationResult<String> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_summary {
            return Err(ApplicationError::enrichment("completion request timed out"));
        }
        Ok(STUB_SUMMARY.into())
    }
}
