// tests/support/builders.rs
use super::mocks::fixed_now;
use news_enrichment::application::commands::articles::IngestArticleCommand;
use news_enrichment::domain::article::{
    Article, ArticleContent, ArticleData, ArticleEntities, ArticleId, ArticleStatus, ArticleTitle,
    ArticleUrl, ContentS3Path, Publisher,
};
use serde_json::{Value, json};

/// JSON body as a client would send it.
pub fn sample_payload(article_id: &str) -> Value {
    json!({
        "articleId": article_id,
        "title": "Chipmaker posts record quarter",
        "publisher": "Daily Wire Service",
        "publicationDate": "2024-03-01T09:30:00Z",
        "url": "https://news.example.com/chipmaker-record-quarter",
        "content": "Acme Semiconductors reported record revenue on Thursday, led by data center demand.",
        "summary": "Acme posts a record quarter.",
        "tags": ["markets", "semiconductors"],
        "contentS3Path": "s3://articles/2024/03/chipmaker.txt"
    })
}

pub fn payload_without(article_id: &str, field: &str) -> Value {
    let mut payload = sample_payload(article_id);
    payload
        .as_object_mut()
        .expect("payload object")
        .remove(field);
    payload
}

pub fn sample_command(article_id: &str) -> IngestArticleCommand {
    IngestArticleCommand::builder()
        .article_id(article_id)
        .title("Chipmaker posts record quarter")
        .publisher("Daily Wire Service")
        .publication_date("2024-03-01T09:30:00Z")
        .url("https://news.example.com/chipmaker-record-quarter")
        .content("Acme Semiconductors reported record revenue on Thursday.")
        .summary("Acme posts a record quarter.")
        .tags(["markets", "semiconductors"])
        .content_s3_path("s3://articles/2024/03/chipmaker.txt")
        .build()
}

/// Stored row with placeholder enrichment.
pub struct ArticleBuilder {
    id: String,
    title: String,
    status: ArticleStatus,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "a1".into(),
            title: "Earlier headline".into(),
            status: ArticleStatus::Published,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.status = ArticleStatus::Unpublished;
        self
    }

    pub fn data(&self) -> ArticleData {
        ArticleData {
            title: ArticleTitle::new(self.title.clone()).expect("title"),
            publisher: Publisher::new("Daily Wire Service").expect("publisher"),
            publication_date: fixed_now(),
            url: ArticleUrl::new("https://news.example.com/earlier").expect("url"),
            content: ArticleContent::new("Earlier body.").expect("content"),
            summary: "Earlier summary.".into(),
            tags: vec!["archive".into()],
            entities: ArticleEntities::default(),
            sentiment_score: "0".into(),
            categories: vec![],
            content_s3_path: ContentS3Path::new("s3://articles/earlier.txt").expect("path"),
            status: self.status,
        }
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id.clone()).expect("id"),
            data: self.data(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
