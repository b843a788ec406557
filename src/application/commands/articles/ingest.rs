// src/application/commands/articles/ingest.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::IngestOutcome,
        error::{ApplicationError, ApplicationResult},
        ports::enrichment::ArticleMetadata,
    },
    domain::article::{
        ArticleContent, ArticleData, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate,
        ArticleUrl, ContentS3Path, NewArticle, Publisher,
    },
};
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Raw article payload as submitted for enrichment. Every field is optional
/// here so that missing input is reported by [`IngestArticleCommand::validate`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Default)]
pub struct IngestArticleCommand {
    pub article_id: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub publication_date: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub content_s3_path: Option<String>,
    pub status: Option<String>,
}

/// Input that passed validation; enrichment only ever sees one of these.
#[derive(Debug, Clone)]
pub struct ValidatedArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub publisher: Publisher,
    pub publication_date: DateTime<Utc>,
    pub url: ArticleUrl,
    pub content: ArticleContent,
    pub submitted_summary: String,
    pub tags: Vec<String>,
    pub content_s3_path: ContentS3Path,
    pub requested_status: Option<ArticleStatus>,
}

fn required(value: Option<String>, field: &'static str) -> ApplicationResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApplicationError::validation(format!("{field} is required"))),
    }
}

fn parse_publication_date(raw: &str) -> ApplicationResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|err| {
            ApplicationError::validation(format!(
                "publicationDate must be an RFC 3339 timestamp: {err}"
            ))
        })
}

impl IngestArticleCommand {
    pub fn builder() -> IngestArticleCommandBuilder {
        IngestArticleCommandBuilder::default()
    }

    /// Checks presence of every required field (in payload order) and
    /// normalizes the publication date.
    pub fn validate(self) -> ApplicationResult<ValidatedArticle> {
        let article_id = required(self.article_id, "articleId")?;
        let title = required(self.title, "title")?;
        let publisher = required(self.publisher, "publisher")?;
        let publication_date = required(self.publication_date, "publicationDate")?;
        let url = required(self.url, "url")?;
        let content = required(self.content, "content")?;
        let summary = required(self.summary, "summary")?;
        let tags = self
            .tags
            .ok_or_else(|| ApplicationError::validation("tags is required"))?;
        let content_s3_path = required(self.content_s3_path, "contentS3Path")?;

        let publication_date = parse_publication_date(&publication_date)?;
        let requested_status = self
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?;

        Ok(ValidatedArticle {
            id: ArticleId::new(article_id)?,
            title: ArticleTitle::new(title)?,
            publisher: Publisher::new(publisher)?,
            publication_date,
            url: ArticleUrl::new(url)?,
            content: ArticleContent::new(content)?,
            submitted_summary: summary,
            tags,
            content_s3_path: ContentS3Path::new(content_s3_path)?,
            requested_status,
        })
    }
}

impl ValidatedArticle {
    /// Merges request fields with enrichment output. The generated summary
    /// replaces the submitted one.
    pub fn into_data(self, metadata: ArticleMetadata, summary: String) -> ArticleData {
        ArticleData {
            title: self.title,
            publisher: self.publisher,
            publication_date: self.publication_date,
            url: self.url,
            content: self.content,
            summary,
            tags: self.tags,
            entities: metadata.entities,
            sentiment_score: metadata.sentiment_score,
            categories: metadata.categories,
            content_s3_path: self.content_s3_path,
            status: ArticleStatus::after_enrichment(self.requested_status),
        }
    }
}

#[derive(Default)]
pub struct IngestArticleCommandBuilder {
    inner: IngestArticleCommand,
}

impl IngestArticleCommandBuilder {
    pub fn article_id(mut self, value: impl Into<String>) -> Self {
        self.inner.article_id = Some(value.into());
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.inner.title = Some(value.into());
        self
    }

    pub fn publisher(mut self, value: impl Into<String>) -> Self {
        self.inner.publisher = Some(value.into());
        self
    }

    pub fn publication_date(mut self, value: impl Into<String>) -> Self {
        self.inner.publication_date = Some(value.into());
        self
    }

    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.inner.url = Some(value.into());
        self
    }

    pub fn content(mut self, value: impl Into<String>) -> Self {
        self.inner.content = Some(value.into());
        self
    }

    pub fn summary(mut self, value: impl Into<String>) -> Self {
        self.inner.summary = Some(value.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn content_s3_path(mut self, value: impl Into<String>) -> Self {
        self.inner.content_s3_path = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.inner.status = Some(value.into());
        self
    }

    pub fn build(self) -> IngestArticleCommand {
        self.inner
    }
}

impl ArticleCommandService {
    /// Validate, enrich, then create-or-update keyed by `articleId`.
    ///
    /// Nothing is written unless both enrichment calls succeed. The store's
    /// primary key is the only guard against two concurrent inserts for the
    /// same id; the loser of such a race gets a persistence error.
    pub async fn ingest_article(
        &self,
        command: IngestArticleCommand,
    ) -> ApplicationResult<IngestOutcome> {
        let article = command.validate()?;
        let id = article.id.clone();

        let started = Instant::now();
        let (metadata, summary) = tokio::try_join!(
            self.enricher.extract_metadata(article.content.as_str()),
            self.enricher.summarize(article.content.as_str()),
        )
        .inspect_err(|err| {
            tracing::warn!(article_id = %id, error = %err, "article enrichment failed");
        })?;
        tracing::debug!(
            article_id = %id,
            elapsed = ?started.elapsed(),
            categories = metadata.categories.len(),
            "article enriched"
        );

        let data = article.into_data(metadata, summary);

        let exists = self
            .read_repo
            .exists(&id)
            .await
            .map_err(ApplicationError::from_store)?;

        let outcome = if exists {
            let updated = self
                .write_repo
                .update(ArticleUpdate::new(id.clone(), data))
                .await
                .map_err(ApplicationError::from_store)?;
            IngestOutcome::updated(updated.into())
        } else {
            let created = self
                .write_repo
                .insert(NewArticle::new(id.clone(), data))
                .await
                .map_err(ApplicationError::from_store)?;
            IngestOutcome::created(created.into())
        };

        tracing::info!(article_id = %id, action = ?outcome.action, "article stored");
        Ok(outcome)
    }
}
