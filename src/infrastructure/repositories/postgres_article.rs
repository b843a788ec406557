// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleData, ArticleEntities, ArticleId, ArticleReadRepository,
    ArticleTitle, ArticleUpdate, ArticleUrl, ArticleWriteRepository, ContentS3Path, NewArticle,
    Publisher,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::database::is_plain_identifier;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use std::{future::Future, time::Duration};

const ARTICLE_COLUMNS: &str = "article_id, title, publisher, publication_date, url, content, summary, \
     tags, entities, sentiment_score, categories, content_s3_path, status, created_at, updated_at";

/// Store accessor for the article table. Serves both repository traits so
/// the lookup and the write of one upsert share a pool and a timeout.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    timeout: Duration,
    select_sql: String,
    exists_sql: String,
    insert_sql: String,
    update_sql: String,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, table: &str, timeout: Duration) -> DomainResult<Self> {
        if !is_plain_identifier(table) {
            return Err(DomainError::validation(format!(
                "invalid article table name: {table:?}"
            )));
        }

        let select_sql = format!("SELECT {ARTICLE_COLUMNS} FROM {table} WHERE article_id = $1");
        let exists_sql = format!("SELECT 1 FROM {table} WHERE article_id = $1");
        let insert_sql = format!(
            "INSERT INTO {table} (article_id, title, publisher, publication_date, url, content, summary, \
             tags, entities, sentiment_score, categories, content_s3_path, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let update_sql = format!(
            "UPDATE {table}
             SET title = $2, publisher = $3, publication_date = $4, url = $5, content = $6,
                 summary = $7, tags = $8, entities = $9, sentiment_score = $10, categories = $11,
                 content_s3_path = $12, status = $13, updated_at = GREATEST(NOW(), updated_at)
             WHERE article_id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );

        Ok(Self {
            pool,
            timeout,
            select_sql,
            exists_sql,
            insert_sql,
            update_sql,
        })
    }

    async fn bounded<T, F>(&self, query: F) -> DomainResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => result.map_err(map_sqlx),
            Err(_) => Err(DomainError::Timeout(self.timeout)),
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: String,
    title: String,
    publisher: String,
    publication_date: DateTime<Utc>,
    url: String,
    content: String,
    summary: String,
    tags: Vec<String>,
    entities: Json<serde_json::Value>,
    sentiment_score: String,
    categories: Vec<String>,
    content_s3_path: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            data: ArticleData {
                title: ArticleTitle::new(row.title)?,
                publisher: Publisher::new(row.publisher)?,
                publication_date: row.publication_date,
                url: ArticleUrl::new(row.url)?,
                content: ArticleContent::new(row.content)?,
                summary: row.summary,
                tags: row.tags,
                entities: ArticleEntities::from_value(row.entities.0)?,
                sentiment_score: row.sentiment_score,
                categories: row.categories,
                content_s3_path: ContentS3Path::new(row.content_s3_path)?,
                status: row.status.parse()?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Stored rows that no longer satisfy the domain rules are a store problem,
/// not a caller problem.
fn decode_row(row: ArticleRow) -> DomainResult<Article> {
    Article::try_from(row).map_err(|err| match err {
        DomainError::Validation(msg) => DomainError::Persistence(format!("corrupt article row: {msg}")),
        other => other,
    })
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle { id, data } = article;
        let ArticleData {
            title,
            publisher,
            publication_date,
            url,
            content,
            summary,
            tags,
            entities,
            sentiment_score,
            categories,
            content_s3_path,
            status,
        } = data;

        let row = self
            .bounded(
                sqlx::query_as::<_, ArticleRow>(&self.insert_sql)
                    .bind(id.as_str())
                    .bind(title.as_str())
                    .bind(publisher.as_str())
                    .bind(publication_date)
                    .bind(url.as_str())
                    .bind(content.as_str())
                    .bind(summary)
                    .bind(tags)
                    .bind(Json(entities.into_value()))
                    .bind(sentiment_score)
                    .bind(categories)
                    .bind(content_s3_path.as_str())
                    .bind(status.as_str())
                    .fetch_one(&self.pool),
            )
            .await?;

        decode_row(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate { id, data } = update;
        let ArticleData {
            title,
            publisher,
            publication_date,
            url,
            content,
            summary,
            tags,
            entities,
            sentiment_score,
            categories,
            content_s3_path,
            status,
        } = data;

        let maybe_row = self
            .bounded(
                sqlx::query_as::<_, ArticleRow>(&self.update_sql)
                    .bind(id.as_str())
                    .bind(title.as_str())
                    .bind(publisher.as_str())
                    .bind(publication_date)
                    .bind(url.as_str())
                    .bind(content.as_str())
                    .bind(summary)
                    .bind(tags)
                    .bind(Json(entities.into_value()))
                    .bind(sentiment_score)
                    .bind(categories)
                    .bind(content_s3_path.as_str())
                    .bind(status.as_str())
                    .fetch_optional(&self.pool),
            )
            .await?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        decode_row(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let maybe_row = self
            .bounded(
                sqlx::query_as::<_, ArticleRow>(&self.select_sql)
                    .bind(id.as_str())
                    .fetch_optional(&self.pool),
            )
            .await?;

        maybe_row.map(decode_row).transpose()
    }

    async fn exists(&self, id: &ArticleId) -> DomainResult<bool> {
        let found = self
            .bounded(
                sqlx::query(&self.exists_sql)
                    .bind(id.as_str())
                    .fetch_optional(&self.pool),
            )
            .await?;

        Ok(found.is_some())
    }
}
