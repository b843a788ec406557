use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

const MAX_IDENTIFIER_LEN: usize = 63;

pub async fn init_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    // Fail at startup rather than on the first request.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

/// `[A-Za-z_][A-Za-z0-9_]*`, within the PostgreSQL identifier limit.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    valid_start
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.len() <= MAX_IDENTIFIER_LEN
}

pub fn create_articles_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            article_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            publisher TEXT NOT NULL,
            publication_date TIMESTAMPTZ NOT NULL,
            url TEXT NOT NULL,
            content TEXT NOT NULL,
            summary TEXT NOT NULL,
            tags TEXT[] NOT NULL DEFAULT '{{}}',
            entities JSONB NOT NULL DEFAULT '{{}}'::jsonb,
            sentiment_score TEXT NOT NULL,
            categories TEXT[] NOT NULL DEFAULT '{{}}',
            content_s3_path TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )"
    )
}

/// Creates the article table when missing. An existing table is success.
pub async fn ensure_articles_table(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    if !is_plain_identifier(table) {
        return Err(sqlx::Error::Configuration(
            format!("invalid table name: {table:?}").into(),
        ));
    }

    sqlx::query(&create_articles_table_sql(table))
        .execute(pool)
        .await?;
    tracing::info!(table, "article table ready");
    Ok(())
}
