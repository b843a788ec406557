// src/application/commands/articles/mod.rs
mod ingest;
mod service;

pub use ingest::{IngestArticleCommand, IngestArticleCommandBuilder, ValidatedArticle};
pub use service::ArticleCommandService;
