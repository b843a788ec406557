// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::enrichment::ArticleEnricher,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) enricher: Arc<dyn ArticleEnricher>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        enricher: Arc<dyn ArticleEnricher>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            enricher,
        }
    }
}
