// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::articles::ArticleCommandService, ports::enrichment::ArticleEnricher},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        enricher: Arc<dyn ArticleEnricher>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&enricher),
        ));

        Self { article_commands }
    }
}
