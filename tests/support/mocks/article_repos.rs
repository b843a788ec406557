// tests/support/mocks/article_repos.rs
use super::time::TickingClock;
use async_trait::async_trait;
use news_enrichment::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use news_enrichment::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// メモリ上の記事リポジトリ。呼び出し回数を記録する。
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<HashMap<String, Article>>,
    clock: TickingClock,
    finds: AtomicUsize,
    lookups: AtomicUsize,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    /// When set, reads report nothing even if a row exists.
    hide_existing: bool,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates losing an insert race: lookups miss, the insert then
    /// collides with the stored row.
    pub fn racing() -> Self {
        Self {
            hide_existing: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, article: Article) {
        self.rows
            .lock()
            .expect("rows lock")
            .insert(article.id.as_str().to_string(), article);
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.rows.lock().expect("rows lock").get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    pub fn find_calls(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn exists_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.find_calls() + self.exists_calls() + self.insert_calls() + self.update_calls()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().expect("rows lock");
        let key = article.id.as_str().to_string();
        if rows.contains_key(&key) {
            return Err(DomainError::Conflict("article already exists".into()));
        }
        let now = self.clock.now();
        let stored = Article {
            id: article.id,
            data: article.data,
            created_at: now,
            updated_at: now,
        };
        rows.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().expect("rows lock");
        let existing = rows
            .get_mut(update.id.as_str())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        existing.data = update.data;
        existing.updated_at = self.clock.now().max(existing.updated_at);
        Ok(existing.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        if self.hide_existing {
            return Ok(None);
        }
        Ok(self.get(id.as_str()))
    }

    async fn exists(&self, id: &ArticleId) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.hide_existing {
            return Ok(false);
        }
        Ok(self.rows.lock().expect("rows lock").contains_key(id.as_str()))
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作が永続化エラーになるリポジトリ
#[derive(Default)]
pub struct FailingArticleRepo {
    calls: AtomicUsize,
}

impl FailingArticleRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        self.fail()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        self.fail()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        self.fail()
    }

    async fn exists(&self, _id: &ArticleId) -> DomainResult<bool> {
        self.fail()
    }
}
