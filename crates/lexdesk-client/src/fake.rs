//! In-memory [`LegalApi`] for view tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lexdesk_core::{Article, CourtCase, Document, PracticeResult};

use crate::{ClientError, LegalApi};

#[derive(Default)]
pub struct FakeApi {
    pub articles: Vec<Article>,
    pub documents: Vec<Document>,
    pub cases: Vec<CourtCase>,
    /// Artificial latency per search query, article code, or practice code.
    pub delays: HashMap<String, Duration>,
    pub failing: AtomicBool,
    /// Overrides returned by `article_by_code`, applied in call order.
    pub detail_overrides: Mutex<Vec<Article>>,
    pub calls: AtomicUsize,
}

pub fn article(id: i64, code: &str, title: &str) -> Article {
    Article {
        id,
        code: code.into(),
        title: title.into(),
        description: format!("{title}: описание"),
        category: "Преступления против собственности".into(),
        punishment: "Лишение свободы на срок до 2 лет".into(),
    }
}

pub fn document(id: &str, title: &str, category: &str) -> Document {
    Document {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        code: "УПК РФ ст. 146".into(),
        description: String::new(),
    }
}

pub fn court_case(id: i64, article_code: &str) -> CourtCase {
    CourtCase {
        id,
        article_code: article_code.into(),
        case_number: format!("1-{id}/2024"),
        court_name: "Мещанский районный суд г. Москвы".into(),
        decision_date: Some("2024-05-14".into()),
        decision_type: "Приговор".into(),
        summary: "Хищение имущества".into(),
        verdict: None,
        url: None,
    }
}

/// Catalog of `n` sequential articles: codes `"100 УК РФ"`, `"101 УК РФ"`, ...
pub fn catalog(n: i64) -> Vec<Article> {
    (0..n)
        .map(|i| article(i + 1, &format!("{} УК РФ", 100 + i), &format!("Статья {}", 100 + i)))
        .collect()
}

impl FakeApi {
    pub fn failing() -> Self {
        Self {
            failing: AtomicBool::new(true),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, key: &str) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Server {
                status: 503,
                body: "service unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LegalApi for FakeApi {
    async fn list_articles(&self) -> Result<Vec<Article>, ClientError> {
        self.enter("").await?;
        Ok(self.articles.clone())
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, ClientError> {
        self.enter(query).await?;
        let q = query.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| a.code.to_lowercase().contains(&q) || a.title.to_lowercase().contains(&q))
            .cloned()
            .collect())
    }

    async fn article_by_code(&self, code: &str) -> Result<Option<Article>, ClientError> {
        self.enter(code).await?;
        let mut overrides = self.detail_overrides.lock().unwrap();
        if !overrides.is_empty() {
            return Ok(Some(overrides.remove(0)));
        }
        Ok(self.articles.iter().find(|a| a.code == code).cloned())
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.enter("").await?;
        Ok(self.documents.clone())
    }

    async fn court_practice(&self, article_code: &str) -> Result<PracticeResult, ClientError> {
        self.enter(article_code).await?;
        let cases: Vec<CourtCase> = self
            .cases
            .iter()
            .filter(|c| c.article_code.contains(article_code))
            .cloned()
            .collect();
        Ok(PracticeResult {
            total: cases.len() as u64,
            cases,
            article_code: Some(article_code.to_string()),
        })
    }
}
