//! The data-access seam shared by the HTTP client and test doubles.

use async_trait::async_trait;
use lexdesk_core::{Article, Document, PracticeResult};

use crate::ClientError;

/// Read-only access to the article, document, and court-practice services.
#[async_trait]
pub trait LegalApi: Send + Sync {
    /// The unfiltered article catalog.
    async fn list_articles(&self) -> Result<Vec<Article>, ClientError>;

    /// Articles whose code, title, or description match `query`.
    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, ClientError>;

    /// Full detail for one article, `None` if the code is unknown.
    async fn article_by_code(&self, code: &str) -> Result<Option<Article>, ClientError>;

    /// The procedural document library.
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError>;

    /// Precedent cases for an article code.
    async fn court_practice(&self, article_code: &str) -> Result<PracticeResult, ClientError>;
}
