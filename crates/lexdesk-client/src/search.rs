//! Article search and selection for the search tab.
//!
//! The displayed list is either the latest search results or, when there are
//! none, the head of the catalog fetched at mount. It is never a merge of both.
//!
//! Searches and selections may overlap. Each dispatch takes a ticket from its
//! own monotonically increasing sequence; a response is applied only while its
//! ticket is still the newest one dispatched, so a slow stale response can no
//! longer overwrite a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lexdesk_core::Article;
use lexdesk_core::config::DEFAULT_SLICE;
use tracing::{debug, warn};

use crate::LegalApi;

#[derive(Default)]
struct SearchState {
    catalog: Vec<Article>,
    query: String,
    results: Vec<Article>,
    selected: Option<Article>,
    loading: bool,
}

pub struct ArticleSearch {
    api: Arc<dyn LegalApi>,
    default_slice: usize,
    search_seq: AtomicU64,
    select_seq: AtomicU64,
    state: Mutex<SearchState>,
}

impl ArticleSearch {
    pub fn new(api: Arc<dyn LegalApi>) -> Self {
        Self::with_default_slice(api, DEFAULT_SLICE)
    }

    pub fn with_default_slice(api: Arc<dyn LegalApi>, default_slice: usize) -> Self {
        Self {
            api,
            default_slice,
            search_seq: AtomicU64::new(0),
            select_seq: AtomicU64::new(0),
            state: Mutex::new(SearchState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the unfiltered catalog. On failure the catalog stays empty.
    pub async fn load_catalog(&self) {
        match self.api.list_articles().await {
            Ok(articles) => self.state().catalog = articles,
            Err(e) => warn!(error = %e, "failed to load article catalog"),
        }
    }

    /// Run a search and return the service's results.
    ///
    /// The query is trimmed. A blank query clears the results without a
    /// network call. Otherwise the response replaces the current results in
    /// full, unless a newer search was dispatched in the meantime. Failures log
    /// and yield no results.
    pub async fn search(&self, query: &str) -> Vec<Article> {
        let query = query.trim();
        let ticket = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state();
            state.query = query.to_string();
            if query.is_empty() {
                state.results.clear();
                state.loading = false;
                return Vec::new();
            }
            state.loading = true;
        }

        let results = match self.api.search_articles(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query, error = %e, "article search failed");
                Vec::new()
            }
        };

        let mut state = self.state();
        if ticket == self.search_seq.load(Ordering::SeqCst) {
            state.results = results.clone();
            state.loading = false;
        } else {
            debug!(query, ticket, "discarding stale search response");
        }
        results
    }

    /// Fetch full detail for `code` and make it the selected article.
    ///
    /// The code is trimmed like a search query. Always goes to the service
    /// rather than reusing a list item. The response
    /// replaces the previous selection wholesale (`None` for an unknown code).
    /// On failure the previous selection is kept.
    pub async fn select_by_code(&self, code: &str) -> Option<Article> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let ticket = self.select_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let article = match self.api.article_by_code(code).await {
            Ok(article) => article,
            Err(e) => {
                warn!(code, error = %e, "article lookup failed");
                return None;
            }
        };

        let mut state = self.state();
        if ticket == self.select_seq.load(Ordering::SeqCst) {
            state.selected = article.clone();
        } else {
            debug!(code, ticket, "discarding stale selection response");
        }
        article
    }

    /// Close the detail card. Any selection still in flight is discarded.
    pub fn clear_selection(&self) {
        self.select_seq.fetch_add(1, Ordering::SeqCst);
        self.state().selected = None;
    }

    /// Search results if there are any, else the head of the catalog.
    pub fn display_articles(&self) -> Vec<Article> {
        let state = self.state();
        if !state.results.is_empty() {
            state.results.clone()
        } else {
            state
                .catalog
                .iter()
                .take(self.default_slice)
                .cloned()
                .collect()
        }
    }

    pub fn query(&self) -> String {
        self.state().query.clone()
    }

    pub fn results(&self) -> Vec<Article> {
        self.state().results.clone()
    }

    pub fn selected(&self) -> Option<Article> {
        self.state().selected.clone()
    }

    pub fn catalog_len(&self) -> usize {
        self.state().catalog.len()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }
}
