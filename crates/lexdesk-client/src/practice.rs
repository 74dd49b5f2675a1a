//! Court-practice lookup, used by the practice tab and the article detail card.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lexdesk_core::{CourtCase, PracticeResult};
use tracing::{debug, warn};

use crate::LegalApi;

/// Shortcut codes offered under the practice search box.
pub const QUICK_TAGS: &[&str] = &["158 УК РФ", "159 УК РФ", "105 УК РФ", "228 УК РФ", "264 УК РФ"];

/// What the practice view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeOutcome {
    NotSearched,
    /// A lookup ran and found nothing (or failed).
    Empty,
    Found(u64),
}

#[derive(Default)]
struct PracticeState {
    article_code: String,
    cases: Vec<CourtCase>,
    total: u64,
    has_searched: bool,
    loading: bool,
}

pub struct PracticeLookup {
    api: Arc<dyn LegalApi>,
    seq: AtomicU64,
    state: Mutex<PracticeState>,
}

impl PracticeLookup {
    pub fn new(api: Arc<dyn LegalApi>) -> Self {
        Self {
            api,
            seq: AtomicU64::new(0),
            state: Mutex::new(PracticeState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PracticeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up precedents for `article_code`.
    ///
    /// Blank input is ignored. A failed request is logged and leaves an empty
    /// list, indistinguishable from a lookup that found nothing.
    pub async fn lookup(&self, article_code: &str) -> PracticeResult {
        let code = article_code.trim();
        if code.is_empty() {
            return PracticeResult::default();
        }
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state();
            state.article_code = code.to_string();
            state.has_searched = true;
            state.loading = true;
        }

        let result = match self.api.court_practice(code).await {
            Ok(result) => result,
            Err(e) => {
                warn!(article_code = code, error = %e, "failed to load court practice");
                PracticeResult::default()
            }
        };

        let mut state = self.state();
        if ticket == self.seq.load(Ordering::SeqCst) {
            state.cases = result.cases.clone();
            state.total = result.total;
            state.loading = false;
        } else {
            debug!(article_code = code, ticket, "discarding stale practice response");
        }
        result
    }

    pub fn outcome(&self) -> PracticeOutcome {
        let state = self.state();
        if !state.has_searched {
            PracticeOutcome::NotSearched
        } else if state.cases.is_empty() {
            PracticeOutcome::Empty
        } else {
            PracticeOutcome::Found(state.total)
        }
    }

    pub fn article_code(&self) -> String {
        self.state().article_code.clone()
    }

    pub fn cases(&self) -> Vec<CourtCase> {
        self.state().cases.clone()
    }

    pub fn total(&self) -> u64 {
        self.state().total
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }
}
