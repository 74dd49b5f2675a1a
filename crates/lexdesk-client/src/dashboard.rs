//! Tab shell composing the search, documents, deadlines, and practice views.

use std::sync::Arc;

use chrono::NaiveDate;
use lexdesk_core::catalog::{self, ALL_DOCUMENTS};
use lexdesk_core::deadline::{self, Classification};
use lexdesk_core::{ApiConfig, Deadline, DeadlineSummary, Document, PracticeResult, PriorityPolicy};
use tracing::{debug, warn};

use crate::{ArticleSearch, LegalApi, PracticeLookup};

/// Shortcut queries offered under the article search box.
pub const SEARCH_TAGS: &[&str] = &["158 УК РФ", "159 УК РФ", "228 УК РФ", "264 УК РФ", "146 УПК РФ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Documents,
    /// Document generator form; static, no state of its own.
    Generator,
    Deadlines,
    Practice,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Search,
        Tab::Documents,
        Tab::Generator,
        Tab::Deadlines,
        Tab::Practice,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Search => "Поиск",
            Tab::Documents => "Документы",
            Tab::Generator => "SmartDoc",
            Tab::Deadlines => "Сроки",
            Tab::Practice => "Практика",
        }
    }
}

/// Document library with a category filter.
pub struct DocumentsView {
    api: Arc<dyn LegalApi>,
    documents: Vec<Document>,
    category: String,
}

impl DocumentsView {
    pub fn new(api: Arc<dyn LegalApi>) -> Self {
        Self {
            api,
            documents: Vec::new(),
            category: ALL_DOCUMENTS.to_string(),
        }
    }

    /// Fetch the library. On failure the list is left empty.
    pub async fn load(&mut self) {
        match self.api.list_documents().await {
            Ok(documents) => self.documents = documents,
            Err(e) => {
                warn!(error = %e, "failed to load document library");
                self.documents.clear();
            }
        }
    }

    pub fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents under the selected category.
    pub fn visible(&self) -> Vec<&Document> {
        catalog::filter(&self.category, &self.documents)
    }

    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        catalog::category_counts(&self.documents)
    }
}

/// One classified row of the deadlines tab.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineRow<'a> {
    pub deadline: &'a Deadline,
    pub due: NaiveDate,
    pub classification: Classification,
}

/// Deadlines with urgency computed at render time.
pub struct DeadlinesView {
    deadlines: Vec<Deadline>,
    policy: PriorityPolicy,
}

impl DeadlinesView {
    pub fn new(deadlines: Vec<Deadline>, policy: PriorityPolicy) -> Self {
        Self { deadlines, policy }
    }

    pub fn set_deadlines(&mut self, deadlines: Vec<Deadline>) {
        self.deadlines = deadlines;
    }

    pub fn deadlines(&self) -> &[Deadline] {
        &self.deadlines
    }

    /// Classified rows in record order. Records with unparseable dates are skipped.
    pub fn rows(&self, today: NaiveDate) -> Vec<DeadlineRow<'_>> {
        self.deadlines
            .iter()
            .filter_map(|d| match deadline::parse_due_date(&d.date) {
                Ok(due) => Some(DeadlineRow {
                    deadline: d,
                    due,
                    classification: deadline::classify_date(due, today, d.priority, self.policy),
                }),
                Err(e) => {
                    warn!(id = %d.id, error = %e, "skipping deadline");
                    None
                }
            })
            .collect()
    }

    pub fn summary(&self, today: NaiveDate) -> DeadlineSummary {
        deadline::summarize(&self.deadlines, today)
    }
}

/// All dashboard views behind a single navigation surface.
pub struct Dashboard {
    active: Tab,
    pub search: ArticleSearch,
    pub documents: DocumentsView,
    pub deadlines: DeadlinesView,
    pub practice: PracticeLookup,
    /// Practice shown from the article detail card, independent of the practice tab.
    pub article_practice: PracticeLookup,
}

impl Dashboard {
    pub fn new(api: Arc<dyn LegalApi>, config: &ApiConfig) -> Self {
        Self {
            active: Tab::default(),
            search: ArticleSearch::with_default_slice(api.clone(), config.default_slice),
            documents: DocumentsView::new(api.clone()),
            deadlines: DeadlinesView::new(Vec::new(), config.priority_policy),
            practice: PracticeLookup::new(api.clone()),
            article_practice: PracticeLookup::new(api),
        }
    }

    /// Initial load: article catalog and document library, fetched concurrently.
    pub async fn mount(&mut self) {
        futures::join!(self.search.load_catalog(), self.documents.load());
        debug!(
            articles = self.search.catalog_len(),
            documents = self.documents.documents().len(),
            "dashboard mounted"
        );
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn switch_to(&mut self, tab: Tab) {
        debug!(from = ?self.active, to = ?tab, "switching tab");
        self.active = tab;
    }

    /// Court practice for the currently selected article, if any.
    pub async fn practice_for_selected(&self) -> Option<PracticeResult> {
        let article = self.search.selected()?;
        Some(self.article_practice.lookup(&article.code).await)
    }
}

#[cfg(test)]
mod tests {
    use lexdesk_core::{Bucket, Priority, Tier};

    use super::*;
    use crate::PracticeOutcome;
    use crate::fake::{FakeApi, catalog, court_case, document};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn library() -> Vec<Document> {
        vec![
            document("1", "Протокол допроса свидетеля", "Протоколы"),
            document("2", "Постановление о возбуждении уголовного дела", "Постановления"),
            document("3", "Протокол осмотра места происшествия", "Протоколы"),
            document("4", "Постановление о назначении экспертизы", "Постановления"),
            document("5", "Протокол обыска", "Протоколы"),
        ]
    }

    fn deadline(id: &str, date: &str, priority: Option<Priority>) -> Deadline {
        Deadline {
            id: id.into(),
            title: "Срок предварительного следствия".into(),
            date: date.into(),
            article: "УПК РФ ст. 162".into(),
            priority,
        }
    }

    #[tokio::test]
    async fn mount_loads_catalog_and_documents() {
        let api = Arc::new(FakeApi {
            articles: catalog(15),
            documents: library(),
            ..Default::default()
        });
        let mut dash = Dashboard::new(api.clone(), &ApiConfig::default());
        dash.mount().await;
        assert_eq!(api.calls(), 2);
        assert_eq!(dash.search.display_articles().len(), 10);
        assert_eq!(dash.documents.documents().len(), 5);
    }

    #[tokio::test]
    async fn mount_failure_leaves_views_empty() {
        let api = Arc::new(FakeApi {
            articles: catalog(15),
            documents: library(),
            ..FakeApi::failing()
        });
        let mut dash = Dashboard::new(api, &ApiConfig::default());
        dash.mount().await;
        assert!(dash.search.display_articles().is_empty());
        assert!(dash.documents.visible().is_empty());
    }

    #[tokio::test]
    async fn protocols_filter_shows_three() {
        let api = Arc::new(FakeApi {
            documents: library(),
            ..Default::default()
        });
        let mut view = DocumentsView::new(api);
        view.load().await;
        assert_eq!(view.category(), ALL_DOCUMENTS);
        assert_eq!(view.visible().len(), 5);

        view.select_category("Протоколы");
        assert_eq!(view.visible().len(), 3);
        let badge = view
            .counts()
            .into_iter()
            .find(|(c, _)| *c == "Протоколы")
            .map(|(_, n)| n);
        assert_eq!(badge, Some(3));
    }

    #[test]
    fn deadline_rows_and_summary() {
        let view = DeadlinesView::new(
            vec![
                deadline("1", "2026-10-24", Some(Priority::Low)),
                deadline("2", "2026-10-17", Some(Priority::High)),
                deadline("3", "2026-11-10", None),
                deadline("4", "2027-01-15", Some(Priority::High)),
                deadline("5", "24.10.2026", None),
            ],
            PriorityPolicy::Derived,
        );
        let rows = view.rows(today());
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].classification.label(), "Через 5 дн.");
        assert_eq!(rows[0].classification.bucket, Bucket::Critical);
        assert_eq!(rows[0].classification.tier, Tier::High);
        assert_eq!(rows[1].classification.label(), "Просрочено");
        assert_eq!(rows[2].classification.bucket, Bucket::Warning);
        assert_eq!(rows[3].classification.tier, Tier::Low);
        assert_eq!(rows[3].due, NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());

        let summary = view.summary(today());
        assert_eq!((summary.critical, summary.warning, summary.normal), (2, 1, 1));
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn rows_accept_timestamps() {
        let view = DeadlinesView::new(
            vec![deadline("6", "2026-10-24T18:00:00+03:00", Some(Priority::Low))],
            PriorityPolicy::Derived,
        );
        let rows = view.rows(today());
        assert_eq!(rows[0].due, NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(rows[0].classification.days_until, 5);
        assert_eq!(rows[0].classification.tier, Tier::High);
    }

    #[test]
    fn stored_policy_keeps_record_tier() {
        let view = DeadlinesView::new(
            vec![deadline("4", "2027-01-15", Some(Priority::High))],
            PriorityPolicy::Stored,
        );
        let rows = view.rows(today());
        assert_eq!(rows[0].classification.tier, Tier::High);
        assert_eq!(rows[0].classification.bucket, Bucket::Normal);
    }

    #[test]
    fn tabs_switch() {
        let api = Arc::new(FakeApi::default());
        let mut dash = Dashboard::new(api, &ApiConfig::default());
        assert_eq!(dash.active_tab(), Tab::Search);
        dash.switch_to(Tab::Deadlines);
        assert_eq!(dash.active_tab(), Tab::Deadlines);
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["Поиск", "Документы", "SmartDoc", "Сроки", "Практика"]);
    }

    #[tokio::test]
    async fn practice_for_selected_article() {
        let api = Arc::new(FakeApi {
            articles: catalog(3),
            cases: vec![court_case(1, "101 УК РФ"), court_case(2, "102 УК РФ")],
            ..Default::default()
        });
        let dash = Dashboard::new(api, &ApiConfig::default());
        assert!(dash.practice_for_selected().await.is_none());

        dash.search.select_by_code("101 УК РФ").await;
        let result = dash.practice_for_selected().await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(dash.article_practice.outcome(), PracticeOutcome::Found(1));
        assert_eq!(dash.practice.outcome(), PracticeOutcome::NotSearched);
    }
}
