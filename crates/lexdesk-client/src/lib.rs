//! Data access and view state: the `LegalApi` seam, its HTTP implementation,
//! and the search, practice, documents, and deadlines views behind the dashboard tabs.

mod api;
mod error;
pub mod dashboard;
pub mod practice;
pub mod search;

#[cfg(feature = "http")]
pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use api::LegalApi;
pub use dashboard::{Dashboard, DeadlineRow, DeadlinesView, DocumentsView, Tab};
pub use error::ClientError;
pub use practice::{PracticeLookup, PracticeOutcome};
pub use search::ArticleSearch;

#[cfg(feature = "http")]
pub use http::HttpLegalApi;
