pub mod catalog;
pub mod config;
pub mod deadline;
pub mod model;

pub use config::{ApiConfig, ConfigError};
pub use deadline::{Bucket, Classification, DeadlineError, DeadlineSummary, PriorityPolicy, Tier};
pub use model::{Article, CourtCase, Deadline, Document, PracticeResult, Priority};
