//! Deadline urgency: calendar-day arithmetic mapped to priority tiers and summary buckets.
//!
//! Two views of urgency coexist on the deadlines tab:
//!
//! - **Tier**: the per-row colour. Either derived from the date or taken from
//!   the stored [`Priority`], depending on [`PriorityPolicy`].
//! - **Bucket**: the summary counters at the top of the tab. Always derived
//!   from the date: critical (≤ 7 days), warning (≤ 30 days), normal.
//!
//! A deadline due today or earlier is overdue regardless of policy.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::{Deadline, Priority};

/// Upper bound (inclusive) of the critical bucket and the high tier, in days.
pub const CRITICAL_DAYS: i64 = 7;
/// Upper bound (inclusive) of the warning bucket and the medium tier, in days.
pub const WARNING_DAYS: i64 = 30;

const OVERDUE_LABEL: &str = "Просрочено";

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("invalid deadline date: {0:?}")]
    InvalidDate(String),
}

/// Where a deadline's row tier comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityPolicy {
    /// Tier is computed from the due date; stored priorities are ignored.
    #[default]
    Derived,
    /// Tier is the record's stored priority, derived only when absent.
    Stored,
}

/// Per-row urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Overdue,
    High,
    Medium,
    Low,
}

impl Tier {
    fn from_days(days: i64) -> Self {
        if days <= 0 {
            Tier::Overdue
        } else if days <= CRITICAL_DAYS {
            Tier::High
        } else if days <= WARNING_DAYS {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Overdue => "overdue",
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl From<Priority> for Tier {
    fn from(p: Priority) -> Self {
        match p {
            Priority::High => Tier::High,
            Priority::Medium => Tier::Medium,
            Priority::Low => Tier::Low,
        }
    }
}

/// Summary counter a deadline falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Critical,
    Warning,
    Normal,
}

impl Bucket {
    fn from_days(days: i64) -> Self {
        if days <= CRITICAL_DAYS {
            Bucket::Critical
        } else if days <= WARNING_DAYS {
            Bucket::Warning
        } else {
            Bucket::Normal
        }
    }

    /// Badge title shown on the summary card.
    pub fn title(self) -> &'static str {
        match self {
            Bucket::Critical => "Критично",
            Bucket::Warning => "Внимание",
            Bucket::Normal => "Норма",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub days_until: i64,
    pub tier: Tier,
    pub bucket: Bucket,
}

impl Classification {
    pub fn is_overdue(&self) -> bool {
        self.days_until <= 0
    }

    pub fn label(&self) -> String {
        label(self.days_until)
    }
}

/// Counts shown on the summary cards, each computed independently per record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineSummary {
    pub critical: usize,
    pub warning: usize,
    pub normal: usize,
    /// Subset of `critical` already past due.
    pub overdue: usize,
    /// Records whose date could not be parsed; counted in no bucket.
    pub invalid: usize,
}

/// Parse an ISO date or RFC 3339 timestamp, dropping the time of day.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, DeadlineError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| DeadlineError::InvalidDate(s.to_string()))
}

/// Whole calendar days from `today` until `due`. Negative when past due.
pub fn days_until(due: &str, today: NaiveDate) -> Result<i64, DeadlineError> {
    let due = parse_due_date(due)?;
    Ok((due - today).num_days())
}

/// Classify a due date under the given policy.
///
/// `stored` is the record's own priority; it only matters under
/// [`PriorityPolicy::Stored`].
pub fn classify(
    due: &str,
    today: NaiveDate,
    stored: Option<Priority>,
    policy: PriorityPolicy,
) -> Result<Classification, DeadlineError> {
    Ok(classify_date(parse_due_date(due)?, today, stored, policy))
}

/// [`classify`] for an already parsed due date.
pub fn classify_date(
    due: NaiveDate,
    today: NaiveDate,
    stored: Option<Priority>,
    policy: PriorityPolicy,
) -> Classification {
    let days = (due - today).num_days();
    let tier = match (policy, stored) {
        _ if days <= 0 => Tier::Overdue,
        (PriorityPolicy::Stored, Some(p)) => Tier::from(p),
        _ => Tier::from_days(days),
    };
    Classification {
        days_until: days,
        tier,
        bucket: Bucket::from_days(days),
    }
}

/// Classify a deadline record.
pub fn classify_deadline(
    deadline: &Deadline,
    today: NaiveDate,
    policy: PriorityPolicy,
) -> Result<Classification, DeadlineError> {
    classify(&deadline.date, today, deadline.priority, policy)
}

/// Row badge text: `"Через N дн."` or `"Просрочено"`.
pub fn label(days_until: i64) -> String {
    if days_until > 0 {
        format!("Через {days_until} дн.")
    } else {
        OVERDUE_LABEL.to_string()
    }
}

/// Bucket counts for a set of deadlines.
pub fn summarize(deadlines: &[Deadline], today: NaiveDate) -> DeadlineSummary {
    let mut summary = DeadlineSummary::default();
    for d in deadlines {
        let days = match days_until(&d.date, today) {
            Ok(days) => days,
            Err(e) => {
                warn!(id = %d.id, error = %e, "skipping deadline in summary");
                summary.invalid += 1;
                continue;
            }
        };
        match Bucket::from_days(days) {
            Bucket::Critical => summary.critical += 1,
            Bucket::Warning => summary.warning += 1,
            Bucket::Normal => summary.normal += 1,
        }
        if days <= 0 {
            summary.overdue += 1;
        }
    }
    summary
}

/// Long Russian date, e.g. `15 ноября 2025`.
pub fn format_date_ru(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
