//! Shared record types exchanged with the article, document, and court-practice services.

use serde::{Deserialize, Deserializer, Serialize};

/// A criminal or procedural code provision from the article catalog.
///
/// Identified by `code` (e.g. `"158 УК РФ"`) for detail lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub punishment: String,
}

/// A procedural template or record in the document library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Numeric on the wire from the service, textual in local fixtures.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub code: String,
    pub description: String,
}

/// Urgency stored alongside a deadline record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A procedural time limit tied to an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub id: String,
    pub title: String,
    /// ISO 8601 date (`YYYY-MM-DD`) or full timestamp.
    pub date: String,
    pub article: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// A precedent judicial decision associated with an article code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtCase {
    pub id: i64,
    pub article_code: String,
    pub case_number: String,
    pub court_name: String,
    /// ISO 8601 date, `null` when the decision date is unknown.
    pub decision_date: Option<String>,
    pub decision_type: String,
    pub summary: String,
    pub verdict: Option<String>,
    pub url: Option<String>,
}

/// Response body of the court-practice service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeResult {
    #[serde(default)]
    pub cases: Vec<CourtCase>,
    #[serde(default)]
    pub total: u64,
    /// Echo of the queried code.
    #[serde(default)]
    pub article_code: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Num(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
