use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::CourseId;
use crate::time::parse_timestamp;

/// Per-user progress for one course, as reported by the progress API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: CourseId,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub enrolled_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<String>,
}

impl CourseRecord {
    #[must_use]
    pub fn enrolled(id: impl Into<String>, enrolled_at: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(id),
            enrolled_at: Some(enrolled_at.into()),
            completed_at: None,
        }
    }

    #[must_use]
    pub fn completed(
        id: impl Into<String>,
        enrolled_at: impl Into<String>,
        completed_at: impl Into<String>,
    ) -> Self {
        Self {
            id: CourseId::new(id),
            enrolled_at: Some(enrolled_at.into()),
            completed_at: Some(completed_at.into()),
        }
    }

    /// A course counts as completed only with a non-blank completion timestamp.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at
            .as_deref()
            .is_some_and(|at| !at.trim().is_empty())
    }

    #[must_use]
    pub fn completed_at_utc(&self) -> Option<DateTime<Utc>> {
        self.completed_at.as_deref().and_then(parse_timestamp)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    Fractional(f64),
    Other(IgnoredAny),
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawTimestamp::Text(text) => Some(text),
        RawTimestamp::Millis(millis) => Some(millis.to_string()),
        RawTimestamp::Fractional(millis) => Some(format!("{millis}")),
        RawTimestamp::Other(_) => None,
    }))
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    #[must_use]
    pub fn of(record: Option<&CourseRecord>) -> Self {
        match record {
            None => Self::NotStarted,
            Some(record) if record.is_completed() => Self::Completed,
            Some(_) => Self::InProgress,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Lookup of records by course id. Later duplicates replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex<'a> {
    by_id: HashMap<&'a str, &'a CourseRecord>,
}

impl<'a> RecordIndex<'a> {
    #[must_use]
    pub fn new(records: &'a [CourseRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.insert(record.id.as_str(), record);
        }
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&'a CourseRecord> {
        self.by_id.get(id.as_str()).copied()
    }

    #[must_use]
    pub fn status(&self, id: &CourseId) -> CourseStatus {
        CourseStatus::of(self.get(id))
    }

    #[must_use]
    pub fn is_completed(&self, id: &CourseId) -> bool {
        self.status(id).is_completed()
    }
}
