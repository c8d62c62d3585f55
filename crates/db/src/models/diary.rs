//! Diary entry model and DTOs.

use diary_core::diary::{format_date, validate_entry};
use diary_core::error::ValidationError;
use diary_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `diary` table.
///
/// Serializes `date` as `YYYY-MM-DD HH:MM:SS`, the format used by both the
/// JSON API and the HTML pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DiaryEntry {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: Timestamp,
}

fn serialize_date<S: Serializer>(date: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(date))
}

/// Raw create/update payload, from either a JSON body or an HTML form.
///
/// Every field is optional so a missing key surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiaryInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl DiaryInput {
    /// Check presence and length limits, producing the repository input.
    pub fn validate(self) -> Result<NewDiaryEntry, ValidationError> {
        validate_entry(
            self.title.as_deref(),
            self.author.as_deref(),
            self.content.as_deref(),
        )?;
        Ok(NewDiaryEntry {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        })
    }
}

impl From<&DiaryEntry> for DiaryInput {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            title: Some(entry.title.clone()),
            author: Some(entry.author.clone()),
            content: Some(entry.content.clone()),
        }
    }
}

/// Validated editable fields of an entry. `id` and `date` are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiaryEntry {
    pub title: String,
    pub author: String,
    pub content: String,
}
