use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::utils::date::serializer;

// BookDto is the JSON shape of a book record returned by the catalog endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub name: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub published: NaiveDateTime,
}

impl From<&BookRecord> for BookDto {
    fn from(other: &BookRecord) -> Self {
        Self {
            name: other.name().to_string(),
            author: other.author().to_string(),
            published: other.published(),
        }
    }
}
