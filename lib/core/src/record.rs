use crate::error::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single normalized catalog entry.
///
/// Every record that survives normalization has a non-empty `title`,
/// a non-empty `authors` string and a parsed `average_rating`; the
/// remaining fields degrade to `None` when the source value was missing
/// or unparsable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub title: String,
    /// May encode multiple authors as a delimited string (e.g. "A/B").
    pub authors: String,
    pub average_rating: f32,
    pub isbn: Option<String>,
    pub language_code: Option<String>,
    pub num_pages: Option<u32>,
    pub ratings_count: Option<u64>,
    pub publication_date: Option<NaiveDate>,
}

impl BookRecord {
    /// Value of a textual attribute, `None` when the field is null.
    #[inline]
    #[must_use]
    pub fn attribute(&self, attr: QueryAttribute) -> Option<&str> {
        match attr {
            QueryAttribute::Title => Some(&self.title),
            QueryAttribute::Authors => Some(&self.authors),
            QueryAttribute::LanguageCode => self.language_code.as_deref(),
        }
    }
}

/// A textual attribute a query can match against.
///
/// The set is closed: passing any other attribute name is a caller
/// contract violation and is rejected at parse time, as opposed to a
/// query that simply matches nothing (a normal, empty outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryAttribute {
    Title,
    Authors,
    LanguageCode,
}

impl QueryAttribute {
    /// Column name in the source schema.
    pub fn name(&self) -> &'static str {
        match self {
            QueryAttribute::Title => "title",
            QueryAttribute::Authors => "authors",
            QueryAttribute::LanguageCode => "language_code",
        }
    }
}

impl FromStr for QueryAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(QueryAttribute::Title),
            "authors" => Ok(QueryAttribute::Authors),
            "language_code" => Ok(QueryAttribute::LanguageCode),
            other => Err(Error::UnknownAttribute(other.to_string())),
        }
    }
}

impl std::fmt::Display for QueryAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
