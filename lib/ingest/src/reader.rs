//! CSV source reading and schema validation.
//!
//! The source schema is validated against the required column set
//! before any row is processed; a missing column makes the whole load
//! fail, never a partially usable catalog. Header names are matched
//! after trimming, since source exports carry incidental padding
//! (e.g. "  num_pages").

use crate::normalize::normalize_row;
use csv::StringRecord;
use readnext_core::{Catalog, Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns a source must provide, by trimmed header name.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "title",
    "authors",
    "average_rating",
    "isbn",
    "language_code",
    "num_pages",
    "ratings_count",
    "publication_date",
];

/// Positions of the required columns within a source's header row.
///
/// Columns outside this set (including unnamed index columns emitted
/// by some exporters) are ignored entirely.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub title: usize,
    pub authors: usize,
    pub average_rating: usize,
    pub isbn: usize,
    pub language_code: usize,
    pub num_pages: usize,
    pub ratings_count: usize,
    pub publication_date: usize,
}

impl ColumnMap {
    /// Resolve the required columns, trimming header padding.
    ///
    /// Returns [`Error::MissingColumns`] listing every absent column.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        // The lookups below cannot fail after the check above.
        let position = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            title: position("title"),
            authors: position("authors"),
            average_rating: position("average_rating"),
            isbn: position("isbn"),
            language_code: position("language_code"),
            num_pages: position("num_pages"),
            ratings_count: position("ratings_count"),
            publication_date: position("publication_date"),
        })
    }
}

/// Load and normalize a catalog from a CSV file.
///
/// An absent or unreadable file is a fatal [`Error::Io`]; a readable
/// file with the full schema but zero data rows yields an empty
/// catalog, which is not an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let file = File::open(path.as_ref())?;
    let catalog = read_catalog(file)?;
    info!(
        records = catalog.len(),
        path = %path.as_ref().display(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Read and normalize a catalog from any CSV byte stream.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| Error::Source(e.to_string()))?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "skipping unreadable row");
                dropped += 1;
                continue;
            }
        };
        match normalize_row(&columns, &row) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = records.len(), "rows dropped during normalization");
    }
    Ok(Catalog::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "title,authors,average_rating,isbn,language_code,  num_pages,ratings_count,publication_date";

    #[test]
    fn test_padded_header_resolves() {
        let csv = format!("{HEADER}\nBook,Author,4.1,111,eng,320,500,9/1/2006\n");
        let catalog = read_catalog(Cursor::new(csv)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].num_pages, Some(320));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "title,authors,average_rating,isbn,language_code,num_pages,publication_date\n\
                   Book,Author,4.1,111,eng,320,9/1/2006\n";
        let err = read_catalog(Cursor::new(csv)).unwrap_err();
        match err {
            Error::MissingColumns(missing) => assert_eq!(missing, vec!["ratings_count"]),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_source_is_empty_catalog() {
        let catalog = read_catalog(Cursor::new(format!("{HEADER}\n"))).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_completely_empty_source_fails() {
        assert!(read_catalog(Cursor::new("")).is_err());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = format!(
            "Unnamed: 0,{HEADER},bookID\n0,Book,Author,4.1,111,eng,320,500,9/1/2006,42\n"
        );
        let catalog = read_catalog(Cursor::new(csv)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Book");
    }
}
