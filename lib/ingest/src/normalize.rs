//! Per-row normalization into typed records.
//!
//! Malformed individual values never fail the load: numeric and date
//! fields degrade to null and the row is then judged against the drop
//! rule (title, authors and average_rating are required).

use crate::reader::ColumnMap;
use chrono::NaiveDate;
use csv::StringRecord;
use readnext_core::BookRecord;

/// Date formats seen in catalog exports, tried in order.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Normalize one raw row, or `None` when the drop rule rejects it.
pub fn normalize_row(columns: &ColumnMap, row: &StringRecord) -> Option<BookRecord> {
    let field = |idx: usize| row.get(idx).unwrap_or("");

    let title = parse_text(field(columns.title))?;
    let authors = parse_text(field(columns.authors))?;
    let average_rating = parse_f32(field(columns.average_rating))?;

    Some(BookRecord {
        title,
        authors,
        average_rating,
        isbn: parse_text(field(columns.isbn)),
        language_code: parse_text(field(columns.language_code)),
        num_pages: parse_u32(field(columns.num_pages)),
        ratings_count: parse_u64(field(columns.ratings_count)),
        publication_date: parse_date(field(columns.publication_date)),
    })
}

fn parse_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_f32(value: &str) -> Option<f32> {
    value.trim().parse().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnMap {
        let headers = StringRecord::from(vec![
            "title",
            "authors",
            "average_rating",
            "isbn",
            "language_code",
            "num_pages",
            "ratings_count",
            "publication_date",
        ]);
        ColumnMap::from_headers(&headers).unwrap()
    }

    fn row(fields: [&str; 8]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_full_row() {
        let record = normalize_row(
            &columns(),
            &row(["The Hobbit", "J.R.R. Tolkien", "4.27", "0618260307", "eng", " 366 ", "2530894", "9/1/2006"]),
        )
        .unwrap();
        assert_eq!(record.title, "The Hobbit");
        assert!((record.average_rating - 4.27).abs() < 1e-6);
        assert_eq!(record.num_pages, Some(366));
        assert_eq!(record.ratings_count, Some(2_530_894));
        assert_eq!(
            record.publication_date,
            NaiveDate::from_ymd_opt(2006, 9, 1)
        );
    }

    #[test]
    fn test_drop_rule() {
        // Missing title
        assert!(normalize_row(
            &columns(),
            &row(["", "Author", "4.0", "", "", "", "", ""])
        )
        .is_none());
        // Missing authors
        assert!(normalize_row(
            &columns(),
            &row(["Book", "  ", "4.0", "", "", "", "", ""])
        )
        .is_none());
        // Unparsable rating
        assert!(normalize_row(
            &columns(),
            &row(["Book", "Author", "not a number", "", "", "", "", ""])
        )
        .is_none());
    }

    #[test]
    fn test_unparsable_optionals_degrade_to_null() {
        let record = normalize_row(
            &columns(),
            &row(["Book", "Author", "3.9", "", "", "many", "??", "sometime in 1999"]),
        )
        .unwrap();
        assert_eq!(record.num_pages, None);
        assert_eq!(record.ratings_count, None);
        assert_eq!(record.publication_date, None);
        assert_eq!(record.language_code, None);
    }

    #[test]
    fn test_iso_date_accepted() {
        let record = normalize_row(
            &columns(),
            &row(["Book", "Author", "3.9", "", "", "", "", "1999-12-31"]),
        )
        .unwrap();
        assert_eq!(
            record.publication_date,
            NaiveDate::from_ymd_opt(1999, 12, 31)
        );
    }

    #[test]
    fn test_short_row_tolerated() {
        // Flexible sources may truncate trailing fields.
        let record = normalize_row(
            &columns(),
            &StringRecord::from(vec!["Book", "Author", "3.9"]),
        )
        .unwrap();
        assert_eq!(record.ratings_count, None);
    }
}
