//! Presentation helpers for query results.
//!
//! Formatting lives outside the core pipeline: the recommender and
//! aggregations return plain records, and these helpers render them
//! for terminal display (ratings to two decimals, thousands-separated
//! counts).

use crate::recommend::Recommendation;

/// Rating rounded to two decimals, e.g. "4.27".
#[must_use]
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.2}")
}

/// Thousands-separated integer, e.g. "2,530,894".
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render recommendations as an aligned table, one line per record.
///
/// Returns an empty string for an empty result set.
#[must_use]
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let title_width = recommendations
        .iter()
        .map(|r| r.record.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("title".len());
    let authors_width = recommendations
        .iter()
        .map(|r| r.record.authors.chars().count())
        .max()
        .unwrap_or(0)
        .max("authors".len());

    let mut out = format!(
        "{:<title_width$}  {:<authors_width$}  {:>6}  {:>12}\n",
        "title", "authors", "rating", "ratings"
    );
    for r in recommendations {
        out.push_str(&format!(
            "{:<title_width$}  {:<authors_width$}  {:>6}  {:>12}\n",
            r.record.title,
            r.record.authors,
            format_rating(r.record.average_rating),
            format_count(r.record.ratings_count.unwrap_or(0)),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use readnext_core::BookRecord;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.267), "4.27");
        assert_eq!(format_rating(4.0), "4.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(2_530_894), "2,530,894");
    }

    #[test]
    fn test_format_recommendations() {
        let recs = vec![Recommendation {
            position: 0,
            score: 0.9,
            record: BookRecord {
                title: "Dune".to_string(),
                authors: "Frank Herbert".to_string(),
                average_rating: 4.25,
                isbn: None,
                language_code: None,
                num_pages: None,
                ratings_count: Some(1_234_567),
                publication_date: None,
            },
        }];
        let table = format_recommendations(&recs);
        assert!(table.contains("Dune"));
        assert!(table.contains("4.25"));
        assert!(table.contains("1,234,567"));
        assert_eq!(format_recommendations(&[]), "");
    }
}
