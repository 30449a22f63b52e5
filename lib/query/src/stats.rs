//! Descriptive aggregations over a catalog.
//!
//! These are plain count/filter/sort queries over already-clean
//! records; they share nothing with the similarity pipeline beyond
//! the catalog itself. All orderings are deterministic: count and
//! rating ties fall back to lexicographic order.

use crate::matcher::match_positions;
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use readnext_core::{BookRecord, Catalog, QueryAttribute};
use serde::Serialize;

/// Result-list cap shared by the top-N aggregations.
const TOP_N: usize = 10;

/// Summary statistics for a whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_books: usize,
    pub unique_authors: usize,
    pub average_rating: f32,
    /// Mean page count over records with a known page count.
    pub average_pages: Option<f32>,
    /// Up to three most common language codes with their counts.
    pub top_languages: Vec<(String, usize)>,
    /// Earliest and latest known publication years.
    pub publication_years: Option<(i32, i32)>,
    pub total_ratings: u64,
    pub average_ratings_per_book: Option<f32>,
}

/// Mean rating of one author across their books.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorRating {
    pub authors: String,
    pub average_rating: f32,
    pub books: usize,
}

/// Summary of a single author's catalog presence.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    pub num_books: usize,
    pub average_rating: f32,
    pub total_ratings: u64,
    pub average_pages: Option<f32>,
    pub most_rated_book: String,
    pub highest_rated_book: String,
}

/// Compute [`CatalogStats`] for the catalog.
#[must_use]
pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    use chrono::Datelike;

    let total_books = catalog.len();
    let unique_authors = {
        let mut authors: Vec<&str> = catalog.iter().map(|r| r.authors.as_str()).collect();
        authors.sort_unstable();
        authors.dedup();
        authors.len()
    };

    let average_rating = if total_books == 0 {
        0.0
    } else {
        catalog.iter().map(|r| r.average_rating).sum::<f32>() / total_books as f32
    };

    let average_pages = mean(catalog.iter().filter_map(|r| r.num_pages.map(f64::from)));

    let years: Vec<i32> = catalog
        .iter()
        .filter_map(|r| r.publication_date.map(|d| d.year()))
        .collect();
    let publication_years = years
        .iter()
        .min()
        .copied()
        .zip(years.iter().max().copied());

    let total_ratings: u64 = catalog.iter().filter_map(|r| r.ratings_count).sum();
    let average_ratings_per_book =
        mean(catalog.iter().filter_map(|r| r.ratings_count.map(|c| c as f64)));

    CatalogStats {
        total_books,
        unique_authors,
        average_rating,
        average_pages,
        top_languages: language_distribution(catalog).into_iter().take(3).collect(),
        publication_years,
        total_ratings,
        average_ratings_per_book,
    }
}

/// Book counts per language code, most common first.
#[must_use]
pub fn language_distribution(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for record in catalog {
        if let Some(code) = record.language_code.as_deref() {
            *counts.entry(code).or_insert(0) += 1;
        }
    }
    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(code, count)| (code.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

/// Top 10 books by rating among those with at least `min_ratings`
/// ratings.
#[must_use]
pub fn top_rated_books(catalog: &Catalog, min_ratings: u64) -> Vec<&BookRecord> {
    let mut books: Vec<&BookRecord> = catalog
        .iter()
        .filter(|r| r.ratings_count.unwrap_or(0) >= min_ratings)
        .collect();
    books.sort_by(|a, b| {
        OrderedFloat(b.average_rating)
            .cmp(&OrderedFloat(a.average_rating))
            .then_with(|| a.title.cmp(&b.title))
    });
    books.truncate(TOP_N);
    books
}

/// Top 10 author strings by number of books.
#[must_use]
pub fn most_prolific_authors(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for record in catalog {
        *counts.entry(record.authors.as_str()).or_insert(0) += 1;
    }
    let mut authors: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    authors.truncate(TOP_N);
    authors
}

/// Books matching `author_name` (case-insensitive substring), ordered
/// by publication date with undated books last.
#[must_use]
pub fn author_performance<'a>(catalog: &'a Catalog, author_name: &str) -> Vec<&'a BookRecord> {
    let mut books: Vec<&BookRecord> = match_positions(catalog, QueryAttribute::Authors, author_name)
        .into_iter()
        .map(|i| &catalog[i])
        .collect();
    books.sort_by_key(|r| (r.publication_date.is_none(), r.publication_date));
    books
}

/// Top 10 authors by mean rating among those with at least `min_books`
/// books.
#[must_use]
pub fn top_authors_by_rating(catalog: &Catalog, min_books: usize) -> Vec<AuthorRating> {
    let mut grouped: AHashMap<&str, (f32, usize)> = AHashMap::new();
    for record in catalog {
        let entry = grouped.entry(record.authors.as_str()).or_insert((0.0, 0));
        entry.0 += record.average_rating;
        entry.1 += 1;
    }
    let mut ratings: Vec<AuthorRating> = grouped
        .into_iter()
        .filter(|(_, (_, books))| *books >= min_books)
        .map(|(name, (sum, books))| AuthorRating {
            authors: name.to_string(),
            average_rating: sum / books as f32,
            books,
        })
        .collect();
    ratings.sort_by(|a, b| {
        OrderedFloat(b.average_rating)
            .cmp(&OrderedFloat(a.average_rating))
            .then_with(|| a.authors.cmp(&b.authors))
    });
    ratings.truncate(TOP_N);
    ratings
}

/// Summarize one author's books, or `None` when nothing matches.
#[must_use]
pub fn author_summary(catalog: &Catalog, author_name: &str) -> Option<AuthorSummary> {
    let books = author_performance(catalog, author_name);
    if books.is_empty() {
        return None;
    }

    let num_books = books.len();
    let average_rating =
        books.iter().map(|r| r.average_rating).sum::<f32>() / num_books as f32;
    let total_ratings: u64 = books.iter().filter_map(|r| r.ratings_count).sum();
    let average_pages = mean(books.iter().filter_map(|r| r.num_pages.map(f64::from)));

    let most_rated_book = books
        .iter()
        .max_by_key(|r| r.ratings_count.unwrap_or(0))?
        .title
        .clone();
    let highest_rated_book = books
        .iter()
        .max_by_key(|r| OrderedFloat(r.average_rating))?
        .title
        .clone();

    Some(AuthorSummary {
        num_books,
        average_rating,
        total_ratings,
        average_pages,
        most_rated_book,
        highest_rated_book,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f32> {
    let (sum, count) = values.fold((0.0f64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some((sum / count as f64) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        title: &str,
        authors: &str,
        rating: f32,
        count: Option<u64>,
        language: Option<&str>,
        year: Option<i32>,
    ) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            authors: authors.to_string(),
            average_rating: rating,
            isbn: None,
            language_code: language.map(str::to_string),
            num_pages: Some(300),
            ratings_count: count,
            publication_date: year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            record("B1", "A1", 4.5, Some(2000), Some("eng"), Some(2001)),
            record("B2", "A1", 4.0, Some(500), Some("eng"), Some(1999)),
            record("B3", "A2", 3.5, Some(1500), Some("spa"), None),
        ])
    }

    #[test]
    fn test_language_distribution() {
        let dist = language_distribution(&catalog());
        assert_eq!(dist, vec![("eng".to_string(), 2), ("spa".to_string(), 1)]);
    }

    #[test]
    fn test_catalog_stats() {
        let stats = catalog_stats(&catalog());
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.unique_authors, 2);
        assert!((stats.average_rating - 4.0).abs() < 1e-6);
        assert_eq!(stats.total_ratings, 4000);
        assert_eq!(stats.publication_years, Some((1999, 2001)));
        assert_eq!(stats.top_languages[0], ("eng".to_string(), 2));
    }

    #[test]
    fn test_top_rated_respects_threshold() {
        let catalog = catalog();
        let top = top_rated_books(&catalog, 1000);
        let titles: Vec<_> = top.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B1", "B3"]);
    }

    #[test]
    fn test_most_prolific_authors() {
        let authors = most_prolific_authors(&catalog());
        assert_eq!(authors[0], ("A1".to_string(), 2));
    }

    #[test]
    fn test_author_performance_sorted_by_date() {
        let catalog = catalog();
        let books = author_performance(&catalog, "a1");
        let titles: Vec<_> = books.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B2", "B1"]);
    }

    #[test]
    fn test_top_authors_by_rating_min_books() {
        let top = top_authors_by_rating(&catalog(), 2);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].authors, "A1");
        assert!((top[0].average_rating - 4.25).abs() < 1e-6);
    }

    #[test]
    fn test_author_summary() {
        let summary = author_summary(&catalog(), "A1").unwrap();
        assert_eq!(summary.num_books, 2);
        assert_eq!(summary.total_ratings, 2500);
        assert_eq!(summary.most_rated_book, "B1");
        assert_eq!(summary.highest_rated_book, "B1");
        assert!(author_summary(&catalog(), "nobody").is_none());
    }
}
