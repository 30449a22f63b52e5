//! # readnext Query
//!
//! Query-time pipeline for the readnext book recommender.
//!
//! This crate turns an immutable [`Catalog`](readnext_core::Catalog)
//! into answers:
//!
//! - [`match_positions`] - Case-insensitive substring matching on a
//!   textual attribute
//! - [`recommend`] - Similarity-ranked recommendations with
//!   same-attribute exclusion
//! - [`stats`] - Descriptive aggregations (language distribution,
//!   top-rated books, author summaries)
//! - [`format`] - Terminal presentation helpers
//!
//! Every query is a pure read; the recommender recomputes features and
//! the similarity matrix from the catalog on each call.
//!
//! ## Example
//!
//! ```rust
//! use readnext_core::{BookRecord, Catalog, QueryAttribute};
//! use readnext_query::recommend;
//!
//! let catalog = Catalog::new(vec![
//!     BookRecord {
//!         title: "Book1".to_string(),
//!         authors: "Author1".to_string(),
//!         average_rating: 4.5,
//!         isbn: None,
//!         language_code: None,
//!         num_pages: Some(200),
//!         ratings_count: Some(1000),
//!         publication_date: None,
//!     },
//!     BookRecord {
//!         title: "Book2".to_string(),
//!         authors: "Author2".to_string(),
//!         average_rating: 3.8,
//!         isbn: None,
//!         language_code: None,
//!         num_pages: Some(300),
//!         ratings_count: Some(500),
//!         publication_date: None,
//!     },
//! ]);
//!
//! let recs = recommend(&catalog, "Author1", QueryAttribute::Authors, 5);
//! assert_eq!(recs[0].record.title, "Book2");
//! ```

pub mod format;
pub mod matcher;
pub mod recommend;
pub mod stats;

pub use format::{format_count, format_rating, format_recommendations};
pub use matcher::match_positions;
pub use recommend::{recommend, Recommendation};
pub use stats::{
    author_performance, author_summary, catalog_stats, language_distribution,
    most_prolific_authors, top_authors_by_rating, top_rated_books, AuthorRating, AuthorSummary,
    CatalogStats,
};
