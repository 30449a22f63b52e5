//! # readnext
//!
//! A content-based book recommender over tabular catalogs.
//!
//! readnext loads a CSV book catalog into an immutable in-memory
//! snapshot, standardizes a small numeric feature set per book, and
//! ranks recommendations by mean cosine similarity to the records
//! matching a free-text query, excluding books that share the queried
//! attribute's value.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install readnext
//! readnext books.csv --query "Tolkien" --attribute authors --count 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use readnext::prelude::*;
//!
//! let catalog = load_catalog("books.csv")?;
//! let recs = recommend(&catalog, "Tolkien", QueryAttribute::Authors, 5);
//! for r in &recs {
//!     println!("{} — {}", r.record.title, r.record.authors);
//! }
//! # Ok::<(), readnext::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! readnext is composed of several crates:
//!
//! - [`readnext-core`](https://docs.rs/readnext-core) - Records, catalog store, standardization, cosine similarity
//! - [`readnext-ingest`](https://docs.rs/readnext-ingest) - CSV loading, schema validation, normalization
//! - [`readnext-query`](https://docs.rs/readnext-query) - Matching, recommendation ranking, aggregations
//!
//! ## Scaling note
//!
//! Each recommendation call recomputes the full pairwise similarity
//! matrix: O(n²) time and memory in catalog size. This is deliberate
//! for small and medium catalogs; beyond a few tens of thousands of
//! records the working set exceeds the design's intent.

// Re-export core types
pub use readnext_core::{
    features, BookRecord, Catalog, Error, FeatureVector, QueryAttribute, Result,
    SimilarityMatrix, FEATURE_DIM,
};

// Re-export ingest
pub use readnext_ingest::{load_catalog, read_catalog, REQUIRED_COLUMNS};

// Re-export query
pub use readnext_query::{
    author_performance, author_summary, catalog_stats, format_count, format_rating,
    format_recommendations, language_distribution, match_positions, most_prolific_authors,
    recommend, top_authors_by_rating, top_rated_books, AuthorRating, AuthorSummary, CatalogStats,
    Recommendation,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        catalog_stats, language_distribution, load_catalog, match_positions, read_catalog,
        recommend, BookRecord, Catalog, CatalogStats, Error, QueryAttribute, Recommendation,
        Result, SimilarityMatrix,
    };
}
