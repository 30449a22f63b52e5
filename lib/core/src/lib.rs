//! # readnext Core
//!
//! Core library for the readnext book recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`BookRecord`] - A normalized catalog entry
//! - [`Catalog`] - Immutable, position-indexed record store
//! - [`features`] - Feature extraction and standardization
//! - [`SimilarityMatrix`] - Full pairwise cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use readnext_core::{BookRecord, Catalog, features, SimilarityMatrix};
//!
//! let records = vec![BookRecord {
//!     title: "Book1".to_string(),
//!     authors: "Author1".to_string(),
//!     average_rating: 4.5,
//!     isbn: None,
//!     language_code: Some("eng".to_string()),
//!     num_pages: Some(200),
//!     ratings_count: Some(1000),
//!     publication_date: None,
//! }];
//! let catalog = Catalog::new(records);
//!
//! let scaled = features::standardized_features(&catalog);
//! let matrix = SimilarityMatrix::from_vectors(&scaled);
//! assert_eq!(matrix.size(), catalog.len());
//! ```

pub mod catalog;
pub mod error;
pub mod features;
pub mod record;
pub mod similarity;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use features::{FeatureVector, FEATURE_DIM};
pub use record::{BookRecord, QueryAttribute};
pub use similarity::SimilarityMatrix;
