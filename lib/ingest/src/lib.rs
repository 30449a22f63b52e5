//! # readnext Ingest
//!
//! Load-time pipeline for the readnext book recommender: CSV reading,
//! schema validation and row normalization into a
//! [`Catalog`](readnext_core::Catalog).
//!
//! Loading is all-or-nothing at the schema level (a missing required
//! column aborts with no partial catalog) and forgiving at the row
//! level (malformed values degrade to null, rows failing the drop rule
//! are skipped).
//!
//! ## Example
//!
//! ```rust,no_run
//! use readnext_ingest::load_catalog;
//!
//! let catalog = load_catalog("books.csv").unwrap();
//! println!("{} records", catalog.len());
//! ```

pub mod normalize;
pub mod reader;

pub use normalize::normalize_row;
pub use reader::{load_catalog, read_catalog, ColumnMap, REQUIRED_COLUMNS};
