//! Free-text matching of catalog records on a textual attribute.
//!
//! Matching is case-insensitive substring containment on the raw
//! stored text. This is a deliberate simplicity choice, not a
//! placeholder for tokenized or fuzzy matching.

use readnext_core::{Catalog, QueryAttribute};

/// Positions of all records whose `attribute` value contains `query`,
/// case-insensitively.
///
/// Records with a null value for the attribute never match. An empty
/// result is a normal outcome (unknown author, title, etc.), not an
/// error.
#[must_use]
pub fn match_positions(catalog: &Catalog, attribute: QueryAttribute, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .attribute(attribute)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
        .map(|(position, _)| position)
        .collect()
}
