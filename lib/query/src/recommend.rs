//! Similarity-ranked recommendations.
//!
//! Each call recomputes standardized features and the full pairwise
//! similarity matrix from the catalog snapshot. That keeps queries
//! pure reads over an immutable catalog at an O(n²) per-call cost;
//! catalogs beyond a few tens of thousands of records exceed the
//! intended working set.

use crate::matcher::match_positions;
use ahash::AHashSet;
use ordered_float::OrderedFloat;
use readnext_core::{features, BookRecord, Catalog, QueryAttribute, SimilarityMatrix};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Catalog position of the recommended record.
    pub position: usize,
    /// Mean cosine similarity to the query-matched records.
    pub score: f32,
    pub record: BookRecord,
}

/// Recommend up to `n` records similar to those matching `query` on
/// `attribute`.
///
/// The candidates matching the query are found by case-insensitive
/// substring containment; every catalog record is then scored by its
/// mean similarity to the matched set and ranked descending. Records
/// whose `attribute` value equals any matched record's value are
/// excluded, so the result never contains "more of the same" - the
/// exclusion compares stored values exactly, not positions.
///
/// Ties in score keep ascending catalog order (stable sort).
///
/// Returns an empty vector when nothing matches the query or no
/// candidate survives the exclusion rule; neither is an error.
#[must_use]
pub fn recommend(
    catalog: &Catalog,
    query: &str,
    attribute: QueryAttribute,
    n: usize,
) -> Vec<Recommendation> {
    let matched = match_positions(catalog, attribute, query);
    if matched.is_empty() {
        debug!(%attribute, query, "query matched no records");
        return Vec::new();
    }
    debug!(%attribute, query, matched = matched.len(), "scoring candidates");

    let scaled = features::standardized_features(catalog);
    let matrix = SimilarityMatrix::from_vectors(&scaled);

    // Aggregate score: mean similarity to the matched set.
    let mut scores = vec![0.0f32; catalog.len()];
    for &i in &matched {
        for (score, sim) in scores.iter_mut().zip(matrix.row(i)) {
            *score += sim;
        }
    }
    let inv = 1.0 / matched.len() as f32;
    for score in &mut scores {
        *score *= inv;
    }

    let mut order: Vec<usize> = (0..catalog.len()).collect();
    order.sort_by_key(|&j| Reverse(OrderedFloat(scores[j])));

    let excluded: AHashSet<&str> = matched
        .iter()
        .filter_map(|&i| catalog[i].attribute(attribute))
        .collect();

    let mut selected = Vec::with_capacity(n.min(catalog.len()));
    for j in order {
        if selected.len() >= n {
            break;
        }
        let novel = match catalog[j].attribute(attribute) {
            Some(value) => !excluded.contains(value),
            None => true,
        };
        if novel {
            selected.push(Recommendation {
                position: j,
                score: scores[j],
                record: catalog[j].clone(),
            });
        }
    }
    selected
}
