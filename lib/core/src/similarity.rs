//! Pairwise cosine similarity over standardized feature vectors.
//!
//! The full matrix is O(n²) in catalog size; callers should expect
//! quadratic cost and memory, and treat catalogs beyond a few tens of
//! thousands of records as exceeding the intended working set.

use crate::features::FeatureVector;
use rayon::prelude::*;

/// Square, symmetric cosine-similarity matrix.
///
/// Entry (i, j) is the cosine similarity between the standardized
/// feature vectors of catalog positions i and j. The diagonal is 1
/// wherever the vector has nonzero magnitude, else 0.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix.
    ///
    /// Rows are computed in parallel; the combined result is identical
    /// to a sequential pass, so the matrix is deterministic.
    #[must_use]
    pub fn from_vectors(vectors: &[FeatureVector]) -> Self {
        let size = vectors.len();
        let norms: Vec<f32> = vectors.iter().map(norm).collect();

        let mut data = vec![0.0f32; size * size];
        data.par_chunks_mut(size.max(1))
            .enumerate()
            .for_each(|(i, row)| {
                for (j, out) in row.iter_mut().enumerate() {
                    *out = if norms[i] == 0.0 || norms[j] == 0.0 {
                        0.0
                    } else {
                        dot(&vectors[i], &vectors[j]) / (norms[i] * norms[j])
                    };
                }
            });

        Self { size, data }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity between positions i and j.
    ///
    /// # Panics
    /// Panics if i or j is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.size && j < self.size);
        self.data[i * self.size + j]
    }

    /// Row i as a slice of length `size()`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

#[inline]
fn dot(a: &FeatureVector, b: &FeatureVector) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
fn norm(v: &FeatureVector) -> f32 {
    dot(v, v).sqrt()
}
