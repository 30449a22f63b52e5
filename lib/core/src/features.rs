//! Feature extraction and standardization.
//!
//! Each record is projected onto a fixed numeric feature vector of
//! (average_rating, ratings_count, num_pages), then every dimension is
//! rescaled to zero mean / unit variance across the whole catalog.
//! Missing numeric values are substituted with 0 before standardization.

use crate::catalog::Catalog;
use crate::record::BookRecord;

/// Number of numeric features per record.
pub const FEATURE_DIM: usize = 3;

/// One feature vector per catalog position.
pub type FeatureVector = [f32; FEATURE_DIM];

/// Raw (unscaled) feature vector for a single record.
#[inline]
#[must_use]
pub fn extract(record: &BookRecord) -> FeatureVector {
    [
        record.average_rating,
        record.ratings_count.unwrap_or(0) as f32,
        record.num_pages.unwrap_or(0) as f32,
    ]
}

/// Raw feature matrix for the whole catalog, in catalog order.
#[must_use]
pub fn extract_all(catalog: &Catalog) -> Vec<FeatureVector> {
    catalog.iter().map(extract).collect()
}

/// Standardize each feature dimension to zero mean / unit variance.
///
/// Mean and standard deviation are computed over the full population
/// (ddof = 0). A dimension with zero variance is flattened to all
/// zeros rather than dividing by zero, which removes its contribution
/// to similarity.
#[must_use]
pub fn standardize(features: &[FeatureVector]) -> Vec<FeatureVector> {
    let n = features.len();
    if n == 0 {
        return Vec::new();
    }

    let mut means = [0.0f32; FEATURE_DIM];
    for f in features {
        for (m, v) in means.iter_mut().zip(f) {
            *m += v;
        }
    }
    for m in &mut means {
        *m /= n as f32;
    }

    let mut stddevs = [0.0f32; FEATURE_DIM];
    for f in features {
        for ((s, v), m) in stddevs.iter_mut().zip(f).zip(&means) {
            let d = v - m;
            *s += d * d;
        }
    }
    for s in &mut stddevs {
        *s = (*s / n as f32).sqrt();
    }

    features
        .iter()
        .map(|f| {
            let mut scaled = [0.0f32; FEATURE_DIM];
            for d in 0..FEATURE_DIM {
                if stddevs[d] > 0.0 {
                    scaled[d] = (f[d] - means[d]) / stddevs[d];
                }
            }
            scaled
        })
        .collect()
}

/// Extract and standardize in one pass over the catalog.
#[must_use]
pub fn standardized_features(catalog: &Catalog) -> Vec<FeatureVector> {
    standardize(&extract_all(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: f32, count: Option<u64>, pages: Option<u32>) -> BookRecord {
        BookRecord {
            title: "t".to_string(),
            authors: "a".to_string(),
            average_rating: rating,
            isbn: None,
            language_code: None,
            num_pages: pages,
            ratings_count: count,
            publication_date: None,
        }
    }

    #[test]
    fn test_missing_values_become_zero() {
        let f = extract(&record(4.0, None, None));
        assert_eq!(f, [4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_standardize_zero_mean_unit_variance() {
        let features = vec![
            [1.0, 10.0, 100.0],
            [2.0, 20.0, 300.0],
            [3.0, 60.0, 500.0],
            [4.0, 30.0, 700.0],
        ];
        let scaled = standardize(&features);

        for d in 0..FEATURE_DIM {
            let mean: f32 = scaled.iter().map(|f| f[d]).sum::<f32>() / scaled.len() as f32;
            let var: f32 =
                scaled.iter().map(|f| (f[d] - mean).powi(2)).sum::<f32>() / scaled.len() as f32;
            assert!(mean.abs() < 1e-5, "dim {} mean = {}", d, mean);
            assert!((var - 1.0).abs() < 1e-4, "dim {} var = {}", d, var);
        }
    }

    #[test]
    fn test_standardize_zero_variance_dimension() {
        // All records share the same rating; that dimension must come
        // out as all zeros instead of a division error.
        let features = vec![[4.0, 10.0, 100.0], [4.0, 20.0, 200.0], [4.0, 30.0, 300.0]];
        let scaled = standardize(&features);
        assert!(scaled.iter().all(|f| f[0] == 0.0));
        assert!(scaled.iter().any(|f| f[1] != 0.0));
    }

    #[test]
    fn test_standardize_empty() {
        assert!(standardize(&[]).is_empty());
    }
}
