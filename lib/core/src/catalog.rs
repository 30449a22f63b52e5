use crate::record::BookRecord;
use std::ops::Index;

/// An ordered, position-indexed collection of normalized records.
///
/// A catalog is built once from a normalized record set and never
/// mutated afterwards; every query against it is a pure read. The
/// position of a record is stable for the life of the catalog and is
/// the identity used to correlate records with rows and columns of the
/// similarity matrix.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<BookRecord>,
}

impl Catalog {
    #[inline]
    #[must_use]
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&BookRecord> {
        self.records.get(position)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.records.iter()
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }
}

impl Index<usize> for Catalog {
    type Output = BookRecord;

    fn index(&self, position: usize) -> &BookRecord {
        &self.records[position]
    }
}

impl FromIterator<BookRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            authors: "Author".to_string(),
            average_rating: 4.0,
            isbn: None,
            language_code: None,
            num_pages: None,
            ratings_count: None,
            publication_date: None,
        }
    }

    #[test]
    fn test_positional_lookup() {
        let catalog: Catalog = vec![record("a"), record("b")].into_iter().collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].title, "b");
        assert_eq!(catalog.get(0).map(|r| r.title.as_str()), Some("a"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
