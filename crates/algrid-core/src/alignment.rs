// ─────────────────────────────────────────────────────────────────────
// Algrid — Word Alignment View
// ─────────────────────────────────────────────────────────────────────
//! Read-only view of a word alignment, as consumed by the grid renderer.
//!
//! Deciding whether a span is consistent with the alignment stays with
//! the caller; the grid itself never looks at word links.

use std::collections::BTreeSet;

use algrid_types::{GridError, GridResult};

/// Trait for word alignment backends.
pub trait WordAlignment {
    /// Source sentence length.
    fn f_len(&self) -> usize;
    /// Target sentence length.
    fn e_len(&self) -> usize;
    /// Whether source word `f` is linked to target word `e`.
    fn is_aligned(&self, f: usize, e: usize) -> bool;
}

/// In-memory alignment indexed in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymmetricAlignment {
    f2e: Vec<BTreeSet<usize>>,
    e2f: Vec<BTreeSet<usize>>,
}

impl SymmetricAlignment {
    /// Empty alignment for a sentence pair of the given lengths.
    pub fn new(f_len: usize, e_len: usize) -> Self {
        Self {
            f2e: vec![BTreeSet::new(); f_len],
            e2f: vec![BTreeSet::new(); e_len],
        }
    }

    /// Parse the usual `f-e` pair list, e.g. `"0-0 1-2 2-1"`.
    pub fn from_pairs(f_len: usize, e_len: usize, pairs: &str) -> GridResult<Self> {
        let mut alignment = Self::new(f_len, e_len);
        for token in pairs.split_whitespace() {
            let (f, e) = token
                .split_once('-')
                .ok_or_else(|| GridError::Alignment(format!("expected f-e pair, got {token:?}")))?;
            let f = f
                .parse::<usize>()
                .map_err(|err| GridError::Alignment(format!("bad source index in {token:?}: {err}")))?;
            let e = e
                .parse::<usize>()
                .map_err(|err| GridError::Alignment(format!("bad target index in {token:?}: {err}")))?;
            alignment.add_align(f, e)?;
        }
        Ok(alignment)
    }

    /// Link source word `f` to target word `e`. Re-adding a link is a no-op.
    pub fn add_align(&mut self, f: usize, e: usize) -> GridResult<()> {
        if f >= self.f2e.len() || e >= self.e2f.len() {
            return Err(GridError::OutOfRange {
                f,
                e,
                f_len: self.f2e.len(),
                e_len: self.e2f.len(),
            });
        }
        self.f2e[f].insert(e);
        self.e2f[e].insert(f);
        Ok(())
    }

    /// Target positions linked to source word `f`.
    pub fn f2e(&self, f: usize) -> Option<&BTreeSet<usize>> {
        self.f2e.get(f)
    }

    /// Source positions linked to target word `e`.
    pub fn e2f(&self, e: usize) -> Option<&BTreeSet<usize>> {
        self.e2f.get(e)
    }

    pub fn link_count(&self) -> usize {
        self.f2e.iter().map(BTreeSet::len).sum()
    }
}

impl WordAlignment for SymmetricAlignment {
    fn f_len(&self) -> usize {
        self.f2e.len()
    }

    fn e_len(&self) -> usize {
        self.e2f.len()
    }

    fn is_aligned(&self, f: usize, e: usize) -> bool {
        self.f2e.get(f).map_or(false, |es| es.contains(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_align_both_directions() {
        let mut a = SymmetricAlignment::new(3, 2);
        a.add_align(2, 1).unwrap();
        assert!(a.is_aligned(2, 1));
        assert!(!a.is_aligned(1, 2));
        assert!(a.f2e(2).unwrap().contains(&1));
        assert!(a.e2f(1).unwrap().contains(&2));
    }

    #[test]
    fn test_duplicate_link_counted_once() {
        let mut a = SymmetricAlignment::new(2, 2);
        a.add_align(0, 0).unwrap();
        a.add_align(0, 0).unwrap();
        assert_eq!(a.link_count(), 1);
    }

    #[test]
    fn test_add_align_out_of_range() {
        let mut a = SymmetricAlignment::new(2, 2);
        assert!(matches!(
            a.add_align(2, 0),
            Err(GridError::OutOfRange { f: 2, .. })
        ));
    }

    #[test]
    fn test_from_pairs() {
        let a = SymmetricAlignment::from_pairs(3, 3, "0-0 1-2  2-1\n").unwrap();
        assert_eq!(a.link_count(), 3);
        assert!(a.is_aligned(1, 2));
        assert_eq!(a.f_len(), 3);
        assert_eq!(a.e_len(), 3);
    }

    #[test]
    fn test_from_pairs_malformed() {
        assert!(matches!(
            SymmetricAlignment::from_pairs(3, 3, "0-0 12"),
            Err(GridError::Alignment(_))
        ));
        assert!(SymmetricAlignment::from_pairs(3, 3, "a-1").is_err());
        assert!(SymmetricAlignment::from_pairs(3, 3, "0-7").is_err());
    }

    #[test]
    fn test_empty_pairs() {
        let a = SymmetricAlignment::from_pairs(2, 4, "").unwrap();
        assert_eq!(a.link_count(), 0);
        assert!(!a.is_aligned(0, 0));
    }
}
