// ─────────────────────────────────────────────────────────────────────
// Algrid — Phrase Span
// ─────────────────────────────────────────────────────────────────────
//! Bounding box of a candidate bilingual phrase pair.
//!
//! Indices are 0-based and inclusive on both ends. `f` is the source side,
//! `e` the target side.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Read access to a span's bounding box.
///
/// Implemented by [`PhraseSpan`]; extraction pipelines that carry richer
/// phrase records implement it for their own type and hand those to the
/// grid directly. Implementors must uphold `f_start <= f_end` and
/// `e_start <= e_end`.
pub trait SpanBounds {
    fn f_start(&self) -> usize;
    fn f_end(&self) -> usize;
    fn e_start(&self) -> usize;
    fn e_end(&self) -> usize;

    /// Number of source positions covered.
    fn f_width(&self) -> usize {
        self.f_end() - self.f_start() + 1
    }

    /// Number of target positions covered.
    fn e_width(&self) -> usize {
        self.e_end() - self.e_start() + 1
    }

    /// Whether `(f, e)` lies inside the box.
    fn contains(&self, f: usize, e: usize) -> bool {
        (self.f_start()..=self.f_end()).contains(&f) && (self.e_start()..=self.e_end()).contains(&e)
    }
}

/// Immutable phrase-pair bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct PhraseSpan {
    f_start: usize,
    f_end: usize,
    e_start: usize,
    e_end: usize,
}

impl PhraseSpan {
    /// Build a span, rejecting inverted ranges.
    pub fn new(f_start: usize, f_end: usize, e_start: usize, e_end: usize) -> GridResult<Self> {
        if f_start > f_end {
            return Err(GridError::InvalidSpan(format!(
                "f_start {f_start} > f_end {f_end}"
            )));
        }
        if e_start > e_end {
            return Err(GridError::InvalidSpan(format!(
                "e_start {e_start} > e_end {e_end}"
            )));
        }
        Ok(Self {
            f_start,
            f_end,
            e_start,
            e_end,
        })
    }
}

impl SpanBounds for PhraseSpan {
    #[inline]
    fn f_start(&self) -> usize {
        self.f_start
    }

    #[inline]
    fn f_end(&self) -> usize {
        self.f_end
    }

    #[inline]
    fn e_start(&self) -> usize {
        self.e_start
    }

    #[inline]
    fn e_end(&self) -> usize {
        self.e_end
    }
}

#[derive(Deserialize)]
struct RawSpan {
    f_start: usize,
    f_end: usize,
    e_start: usize,
    e_end: usize,
}

impl TryFrom<RawSpan> for PhraseSpan {
    type Error = GridError;

    fn try_from(raw: RawSpan) -> GridResult<Self> {
        Self::new(raw.f_start, raw.f_end, raw.e_start, raw.e_end)
    }
}
