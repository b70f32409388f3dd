// ─────────────────────────────────────────────────────────────────────
// Algrid — Alignment Grid
// ─────────────────────────────────────────────────────────────────────
//! Consistency-marking grid over a word-aligned sentence pair.
//!
//! Columns are source positions `f`, rows are target positions `e`. For
//! each span the caller judged alignment-consistent, the grid records the
//! span at the four cells under its four corners. Extraction logic then
//! finds diagonally adjacent consistent spans by looking one step past a
//! span's corner for the opposite corner role.
//!
//! # Lifecycle
//!
//! The `capacity × capacity` cell matrix is allocated once and reused for
//! every sentence pair. `init` resets only the `F × E` working rectangle;
//! cells outside it may hold stale markers from a larger sentence, which
//! is why every accessor is bounds-checked against the current rectangle.

use std::sync::Arc;

use algrid_types::{
    Corner, GridConfig, GridError, GridResult, PhraseSpan, RelativePos, SpanBounds, MAX_SENT_LEN,
};

use crate::cell::GridCell;

/// Fixed-capacity alignment grid, reused across sentence pairs.
///
/// Not thread-safe for mutation: one grid per worker.
#[derive(Debug)]
pub struct AlignmentGrid<S = PhraseSpan> {
    capacity: usize,
    f_len: usize,
    e_len: usize,
    /// Row-major by `f`: cell `(f, e)` lives at `f * capacity + e`.
    cells: Vec<GridCell<S>>,
    spans: Vec<Arc<S>>,
}

impl<S> Default for AlignmentGrid<S> {
    fn default() -> Self {
        Self::allocate(MAX_SENT_LEN, GridConfig::default().span_capacity)
    }
}

impl<S> AlignmentGrid<S> {
    /// Allocate a grid sized by `config`. The working rectangle starts
    /// empty; call [`init`](Self::init) before inserting spans.
    pub fn new(config: &GridConfig) -> GridResult<Self> {
        config.validate()?;
        Ok(Self::allocate(config.max_sentence_len, config.span_capacity))
    }

    /// Allocate a grid with the given matrix side and default span capacity.
    pub fn with_capacity(max_sentence_len: usize) -> GridResult<Self> {
        Self::new(&GridConfig {
            max_sentence_len,
            ..Default::default()
        })
    }

    pub(crate) fn allocate(capacity: usize, span_capacity: usize) -> Self {
        log::debug!("AlignmentGrid: allocating {capacity}x{capacity} cells");
        let mut cells = Vec::with_capacity(capacity * capacity);
        cells.resize_with(capacity * capacity, GridCell::default);
        Self {
            capacity,
            f_len: 0,
            e_len: 0,
            cells,
            spans: Vec::with_capacity(span_capacity),
        }
    }

    /// Start a new sentence pair of target length `e_len` and source
    /// length `f_len`.
    ///
    /// Fails with `SentenceTooLong` if either side reaches the capacity;
    /// the grid is left untouched in that case.
    pub fn init(&mut self, e_len: usize, f_len: usize) -> GridResult<()> {
        if e_len >= self.capacity || f_len >= self.capacity {
            log::warn!(
                "AlignmentGrid: rejecting sentence pair f_len={f_len} e_len={e_len} (capacity {})",
                self.capacity
            );
            return Err(GridError::SentenceTooLong {
                e_len,
                f_len,
                max: self.capacity,
            });
        }
        self.e_len = e_len;
        self.f_len = f_len;
        self.spans.clear();
        for f in 0..f_len {
            let row = f * self.capacity;
            for cell in &mut self.cells[row..row + e_len] {
                cell.reset();
            }
        }
        Ok(())
    }

    /// Source length of the current sentence pair.
    pub fn f_len(&self) -> usize {
        self.f_len
    }

    /// Target length of the current sentence pair.
    pub fn e_len(&self) -> usize {
        self.e_len
    }

    /// Side of the backing matrix.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All spans passed to [`add_span`](Self::add_span) since the last
    /// `init`, in insertion order, consistent or not.
    pub fn spans(&self) -> &[Arc<S>] {
        &self.spans
    }

    /// Corner state at `(f, e)`.
    pub fn cell_at(&self, f: usize, e: usize) -> GridResult<&GridCell<S>> {
        self.check_point(f, e)?;
        Ok(&self.cells[self.index(f, e)])
    }

    /// Mark only the four corner flags of a box, without storing a span
    /// or listing it.
    pub fn add_corners_only(
        &mut self,
        f_start: usize,
        f_end: usize,
        e_start: usize,
        e_end: usize,
    ) -> GridResult<()> {
        let bounds = PhraseSpan::new(f_start, f_end, e_start, e_end)?;
        self.check_span(&bounds)?;
        for corner in Corner::ALL {
            let (f, e) = corner.of(&bounds);
            let idx = self.index(f, e);
            self.cells[idx].set(corner, true);
        }
        Ok(())
    }

    /// Classify `(f, e)` against `span`. Does not consult grid state.
    pub fn relative_pos<T: SpanBounds + ?Sized>(
        &self,
        span: &T,
        f: usize,
        e: usize,
    ) -> RelativePos {
        RelativePos::classify(span, f, e)
    }

    /// Whether the cell at `(f, e)` carries the corner marker that a
    /// diagonal neighbour of `span` in that direction would leave there.
    /// Always false for points not diagonal to `span`.
    pub fn has_facing_corner<T: SpanBounds + ?Sized>(
        &self,
        span: &T,
        f: usize,
        e: usize,
    ) -> GridResult<bool> {
        let cell = self.cell_at(f, e)?;
        Ok(RelativePos::classify(span, f, e)
            .facing_corner()
            .map_or(false, |corner| cell.has(corner)))
    }

    /// Spans recorded at `(f, e)` under the corner role facing `span`.
    /// Empty for points not diagonal to `span`.
    pub fn facing_spans<T: SpanBounds + ?Sized>(
        &self,
        span: &T,
        f: usize,
        e: usize,
    ) -> GridResult<&[Arc<S>]> {
        let cell = self.cell_at(f, e)?;
        Ok(match RelativePos::classify(span, f, e).facing_corner() {
            Some(corner) => cell.spans(corner),
            None => &[],
        })
    }

    /// Consistent spans touching `span` corner-to-corner, one step away
    /// on each diagonal. These are the candidates for concatenation into
    /// a larger phrase pair.
    pub fn diagonal_neighbours<T: SpanBounds + ?Sized>(
        &self,
        span: &T,
    ) -> GridResult<Vec<(RelativePos, Arc<S>)>> {
        self.check_span(span)?;
        let west = span.f_start().checked_sub(1);
        let north = span.e_start().checked_sub(1);
        let east = Some(span.f_end() + 1).filter(|&f| f < self.f_len);
        let south = Some(span.e_end() + 1).filter(|&e| e < self.e_len);

        let probes = [
            (RelativePos::NW, west, north),
            (RelativePos::NE, east, north),
            (RelativePos::SW, west, south),
            (RelativePos::SE, east, south),
        ];

        let mut out = Vec::new();
        for (pos, f, e) in probes {
            let (Some(f), Some(e)) = (f, e) else {
                continue;
            };
            out.extend(
                self.facing_spans(span, f, e)?
                    .iter()
                    .map(|s| (pos, Arc::clone(s))),
            );
        }
        Ok(out)
    }

    #[inline]
    fn index(&self, f: usize, e: usize) -> usize {
        f * self.capacity + e
    }

    fn check_point(&self, f: usize, e: usize) -> GridResult<()> {
        if f >= self.f_len || e >= self.e_len {
            return Err(GridError::OutOfRange {
                f,
                e,
                f_len: self.f_len,
                e_len: self.e_len,
            });
        }
        Ok(())
    }

    fn check_span<T: SpanBounds + ?Sized>(&self, span: &T) -> GridResult<()> {
        if span.f_start() > span.f_end() || span.e_start() > span.e_end() {
            return Err(GridError::InvalidSpan(format!(
                "f=[{}, {}] e=[{}, {}]",
                span.f_start(),
                span.f_end(),
                span.e_start(),
                span.e_end()
            )));
        }
        self.check_point(span.f_end(), span.e_end())
    }
}

impl<S: SpanBounds> AlignmentGrid<S> {
    /// Add a span judged by the caller against the word alignment.
    ///
    /// Consistent spans are recorded at their four corner cells. Every
    /// span, consistent or not, is appended to [`spans`](Self::spans);
    /// callers that only want consistent spans filter the list themselves.
    pub fn add_span(&mut self, span: impl Into<Arc<S>>, is_consistent: bool) -> GridResult<()> {
        let span = span.into();
        self.check_span(&*span)?;
        if is_consistent {
            for corner in Corner::ALL {
                let (f, e) = corner.of(&*span);
                let idx = self.index(f, e);
                self.cells[idx].add(corner, Arc::clone(&span));
            }
        }
        self.spans.push(span);
        Ok(())
    }
}
