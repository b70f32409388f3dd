// ─────────────────────────────────────────────────────────────────────
// Algrid — Grid Cell (Corner Slots)
// ─────────────────────────────────────────────────────────────────────
//! Per-coordinate state of the alignment grid.
//!
//! A cell has four fixed corner slots. Each slot holds a presence flag
//! and the spans recorded under that corner role, in insertion order.
//! Spans are shared by `Arc`, so the same span can sit in four cells.

use std::sync::Arc;

use algrid_types::Corner;

/// Flag plus span list for one corner role.
#[derive(Debug)]
pub struct CornerSlot<S> {
    present: bool,
    spans: Vec<Arc<S>>,
}

impl<S> Default for CornerSlot<S> {
    fn default() -> Self {
        Self {
            present: false,
            spans: Vec::new(),
        }
    }
}

impl<S> CornerSlot<S> {
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn spans(&self) -> &[Arc<S>] {
        &self.spans
    }

    fn push(&mut self, span: Arc<S>) {
        self.present = true;
        self.spans.push(span);
    }

    /// Clears flag and spans. Keeps the allocation for the next sentence.
    fn reset(&mut self) {
        self.present = false;
        self.spans.clear();
    }
}

/// One cell of the alignment grid.
#[derive(Debug)]
pub struct GridCell<S> {
    slots: [CornerSlot<S>; 4],
}

impl<S> Default for GridCell<S> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| CornerSlot::default()),
        }
    }
}

impl<S> GridCell<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, corner: Corner) -> &CornerSlot<S> {
        &self.slots[corner.index()]
    }

    /// Whether any span (or bare corner marker) was recorded as `corner` here.
    pub fn has(&self, corner: Corner) -> bool {
        self.slot(corner).is_present()
    }

    /// Spans recorded under `corner`, oldest first.
    pub fn spans(&self, corner: Corner) -> &[Arc<S>] {
        self.slot(corner).spans()
    }

    /// Record `span` under `corner` and raise its flag.
    pub fn add(&mut self, corner: Corner, span: Arc<S>) {
        self.slots[corner.index()].push(span);
    }

    /// Set the presence flag without storing a span.
    pub fn set(&mut self, corner: Corner, present: bool) {
        self.slots[corner.index()].present = present;
    }

    /// True if no corner flag is raised.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.present)
    }

    pub fn has_top_left(&self) -> bool {
        self.has(Corner::TopLeft)
    }

    pub fn has_top_right(&self) -> bool {
        self.has(Corner::TopRight)
    }

    pub fn has_bottom_left(&self) -> bool {
        self.has(Corner::BottomLeft)
    }

    pub fn has_bottom_right(&self) -> bool {
        self.has(Corner::BottomRight)
    }

    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algrid_types::PhraseSpan;

    #[test]
    fn test_new_cell_is_empty() {
        let cell: GridCell<PhraseSpan> = GridCell::new();
        assert!(cell.is_empty());
        for corner in Corner::ALL {
            assert!(!cell.has(corner));
            assert!(cell.spans(corner).is_empty());
        }
    }

    #[test]
    fn test_add_raises_only_its_flag() {
        let mut cell = GridCell::new();
        let span = Arc::new(PhraseSpan::new(0, 1, 0, 1).unwrap());
        cell.add(Corner::TopRight, span.clone());
        assert!(cell.has_top_right());
        assert!(!cell.has_top_left());
        assert!(!cell.has_bottom_left());
        assert!(!cell.has_bottom_right());
        assert!(Arc::ptr_eq(&cell.spans(Corner::TopRight)[0], &span));
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let mut cell = GridCell::new();
        let a = Arc::new(PhraseSpan::new(0, 0, 0, 0).unwrap());
        let b = Arc::new(PhraseSpan::new(0, 2, 0, 0).unwrap());
        cell.add(Corner::TopLeft, a.clone());
        cell.add(Corner::TopLeft, b.clone());
        cell.add(Corner::TopLeft, a.clone());
        let spans = cell.spans(Corner::TopLeft);
        assert_eq!(spans.len(), 3);
        assert!(Arc::ptr_eq(&spans[0], &a));
        assert!(Arc::ptr_eq(&spans[1], &b));
        assert!(Arc::ptr_eq(&spans[2], &a));
    }

    #[test]
    fn test_set_flag_stores_nothing() {
        let mut cell: GridCell<PhraseSpan> = GridCell::new();
        cell.set(Corner::BottomLeft, true);
        assert!(cell.has_bottom_left());
        assert!(cell.spans(Corner::BottomLeft).is_empty());
        cell.set(Corner::BottomLeft, false);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut cell = GridCell::new();
        let span = Arc::new(PhraseSpan::new(1, 1, 1, 1).unwrap());
        for corner in Corner::ALL {
            cell.add(corner, span.clone());
        }
        assert_eq!(Arc::strong_count(&span), 5);
        cell.reset();
        assert!(cell.is_empty());
        assert!(Corner::ALL.iter().all(|&c| cell.spans(c).is_empty()));
        assert_eq!(Arc::strong_count(&span), 1);
    }
}
