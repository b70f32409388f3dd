// ─────────────────────────────────────────────────────────────────────
// Algrid — Grid Pool
// ─────────────────────────────────────────────────────────────────────
//! Checkout pool of pre-allocated grids for corpus-parallel extraction.
//!
//! A grid is never shared: a worker checks one out, owns it for as many
//! sentence pairs as it likes, and gives it back. The pool only spares
//! each new worker the `capacity²` allocation.

use parking_lot::Mutex;

use algrid_types::{GridConfig, GridResult, PhraseSpan};

use crate::grid::AlignmentGrid;

/// Thread-safe: the idle list is guarded by a `parking_lot::Mutex`.
pub struct GridPool<S = PhraseSpan> {
    config: GridConfig,
    idle: Mutex<Vec<AlignmentGrid<S>>>,
}

impl<S> GridPool<S> {
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let idle = Vec::with_capacity(config.pool_max_idle);
        Ok(Self {
            config,
            idle: Mutex::new(idle),
        })
    }

    /// Take an idle grid, or allocate a fresh one if none is left.
    ///
    /// The grid comes back in whatever epoch its last user left it;
    /// call `init` before use.
    pub fn checkout(&self) -> AlignmentGrid<S> {
        if let Some(grid) = self.idle.lock().pop() {
            return grid;
        }
        log::debug!(
            "GridPool: no idle grid, allocating capacity {}",
            self.config.max_sentence_len
        );
        AlignmentGrid::allocate(self.config.max_sentence_len, self.config.span_capacity)
    }

    /// Return a grid to the pool. Grids of a different capacity, or
    /// beyond `pool_max_idle`, are dropped.
    pub fn give_back(&self, grid: AlignmentGrid<S>) {
        if grid.capacity() != self.config.max_sentence_len {
            log::warn!(
                "GridPool: dropping foreign grid of capacity {} (pool uses {})",
                grid.capacity(),
                self.config.max_sentence_len
            );
            return;
        }
        let mut idle = self.idle.lock();
        if idle.len() >= self.config.pool_max_idle {
            log::warn!(
                "GridPool: {} grids already idle, dropping returned grid",
                idle.len()
            );
            return;
        }
        idle.push(grid);
    }

    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn small_pool(max_idle: usize) -> GridPool {
        GridPool::new(GridConfig {
            max_sentence_len: 8,
            span_capacity: 16,
            pool_max_idle: max_idle,
        })
        .unwrap()
    }

    #[test]
    fn test_checkout_allocates_when_empty() {
        let pool = small_pool(2);
        assert_eq!(pool.idle_count(), 0);
        let grid = pool.checkout();
        assert_eq!(grid.capacity(), 8);
    }

    #[test]
    fn test_give_back_is_reused() {
        let pool = small_pool(2);
        let mut grid = pool.checkout();
        grid.init(3, 3).unwrap();
        grid.add_span(PhraseSpan::new(0, 2, 0, 2).unwrap(), true).unwrap();
        pool.give_back(grid);
        assert_eq!(pool.idle_count(), 1);

        let mut again = pool.checkout();
        assert_eq!(pool.idle_count(), 0);
        // Still in the old epoch until re-initialised.
        assert_eq!(again.spans().len(), 1);
        again.init(2, 2).unwrap();
        assert!(again.spans().is_empty());
        assert!(again.cell_at(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_idle_limit() {
        let pool = small_pool(1);
        let a = pool.checkout();
        let b = pool.checkout();
        pool.give_back(a);
        pool.give_back(b);
        assert_eq!(pool.idle_count(), 1);
    }

    #[test]
    fn test_foreign_capacity_dropped() {
        let pool = small_pool(2);
        pool.give_back(AlignmentGrid::with_capacity(4).unwrap());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GridConfig {
            pool_max_idle: 0,
            ..Default::default()
        };
        assert!(GridPool::<PhraseSpan>::new(config).is_err());
    }

    #[test]
    fn test_workers_own_their_grids() {
        let pool = Arc::new(small_pool(4));
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let pool = Arc::clone(&pool);
                std::thread::spawn(move || {
                    let mut grid = pool.checkout();
                    for len in 1..6 {
                        grid.init(len, len).unwrap();
                        let last = len - 1;
                        let span = PhraseSpan::new(0, last, 0, last).unwrap();
                        grid.add_span(span, worker % 2 == 0).unwrap();
                        assert_eq!(grid.spans().len(), 1);
                    }
                    pool.give_back(grid);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(pool.idle_count() <= 4);
        assert!(pool.idle_count() >= 1);
    }
}
