// ─────────────────────────────────────────────────────────────────────
// Algrid — Alignment Grid Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Consistency-marking grid for phrase-pair extraction in statistical
//! machine translation training.
//!
//! For each word-aligned sentence pair the caller feeds candidate phrase
//! spans, each already judged consistent or not against the alignment.
//! Consistent spans leave markers at their four corner cells, so that a
//! later pass can find spans that touch corner-to-corner and concatenate
//! them into larger consistent phrase pairs.
//!
//! # Invariants
//!
//! 1. **Corner roles match the span box**: a span recorded as top-left at
//!    `(f, e)` has `f_start == f` and `e_start == e`, and likewise for the
//!    other three roles.
//!
//! 2. **Every `add_span` call is listed**: inconsistent spans skip the
//!    corner markers but still appear in `spans()`. `add_corners_only`
//!    never lists anything.
//!
//! 3. **No leakage across sentences**: `init` resets the working
//!    rectangle, and all accessors reject coordinates outside it, so stale
//!    markers from a longer sentence are never observed.
//!
//! 4. **One allocation per grid**: the cell matrix is sized once at
//!    construction; `init` only resets cells in place.

pub mod alignment;
pub mod cell;
pub mod grid;
pub mod pool;
pub mod render;

pub use alignment::{SymmetricAlignment, WordAlignment};
pub use cell::{CornerSlot, GridCell};
pub use grid::AlignmentGrid;
pub use pool::GridPool;
pub use render::GridRenderer;
