// ─────────────────────────────────────────────────────────────────────
// Algrid — Alignment Grid Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Span, corner-role, configuration and error types for the
//! consistency-marking alignment grid used in phrase-pair extraction.

pub mod config;
pub mod error;
pub mod geometry;
pub mod span;

pub use config::{GridConfig, MAX_SENT_LEN};
pub use error::{GridError, GridResult};
pub use geometry::{Corner, RelativePos};
pub use span::{PhraseSpan, SpanBounds};
