// ─────────────────────────────────────────────────────────────────────
// Algrid — Grid Renderer
// ─────────────────────────────────────────────────────────────────────
//! Plain-text dump of an alignment grid for eyeballing extraction runs.
//!
//! ```text
//! +---------+
//! |1x  .  . |  0 the
//! | . #x  . |  1 house
//! | .  .  x |  2 is
//! +---------+
//!   0  1  2
//! 0=la 1=maison 2=est
//! ```
//!
//! Each cell prints two characters: a phrase marker and an alignment
//! marker. `x` is a word link, `.` an unaligned pair. Cells inside the
//! highlighted span print `#` (and `#` again when unaligned). Around the
//! highlighted span, `1`/`2`/`3`/`4` flag cells holding the bottom-right,
//! top-right, bottom-left or top-left corner of a consistent span lying
//! NW, SW, NE or SE of it.
//!
//! Only the public read API of [`AlignmentGrid`] is used.

use std::fmt;

use algrid_types::{GridError, GridResult, PhraseSpan, RelativePos, SpanBounds};

use crate::alignment::WordAlignment;
use crate::grid::AlignmentGrid;

const SYM_CORNER: char = '+';
const SYM_VERT: char = '|';
const SYM_HORIZ: char = '-';
const SYM_UNALIGNED: char = '.';
const SYM_PHRASE: char = '#';
const SYM_ALIGNED: char = 'x';

/// Builder for a textual grid dump.
pub struct GridRenderer<'a, S, A: ?Sized> {
    grid: &'a AlignmentGrid<S>,
    alignment: &'a A,
    highlight: Option<PhraseSpan>,
    title: Option<&'a str>,
    e_words: &'a [&'a str],
    f_words: &'a [&'a str],
}

impl<'a, S, A: WordAlignment + ?Sized> GridRenderer<'a, S, A> {
    pub fn new(grid: &'a AlignmentGrid<S>, alignment: &'a A) -> Self {
        Self {
            grid,
            alignment,
            highlight: None,
            title: None,
            e_words: &[],
            f_words: &[],
        }
    }

    /// Draw `span` as a filled box and mark its diagonal neighbours.
    pub fn with_span<T: SpanBounds + ?Sized>(mut self, span: &T) -> GridResult<Self> {
        self.highlight = Some(PhraseSpan::new(
            span.f_start(),
            span.f_end(),
            span.e_start(),
            span.e_end(),
        )?);
        Ok(self)
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Target words label the rows, source words go in the legend.
    pub fn with_words(mut self, e_words: &'a [&'a str], f_words: &'a [&'a str]) -> Self {
        self.e_words = e_words;
        self.f_words = f_words;
        self
    }

    /// Render the dump. Fails if the alignment does not cover the grid's
    /// current working rectangle.
    pub fn render(&self) -> GridResult<String> {
        let (f_len, e_len) = (self.grid.f_len(), self.grid.e_len());
        if self.alignment.f_len() != f_len || self.alignment.e_len() != e_len {
            return Err(GridError::Alignment(format!(
                "alignment is {}x{} but grid is {f_len}x{e_len}",
                self.alignment.f_len(),
                self.alignment.e_len()
            )));
        }
        Ok(self.to_string())
    }

    fn phrase_symbol(&self, span: &PhraseSpan, f: usize, e: usize) -> char {
        let pos = self.grid.relative_pos(span, f, e);
        if pos == RelativePos::I {
            return SYM_PHRASE;
        }
        if !self.grid.has_facing_corner(span, f, e).unwrap_or(false) {
            return ' ';
        }
        match pos {
            RelativePos::NW => '1',
            RelativePos::SW => '2',
            RelativePos::NE => '3',
            RelativePos::SE => '4',
            _ => ' ',
        }
    }

    fn border(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{SYM_CORNER}")?;
        for f in 0..self.grid.f_len() {
            if f > 0 {
                write!(out, "{SYM_HORIZ}")?;
            }
            write!(out, "{SYM_HORIZ}{SYM_HORIZ}")?;
        }
        writeln!(out, "{SYM_HORIZ}{SYM_CORNER}")
    }
}

impl<S, A: WordAlignment + ?Sized> fmt::Display for GridRenderer<'_, S, A> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (f_len, e_len) = (self.grid.f_len(), self.grid.e_len());

        if let Some(title) = self.title {
            writeln!(out, "{title}")?;
        }
        self.border(out)?;
        for e in 0..e_len {
            write!(out, "{SYM_VERT}")?;
            for f in 0..f_len {
                if f > 0 {
                    write!(out, " ")?;
                }
                let mut align_sym = if self.alignment.is_aligned(f, e) {
                    SYM_ALIGNED
                } else {
                    SYM_UNALIGNED
                };
                let phrase_sym = match &self.highlight {
                    Some(span) => self.phrase_symbol(span, f, e),
                    None => ' ',
                };
                if phrase_sym == SYM_PHRASE && align_sym == SYM_UNALIGNED {
                    align_sym = SYM_PHRASE;
                }
                write!(out, "{phrase_sym}{align_sym}")?;
            }
            write!(out, " {SYM_VERT} {e:2}")?;
            match self.e_words.get(e) {
                Some(word) => writeln!(out, " {word}")?,
                None => writeln!(out)?,
            }
        }
        self.border(out)?;

        write!(out, " ")?;
        for f in 0..f_len {
            if f > 0 {
                write!(out, " ")?;
            }
            write!(out, "{f:2}")?;
        }
        writeln!(out)?;

        if !self.f_words.is_empty() {
            let legend: Vec<String> = self
                .f_words
                .iter()
                .take(f_len)
                .enumerate()
                .map(|(f, word)| format!("{f}={word}"))
                .collect();
            writeln!(out, "{}", legend.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::SymmetricAlignment;
    use std::sync::Arc;

    #[test]
    fn test_plain_dump() {
        let mut grid: AlignmentGrid = AlignmentGrid::with_capacity(8).unwrap();
        grid.init(2, 2).unwrap();
        let alignment = SymmetricAlignment::from_pairs(2, 2, "0-0 1-1").unwrap();
        let text = GridRenderer::new(&grid, &alignment)
            .with_words(&["the", "house"], &["la", "maison"])
            .render()
            .unwrap();
        let expected = "\
+------+
| x  . |  0 the
| .  x |  1 house
+------+
  0  1
0=la 1=maison
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_highlight_and_neighbour_markers() {
        let mut grid: AlignmentGrid = AlignmentGrid::with_capacity(8).unwrap();
        grid.init(3, 3).unwrap();
        let centre = Arc::new(PhraseSpan::new(1, 1, 1, 1).unwrap());
        grid.add_span(PhraseSpan::new(0, 0, 0, 0).unwrap(), true).unwrap();
        grid.add_span(centre.clone(), true).unwrap();
        grid.add_corners_only(2, 2, 2, 2).unwrap();
        let alignment = SymmetricAlignment::from_pairs(3, 3, "0-0 1-1 2-2").unwrap();

        let text = GridRenderer::new(&grid, &alignment)
            .with_span(&*centre)
            .unwrap()
            .with_title("sentence 7")
            .render()
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "sentence 7");
        assert_eq!(lines[1], "+---------+");
        assert_eq!(lines[2], "|1x  .  . |  0");
        assert_eq!(lines[3], "| . #x  . |  1");
        assert_eq!(lines[4], "| .  . 4x |  2");
        assert_eq!(lines[5], "+---------+");
        assert_eq!(lines[6], "  0  1  2");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_unaligned_inside_span_is_filled() {
        let mut grid: AlignmentGrid = AlignmentGrid::with_capacity(8).unwrap();
        grid.init(1, 2).unwrap();
        let alignment = SymmetricAlignment::from_pairs(2, 1, "0-0").unwrap();
        let span = PhraseSpan::new(0, 1, 0, 0).unwrap();
        let text = GridRenderer::new(&grid, &alignment)
            .with_span(&span)
            .unwrap()
            .render()
            .unwrap();
        assert!(text.contains("|#x ## |  0"));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut grid: AlignmentGrid = AlignmentGrid::with_capacity(8).unwrap();
        grid.init(2, 3).unwrap();
        let alignment = SymmetricAlignment::new(2, 2);
        let err = GridRenderer::new(&grid, &alignment).render().unwrap_err();
        assert!(matches!(err, GridError::Alignment(_)));
    }
}
