//! Immutable symbol grid with defensive (column, row) lookup
//!
//! Rows are stored top to bottom in a rectangular array. Source rows may be
//! ragged; short rows are padded with blank so absent cells read as blank.
//! Lookups use the contribution graph numbering where row 0 is unused and
//! row `n` reads stored row `n - 1`.

use ndarray::Array2;

use crate::pattern::intensity::{BLANK, Intensity};

/// Pixel pattern addressed by (column, row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Array2<char>,
}

impl Pattern {
    /// Build a pattern from rows of symbols, padding short rows with blank
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        let mut cells = Array2::from_elem((rows.len(), width), BLANK);
        for (row_index, row) in rows.iter().enumerate() {
            for (column, symbol) in row.as_ref().chars().enumerate() {
                if let Some(cell) = cells.get_mut([row_index, column]) {
                    *cell = symbol;
                }
            }
        }

        Self { cells }
    }

    /// Parse newline separated art, ignoring one trailing newline
    pub fn parse(text: &str) -> Self {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let rows: Vec<&str> = text
            .split('\n')
            .map(|row| row.strip_suffix('\r').unwrap_or(row))
            .collect();
        Self::from_rows(&rows)
    }

    /// Build a pattern from typed intensity rows
    pub fn from_intensities(cells: &Array2<Intensity>) -> Self {
        Self {
            cells: cells.mapv(Intensity::symbol),
        }
    }

    /// Number of stored rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the widest row
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Symbol for a graph position, blank when the position is off the grid
    pub fn symbol_at(&self, column: u64, row: u64) -> char {
        let Some(stored_row) = row.checked_sub(1) else {
            return BLANK;
        };
        let (Ok(stored_row), Ok(column)) = (usize::try_from(stored_row), usize::try_from(column))
        else {
            return BLANK;
        };

        self.cells
            .get([stored_row, column])
            .copied()
            .unwrap_or(BLANK)
    }

    /// Stored row as a string, trailing padding included
    pub fn row_text(&self, stored_row: usize) -> Option<String> {
        (stored_row < self.rows()).then(|| self.cells.row(stored_row).iter().collect())
    }
}
