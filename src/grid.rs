use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::lfsr::BitSequence;

/// Row-major panel layout. Cells hold 0 or 1; a 1 marks a hole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Panics if `row` is not below [`Grid::rows`].
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.cols)
    }

    pub fn view(&self) -> &[u8] {
        &self.cells
    }

    pub fn holes(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Lays `sequence` onto a fresh `rows x cols` grid in row-major order.
///
/// Bits past `rows * cols` are dropped. Cells past the end of the sequence stay 0.
pub fn map_to_grid(sequence: &BitSequence, rows: usize, cols: usize) -> Result<Grid> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions { rows, cols });
    }

    let mut grid = Grid::new(rows, cols);
    let used = sequence.len().min(grid.cells.len());
    grid.cells[..used].copy_from_slice(&sequence.bits()[..used]);
    debug!(
        "Mapped {} of {} bits onto {}x{} grid",
        used,
        sequence.len(),
        rows,
        cols
    );

    Ok(grid)
}
