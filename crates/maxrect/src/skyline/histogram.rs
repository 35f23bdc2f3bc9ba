//! Per-row histogram of consecutive-ones column heights.

use crate::grid::BinMatrix;

/// Column heights: for column `c`, the number of consecutive 1s ending at the
/// most recently accumulated row.
///
/// Invariants:
/// - `heights.len()` equals the matrix width it tracks.
/// - After accumulating row `r`, `heights[c]` is the run length of 1s in
///   column `c` spanning rows `r, r-1, ...` up to the first 0 or the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    pub heights: Vec<usize>,
}

impl Histogram {
    /// All-zero histogram of width `ncols` (state before any row).
    pub fn zeros(ncols: usize) -> Self {
        Self {
            heights: vec![0; ncols],
        }
    }

    /// Fold one matrix row into the heights, in place.
    ///
    /// A 1-cell extends the column's run; a 0-cell resets it. O(ncols) time,
    /// no allocation. Accumulating a zero row is idempotent (the result is
    /// all zeros whatever the prior state).
    pub fn accumulate_row(&mut self, matrix: &BinMatrix, row: usize) {
        debug_assert_eq!(self.heights.len(), matrix.ncols());
        for (c, h) in self.heights.iter_mut().enumerate() {
            if matrix.cell(row, c) == 1 {
                *h += 1;
            } else {
                *h = 0;
            }
        }
    }

    /// Reset to the all-zero state without reallocating.
    pub fn reset(&mut self) {
        self.heights.fill(0);
    }
}
