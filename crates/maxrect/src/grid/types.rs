//! Binary matrix type and boundary validation.
//!
//! - `BinMatrix`: rectangular 0/1 matrix over `nalgebra::DMatrix<u8>`.
//! - `GridError`: fail-fast rejection of ragged rows and non-binary cells.
//!
//! The `skyline` kernel is total over well-formed matrices; validation lives
//! here so nothing downstream re-checks cells.

use nalgebra::DMatrix;

/// Matrix construction errors. Rejected at the boundary, never coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("matrix has {nrows} rows of zero length")]
    EmptyRows { nrows: usize },

    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("flat data holds {got} cells, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Rectangular binary matrix.
///
/// Invariants:
/// - Every cell is 0 or 1.
/// - All rows share the same length.
/// - `nrows > 0` implies `ncols > 0` (no degenerate zero-width rows).
#[derive(Clone, Debug, PartialEq)]
pub struct BinMatrix {
    cells: DMatrix<u8>,
}

impl BinMatrix {
    /// Build from row vectors. The first row fixes the column count.
    ///
    /// An empty slice yields the 0×0 matrix.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Ok(Self {
                cells: DMatrix::zeros(0, 0),
            });
        }
        let ncols = rows[0].len();
        if ncols == 0 {
            return Err(GridError::EmptyRows { nrows: rows.len() });
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected: ncols,
                    got: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                if v > 1 {
                    return Err(GridError::InvalidCell {
                        row: r,
                        col: c,
                        value: v,
                    });
                }
            }
        }
        Ok(Self {
            cells: DMatrix::from_fn(rows.len(), ncols, |r, c| rows[r][c]),
        })
    }

    /// Build from flat row-major data of length `nrows * ncols`.
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[u8]) -> Result<Self, GridError> {
        if nrows > 0 && ncols == 0 {
            return Err(GridError::EmptyRows { nrows });
        }
        if data.len() != nrows * ncols {
            return Err(GridError::LengthMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        for (k, &v) in data.iter().enumerate() {
            if v > 1 {
                return Err(GridError::InvalidCell {
                    row: k / ncols,
                    col: k % ncols,
                    value: v,
                });
            }
        }
        Ok(Self {
            cells: DMatrix::from_row_slice(nrows, ncols, data),
        })
    }

    /// Internal constructor for callers that uphold the invariants themselves
    /// (the Bernoulli sampler emits only 0/1 cells).
    pub(crate) fn from_raw(cells: DMatrix<u8>) -> Self {
        debug_assert!(cells.iter().all(|&v| v <= 1));
        Self { cells }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.nrows() == 0
    }

    /// Cell value (0 or 1). Panics when out of bounds, like `DMatrix` indexing.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[(row, col)]
    }

    /// Count of 1-cells in the whole matrix. Upper bound context for areas.
    pub fn ones(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }
}
