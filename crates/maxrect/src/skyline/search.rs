//! Row driver: fold the matrix into per-row histograms and track the best area.

use crate::grid::BinMatrix;

use super::histogram::Histogram;
use super::stack::largest_rectangle_area;

/// Area of the largest axis-aligned all-ones rectangle in `matrix`.
///
/// Rows are consumed top to bottom; each row refreshes the column histogram
/// and contributes one largest-rectangle-in-histogram evaluation. The running
/// maximum is monotone in the rows consumed. O(nrows × ncols) time,
/// O(ncols) auxiliary space.
///
/// Rows must be processed strictly in order (each histogram depends on the
/// previous row's), so there is no intra-call parallelism to exploit here.
pub fn maximal_rectangle(matrix: &BinMatrix) -> usize {
    if matrix.nrows() == 0 {
        return 0;
    }
    let mut histogram = Histogram::zeros(matrix.ncols());
    let mut best = 0usize;
    for row in 0..matrix.nrows() {
        histogram.accumulate_row(matrix, row);
        best = best.max(largest_rectangle_area(&histogram.heights));
    }
    best
}
