//! Maximal all-ones rectangle via per-row histograms and a monotonic stack.
//!
//! Purpose
//! - Reduce the 2D "largest all-ones rectangle" search over a binary matrix
//!   to one 1D largest-rectangle-in-histogram problem per row, solved with an
//!   amortized O(ncols) monotonic index stack.
//!
//! Why this design
//! - The per-column consecutive-ones count is a one-pass, in-place transform
//!   of the previous row's histogram, so the whole search runs in
//!   O(nrows × ncols) time and O(ncols) space.
//! - The stack pass finds, for each column, the widest window in which that
//!   column's height is the limiting one, without any per-window rescan.
//!
//! Code cross-refs: `histogram::Histogram`, `stack::largest_rectangle_area`,
//! `search::maximal_rectangle`, `crate::grid::BinMatrix`

mod histogram;
mod search;
mod stack;

pub use histogram::Histogram;
pub use search::maximal_rectangle;
pub use stack::largest_rectangle_area;
