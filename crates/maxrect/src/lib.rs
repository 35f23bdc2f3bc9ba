//! Maximal all-ones rectangle search in binary matrices.
//!
//! Two cooperating stages, applied once per matrix row:
//! - `grid`: the validated rectangular 0/1 matrix type plus a deterministic
//!   random sampler.
//! - `skyline`: the per-row consecutive-ones histogram and the monotonic-stack
//!   largest-rectangle pass, folded over the rows by `maximal_rectangle`.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   clarity and better design over compatibility.

pub mod api;
pub mod grid;
pub mod skyline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use grid::{BinMatrix, GridError};
pub use skyline::{largest_rectangle_area, maximal_rectangle, Histogram};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{draw_bernoulli, BernoulliCfg, BinMatrix, GridError, ReplayToken};
    pub use crate::skyline::{largest_rectangle_area, maximal_rectangle, Histogram};
}
