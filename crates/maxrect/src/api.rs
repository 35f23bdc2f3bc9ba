//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across experiments.

// Binary matrix data model
pub use crate::grid::{BinMatrix, GridError};
// Random matrices
pub use crate::grid::rand::{draw_bernoulli, BernoulliCfg, ReplayToken};
// Skyline kernel
pub use crate::skyline::{largest_rectangle_area, maximal_rectangle, Histogram};
