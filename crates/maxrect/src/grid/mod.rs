//! Binary matrix data model (validated boundary).
//!
//! Purpose
//! - Provide a single rectangular 0/1 matrix type (`BinMatrix`) whose
//!   constructors reject ragged rows and non-binary cells, so the skyline
//!   kernel can stay total and unguarded.
//! - Keep the API minimal (KISS, YAGNI): construction, shape queries, cell
//!   access, and a deterministic random sampler.
//!
//! Why strict-only
//! - The maximal-rectangle recurrence counts "consecutive ones"; coercing
//!   arbitrary nonzero values to truthy would silently change that meaning.
//!   Rejecting at the boundary keeps the kernel's contract exact.
//!
//! Code cross-refs: `crate::skyline`

pub mod rand;
mod types;

pub use rand::{draw_bernoulli, BernoulliCfg, ReplayToken};
pub use types::{BinMatrix, GridError};

#[cfg(test)]
mod tests;
