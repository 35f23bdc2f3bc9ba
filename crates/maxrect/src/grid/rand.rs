//! Random binary matrices (Bernoulli cells + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for 0/1 matrices used by the
//!   benchmarks, the CLI `gen` command, and randomized tests. Draws are
//!   reproducible and indexable via a replay token `(seed, index)` mixed into
//!   a single RNG.
//!
//! Code cross-refs: `BinMatrix`, `crate::skyline::maximal_rectangle`

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::BinMatrix;

/// Bernoulli sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct BernoulliCfg {
    /// Probability of a 1-cell. Clamped to [0, 1].
    pub density: f64,
}

impl Default for BernoulliCfg {
    fn default() -> Self {
        Self { density: 0.5 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a `nrows × ncols` binary matrix with i.i.d. Bernoulli cells.
///
/// A zero dimension yields the 0×0 matrix (keeps the `BinMatrix` invariant
/// that a positive row count implies positive width).
pub fn draw_bernoulli(nrows: usize, ncols: usize, cfg: BernoulliCfg, tok: ReplayToken) -> BinMatrix {
    if nrows == 0 || ncols == 0 {
        return BinMatrix::from_raw(DMatrix::zeros(0, 0));
    }
    let p = cfg.density.clamp(0.0, 1.0);
    let mut rng = tok.to_std_rng();
    // Row-major draw order so the stream matches how grid files read.
    let data: Vec<u8> = (0..nrows * ncols)
        .map(|_| u8::from(rng.gen_bool(p)))
        .collect();
    BinMatrix::from_raw(DMatrix::from_row_slice(nrows, ncols, &data))
}
