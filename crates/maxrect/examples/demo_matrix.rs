//! Timing probe for the reference 6×7 matrix.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does one
//!   maximal-rectangle evaluation take on a small matrix?" alongside the known
//!   answer (area 12) as a correctness check.
//!
//! Why this shape
//! - The 6×7 grid exercises every interesting case at once: a leading zero
//!   row, an interior hole that splits a run, equal-height column plateaus,
//!   and a trailing single-column spike.
//!
//! Code cross-refs: crates/maxrect/src/skyline/search.rs::maximal_rectangle

use std::time::Instant;

use maxrect::prelude::*;

fn main() {
    let matrix = reference_matrix();
    assert_eq!(matrix.nrows(), 6);
    assert_eq!(matrix.ncols(), 7);

    let start = Instant::now();
    let area = maximal_rectangle(&matrix);
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    assert_eq!(area, 12, "rows 3-4 × columns 0-5 are the best all-ones block");
    println!("matrix: {}x{}", matrix.nrows(), matrix.ncols());
    println!("maximal all-ones rectangle area: {area}");
    println!("elapsed: {elapsed_us:.2} us");
}

fn reference_matrix() -> BinMatrix {
    BinMatrix::from_rows(&[
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 1, 1, 0],
        vec![1, 1, 0, 0, 1, 1, 0],
        vec![1, 1, 1, 1, 1, 1, 0],
        vec![1, 1, 1, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 1, 0],
    ])
    .expect("reference matrix is well-formed")
}
