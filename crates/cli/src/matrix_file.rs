//! Plain-text grid files: whitespace-separated 0/1 cells, one matrix row per
//! line. Blank lines are skipped so files may end with a trailing newline.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maxrect::grid::BinMatrix;

/// Read and validate a grid file into a `BinMatrix`.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<BinMatrix> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_matrix(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse grid text. Cell validation (shape, 0/1) is done by `BinMatrix`.
pub fn parse_matrix(text: &str) -> Result<BinMatrix> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<u8> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<u8>()
                    .with_context(|| format!("line {}: bad cell {tok:?}", lineno + 1))
            })
            .collect::<Result<_>>()?;
        rows.push(row);
    }
    BinMatrix::from_rows(&rows).context("malformed matrix")
}

/// Write a matrix back out in the same grid format.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &BinMatrix) -> Result<()> {
    let path = path.as_ref();
    let mut text = String::with_capacity(matrix.nrows() * (2 * matrix.ncols() + 1));
    for r in 0..matrix.nrows() {
        for c in 0..matrix.ncols() {
            if c > 0 {
                text.push(' ');
            }
            text.push(if matrix.cell(r, c) == 1 { '1' } else { '0' });
        }
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_with_blank_lines() {
        let m = parse_matrix("1 0 1\n0 1 0\n\n").unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.cell(1, 1), 1);
    }

    #[test]
    fn rejects_bad_cells_and_ragged_rows() {
        assert!(parse_matrix("1 0\n2 0\n").is_err());
        assert!(parse_matrix("1 0\n1\n").is_err());
        assert!(parse_matrix("1 x\n").is_err());
    }

    #[test]
    fn roundtrips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.txt");
        let m = parse_matrix("1 1 0\n0 1 1\n").unwrap();
        write_matrix(&path, &m).unwrap();
        let back = read_matrix(&path).unwrap();
        assert_eq!(back, m);
    }
}
