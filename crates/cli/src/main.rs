use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use maxrect::grid::{draw_bernoulli, BernoulliCfg, ReplayToken};
use maxrect::skyline::maximal_rectangle;

mod matrix_file;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Maximal-rectangle runner and matrix generator")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the maximal-rectangle search on a grid file
    Run {
        /// Input grid file (whitespace-separated 0/1 rows)
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON result path; provenance is written alongside
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a random Bernoulli grid file
    Gen {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Probability of a 1-cell
        #[arg(long, default_value_t = 0.5)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw index under the same seed
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct RunResult {
    nrows: usize,
    ncols: usize,
    area: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out } => run(&input, out.as_deref(), cmd.tag),
        Action::Gen {
            rows,
            cols,
            density,
            seed,
            index,
            out,
        } => gen(rows, cols, density, seed, index, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(input: &Path, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    let matrix = matrix_file::read_matrix(input)?;
    let area = maximal_rectangle(&matrix);
    tracing::info!(
        input = %input.display(),
        nrows = matrix.nrows(),
        ncols = matrix.ncols(),
        area,
        "run"
    );
    println!("{area}");

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let result = RunResult {
            nrows: matrix.nrows(),
            ncols: matrix.ncols(),
            area,
        };
        std::fs::write(out, serde_json::to_vec_pretty(&result)?)?;
        provenance::write_sidecar(
            out,
            json!({
                "tag": tag,
                "input": input.to_string_lossy(),
                "nrows": matrix.nrows(),
                "ncols": matrix.ncols(),
            }),
        )?;
    }
    Ok(())
}

fn gen(
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
    index: u64,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(rows, cols, density, seed, index, out = %out.display(), "gen");
    let matrix = draw_bernoulli(
        rows,
        cols,
        BernoulliCfg { density },
        ReplayToken::new(seed, index),
    );
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    matrix_file::write_matrix(out, &matrix)?;
    provenance::write_sidecar(
        out,
        json!({
            "tag": tag,
            "rows": rows,
            "cols": cols,
            "density": density,
            "seed": seed,
            "index": index,
        }),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "tool_version": maxrect::VERSION,
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
