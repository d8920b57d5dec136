use anyhow::{Context, Result, bail};
use clap::Parser;
use slitherlink_solver::driver::{build_clauses, solve};
use slitherlink_solver::error::SlitherlinkError;
use slitherlink_solver::grid::Grid;
use slitherlink_solver::puzzle::ClueMatrix;
use slitherlink_solver::render::draw;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "SAT-based Slitherlink solver")]
#[command(propagate_version = true)]
struct Cli {
    /// Solve a puzzle from a file; mutually exclusive with --row/--col.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of rows to read from stdin in interactive mode.
    #[arg(long, value_name = "N", requires = "col")]
    row: Option<usize>,

    /// Number of columns to read from stdin in interactive mode.
    #[arg(long, value_name = "N", requires = "row")]
    col: Option<usize>,

    /// Request uniqueness verification; exits nonzero if a second model validates.
    #[arg(long)]
    verify: bool,

    /// Optional: write the generated CNF clauses to a DIMACS file.
    #[arg(long, value_name = "PATH")]
    cnf_file: Option<PathBuf>,
}

fn read_interactive(rows: usize) -> Result<ClueMatrix> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    let mut lines = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut line = String::new();
        handle
            .read_line(&mut line)
            .context("failed to read puzzle row from stdin")?;
        lines.push(line);
    }
    ClueMatrix::parse(&lines.join("\n")).map_err(anyhow::Error::from)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let clues = match (&cli.file, cli.row, cli.col) {
        (Some(path), None, None) => ClueMatrix::read_file(path)?,
        (None, Some(rows), Some(_cols)) => read_interactive(rows)?,
        (None, None, None) => bail!("one of --file or --row/--col is required"),
        _ => bail!("--file and --row/--col are mutually exclusive"),
    };

    let grid = Grid::new(clues.height, clues.width);
    let clauses = build_clauses(&grid, &clues)?;

    if let Some(path) = &cli.cnf_file {
        slitherlink_solver::write_clauses(path, &clauses)?;
    }

    match solve(&grid, &clauses, cli.verify) {
        Ok(solution) => {
            println!("{}", draw(&grid, &clues, &solution));
            Ok(())
        }
        Err(SlitherlinkError::NoSolution) => bail!("no solution found"),
        Err(SlitherlinkError::MultipleSolutions) => bail!("puzzle has multiple solutions"),
        Err(e) => Err(e.into()),
    }
}
