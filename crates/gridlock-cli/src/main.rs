//! Command-line driver for gridlock.
//!
//! Reads a puzzle from a file (or standard input), validates it, and streams
//! every solution to standard output in the block-diagram format, separated
//! by blank lines. Validation and I/O failures are reported on stderr with a
//! non-zero exit status.

use std::{
    fs,
    io::{self, Read as _, Write},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use gridlock_core::{Grid, ValidateError};
use gridlock_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file; reads standard input when omitted or `-`.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum RunError {
    #[display("reading puzzle: {_0}")]
    Io(io::Error),
    #[display("invalid puzzle: {_0}")]
    Validate(ValidateError),
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("gridlock: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let text = read_puzzle_text(args.puzzle.as_deref())?;
    let puzzle: Grid = text.parse()?;
    log::debug!("parsed puzzle with {} clues", puzzle.filled_count());

    let start = Instant::now();
    let count = write_solutions(&puzzle, io::stdout().lock())?;
    log::debug!("{count} solution(s) in {:?}", start.elapsed());
    Ok(())
}

fn read_puzzle_text(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Streams every solution of `puzzle` to `out`, each as a formatted grid
/// followed by a blank line. Returns the number of solutions found.
fn write_solutions<W: Write>(puzzle: &Grid, mut out: W) -> io::Result<usize> {
    let mut count = 0;
    for solution in solve(puzzle) {
        writeln!(out, "{solution}")?;
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}
