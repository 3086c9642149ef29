#![allow(dead_code)]

use crate::solver::board::Board;
use crate::solver::grid::{as_line, parse_grid, render};
use crate::solver::search::{Engine, FirstOpen, MinimumRemaining, SolveStats};
use crate::solver::topology::Topology;
use crate::solver::validation::is_valid_solution;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the Sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "A diagonal Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `grid`, `file`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the Sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle given directly as an 81-character grid string.
    Grid {
        /// The grid in row-major order; '.' or '0' marks an unknown cell.
        #[arg(short, long)]
        grid: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle file. The file holds one 81-character grid per line;
    /// blank lines and lines starting with '#' are skipped.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every puzzle file in a directory (recursively).
    Dir {
        /// Path to the directory containing `.sudoku` or `.txt` puzzle files.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// The cell selection policy used when the search branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SelectionType {
    /// Branch on the cell with the fewest remaining candidates.
    #[default]
    MinRemaining,
    /// Branch on the first undetermined cell in row-major order.
    FirstOpen,
}

impl Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinRemaining => write!(f, "min-remaining"),
            Self::FirstOpen => write!(f, "first-open"),
        }
    }
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable verification of the found solution: every unit must contain
    /// each digit exactly once.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = true)]
    pub(crate) display: bool,

    /// Specifies the cell selection policy for the search.
    #[arg(long, value_enum, default_value_t = SelectionType::MinRemaining)]
    pub(crate) selection: SelectionType,
}

/// Parses the command line and dispatches to the matching handler.
pub(crate) fn run() {
    let cli = Cli::parse();

    // A bare path without a subcommand is treated as a puzzle file.
    if let Some(path) = cli.path.clone()
        && cli.command.is_none()
    {
        if let Err(e) = solve_file(&path, &cli.common) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let outcome = match cli.command {
        Some(Commands::Grid { grid, common }) => solve_text(&grid, None, &common),
        Some(Commands::File { path, common }) => solve_file(&path, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "sudoku_solver", &mut std::io::stdout());
            Ok(())
        }
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Solves a single grid string and reports the result.
fn solve_text(grid: &str, label: Option<&Path>, common: &CommonOptions) -> Result<(), String> {
    let parse_start = Instant::now();
    let board = parse_grid(grid).map_err(|e| format!("invalid grid: {e}"))?;
    let parse_time = parse_start.elapsed();

    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    let (solution, elapsed, solve_stats, topology) = solve_board(board, common.selection);

    if common.verify {
        verify_solution(&topology, solution.as_ref());
    }

    if common.stats {
        let (allocated, resident) = memory_stats();
        print_stats(parse_time, elapsed, &solve_stats, allocated, resident);
    }

    match solution {
        Some(solved) => {
            println!("Solution: {}", as_line(&solved));
            if common.display {
                println!("{}", render(&solved));
            }
        }
        None => println!("No solution found"),
    }
    Ok(())
}

/// Solves every grid in a puzzle file.
///
/// The file holds one 81-character grid per line; blank lines and lines
/// starting with '#' are skipped.
fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        solve_text(line, Some(path), common)?;
    }
    Ok(())
}

/// Solves a directory of puzzle files.
///
/// This function iterates over all `.sudoku` and `.txt` files in the
/// directory (recursively), parses each file, solves it, and reports the
/// results.
fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path
            .extension()
            .is_none_or(|ext| ext != "sudoku" && ext != "txt")
        {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        solve_file(file_path, common)?;
    }
    Ok(())
}

/// Solves a board with the requested selection policy.
///
/// # Returns
/// A tuple containing:
/// * `Option<Board>`: The solution if one exists, otherwise `None`.
/// * `Duration`: The time taken by the search.
/// * `SolveStats`: Counters collected during the search.
/// * `Topology`: The unit topology, for verification by the caller.
fn solve_board(
    board: Board,
    selection: SelectionType,
) -> (Option<Board>, Duration, SolveStats, Topology) {
    match selection {
        SelectionType::MinRemaining => {
            let mut engine = Engine::with_selector(MinimumRemaining);
            let time = Instant::now();
            let solution = engine.solve(board);
            (
                solution,
                time.elapsed(),
                engine.stats(),
                engine.topology().clone(),
            )
        }
        SelectionType::FirstOpen => {
            let mut engine = Engine::with_selector(FirstOpen);
            let time = Instant::now();
            let solution = engine.solve(board);
            (
                solution,
                time.elapsed(),
                engine.stats(),
                engine.topology().clone(),
            )
        }
    }
}

/// Verifies a found solution against the strict unit constraints.
///
/// Prints whether the verification was successful. If verification fails, it
/// panics: a solver that returns an invalid board is a bug, not bad input.
fn verify_solution(topology: &Topology, solution: Option<&Board>) {
    if let Some(board) = solution {
        let ok = is_valid_solution(topology, board);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("No solution to verify");
    }
}

/// Reads jemalloc's allocated and resident memory, in MiB.
#[allow(clippy::cast_precision_loss)]
fn memory_stats() -> (f64, f64) {
    // Advance the epoch so the figures reflect the solving phase.
    epoch::advance().unwrap();
    let allocated = stats::allocated::mib().unwrap().read().unwrap();
    let resident = stats::resident::mib().unwrap().read().unwrap();
    (
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    )
}

/// Helper function to print a single labelled statistic line.
fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of parse, search and memory statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
) {
    println!("\n========================[ Search Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.6}", parse_time.as_secs_f64()));
    stat_line("Solve time (s)", format!("{:.6}", elapsed.as_secs_f64()));
    stat_line("Decisions", s.decisions);
    stat_line("Branches tried", s.branches);
    stat_line("Contradictions", s.contradictions);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    println!("=====================================================================");
}
