use std::io;
use std::process;
use std::time::Instant;

use antoku_core::colony::{ParallelColonies, SingleColony, SolveOutcome};
use antoku_core::config::SearchParams;
use antoku_core::{backtrack, puzzle};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use tracing::{error, info};

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generalized Sudoku solver driven by ant colonies")]
struct Cli {
    /// Algorithm: 0 = single-colony ACS, 1 = backtracking, 2 = parallel ACS
    #[arg(long, default_value_t = 0)]
    alg: u8,

    /// Puzzle file: a size line (9/16/25), then one line per row,
    /// open cells as 0 or .
    #[arg(long)]
    file: String,

    #[command(flatten)]
    search: SearchParams,

    /// Master seed; sub-colony i derives seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with search parameters; explicit flags override it
    #[arg(long)]
    params: Option<String>,

    /// Progress and summary output on stderr
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    verbose: bool,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let board = puzzle::load_from_file(&cli.file).unwrap_or_else(|e| {
        error!("could not load puzzle '{}': {}", cli.file, e);
        process::exit(2);
    });
    info!(
        "loaded {0}x{0} puzzle with {1} givens from {2}",
        board.n(),
        board.cells_filled(),
        cli.file
    );

    let mut params = cli.search;
    if let Some(path) = &cli.params {
        params = SearchParams::load_from_file(path).unwrap_or_else(|e| {
            error!("could not load parameters '{path}': {e}");
            process::exit(2);
        });
        params.merge_from_cli(&cli.search, &matches);
    }

    match cli.alg {
        0 => {
            let outcome = SingleColony::new(board, &params, cli.seed).run();
            report(&outcome, false, cli.verbose);
        }
        1 => run_backtracking(board),
        2 => {
            let outcome = ParallelColonies::new(board, &params, cli.seed).run();
            report(&outcome, true, cli.verbose);
        }
        other => {
            error!("unknown algorithm {other}: expected 0, 1 or 2");
            process::exit(2);
        }
    }
}

/// Machine-readable summary on stdout, in the grammar the batch
/// scripts parse; the human-facing extras go to stderr.
fn report(outcome: &SolveOutcome, communication: bool, verbose: bool) -> ! {
    print!("{}", outcome.board);
    let secs = outcome.elapsed.as_secs_f64();
    if outcome.solved {
        println!("solved in {secs:.5}");
    } else {
        println!("failed in time {secs:.5}");
    }
    println!("iterations: {}", outcome.iterations);
    println!(
        "communication: {}",
        if communication { "yes" } else { "no" }
    );

    if verbose {
        reports::print_board_grid(&outcome.board);
        reports::print_colony_summary(&outcome.colony_stats);
    }
    process::exit(if outcome.solved { 0 } else { 1 });
}

fn run_backtracking(board: antoku_core::Board) -> ! {
    let start = Instant::now();
    let result = backtrack::solve(&board);
    let secs = start.elapsed().as_secs_f64();
    match result {
        Some(solution) => {
            print!("{solution}");
            println!("solved in {secs:.5}");
            process::exit(0);
        }
        None => {
            print!("{board}");
            println!("failed in time {secs:.5}");
            process::exit(1);
        }
    }
}
