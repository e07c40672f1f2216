use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use wordsearch::errors::PuzzleError;
use wordsearch::puzzle::{self, Puzzle};
use wordsearch::report;
use wordsearch::searcher::Searcher;

/// Word-search solver with optional wraparound
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH_FULL"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the puzzle file (dimensions, grid rows, WRAP/NO_WRAP, word count, words)
    puzzle: String,

    /// Search for these words instead of the puzzle's word list
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Print timings and counts on stderr
    #[arg(short, long)]
    stats: bool,
}

/// Entry point of the `wordsearch` CLI.
///
/// Delegates to [`try_main`], printing any error (with code and help when it
/// is a [`PuzzleError`]) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// 1. Parse CLI arguments.
/// 2. Load and validate the puzzle (fail-fast, nothing is searched on error).
/// 3. Search each word and print one line per word, in order.
/// 4. Optionally print timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let Puzzle { grid, words } = Puzzle::load_from_path(&cli.puzzle).map_err(unbox)?;
    let words = if cli.words.is_empty() {
        words
    } else {
        for (index, word) in cli.words.iter().enumerate() {
            puzzle::validate_word(index, word).map_err(unbox)?;
        }
        cli.words
    };
    let searcher = Searcher::new(grid);
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_search = Instant::now();
    let outcomes = searcher.find_all(&words);
    let search_secs = t_search.elapsed().as_secs_f64();

    for line in report::format_outcomes(&outcomes) {
        println!("{line}");
    }

    if cli.stats {
        let found = outcomes.iter().filter(|o| o.is_some()).count();
        eprintln!(
            "Loaded {} x {} grid in {:.3}s; searched {} words in {:.3}s ({} found).",
            searcher.grid().rows(),
            searcher.grid().cols(),
            load_secs,
            words.len(),
            search_secs,
            found
        );
    }

    Ok(())
}

// `downcast_ref` in `main` needs the error itself, not its box
fn unbox(e: Box<PuzzleError>) -> PuzzleError {
    *e
}
