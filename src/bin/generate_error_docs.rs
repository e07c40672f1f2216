//! Generate error code documentation from the source of truth (`PuzzleError`).
//!
//! Codes, descriptions, details, and help text come straight from the
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;
use wordsearch::errors::PuzzleError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of every `PuzzleError` variant, in code order
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::InvalidGridSize { rows: 0, cols: 5 },
        PuzzleError::MalformedLine {
            line_no: 1,
            expected: "grid dimensions",
            source: Box::new(PuzzleError::NomError(nom::error::ErrorKind::Space)),
        },
        PuzzleError::UnexpectedEnd { expected: "wrap mode" },
        PuzzleError::BlankGridRow { row: 2 },
        PuzzleError::GridRowWrongLength { row: 1, rows: 3, expected: 3, found: 4 },
        PuzzleError::NonLetterInGrid { row: 0, invalid_char: '#' },
        PuzzleError::InvalidWrapToken { token: "WRAPAROUND".to_string() },
        PuzzleError::BlankWord { index: 3 },
        PuzzleError::NonLetterInWord { word: "C4T".to_string(), invalid_char: '4' },
        PuzzleError::TrailingContent { line_no: 12 },
        PuzzleError::Io {
            path: PathBuf::from("puzzle.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        // ParseIntError--create by parsing an oversized integer
        PuzzleError::ParseIntError("99999999999999999999999".parse::<usize>().unwrap_err()),
        PuzzleError::NomError(nom::error::ErrorKind::Digit),
        PuzzleError::TooManyRows { rows: 3 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors (W001–W014)\n");
    println!("Errors raised while reading and validating a puzzle. The search itself never fails; a missing word prints `NOT FOUND`.\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
