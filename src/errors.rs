//! Error types for reading and validating puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W014) for documentation lookup:
//!
//! - W001: `InvalidGridSize` (Grid dimensions below 1)
//! - W002: `MalformedLine` (Numeric line could not be parsed (wraps another error))
//! - W003: `UnexpectedEnd` (Input ended early)
//! - W004: `BlankGridRow` (Empty grid row)
//! - W005: `GridRowWrongLength` (Grid row length differs from the column count)
//! - W006: `NonLetterInGrid` (Non-letter in a grid row)
//! - W007: `InvalidWrapToken` (Wrap line is neither WRAP nor NO_WRAP)
//! - W008: `BlankWord` (Empty word)
//! - W009: `NonLetterInWord` (Non-letter in a word)
//! - W010: `TrailingContent` (Content after the word list)
//! - W011: `Io` (Puzzle file could not be read)
//! - W012: `ParseIntError` (Integer parsing error)
//! - W013: `NomError` (Low-level nom parser error)
//! - W014: `TooManyRows` (More grid rows than declared)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::PuzzleError;
//! use wordsearch::puzzle::Puzzle;
//!
//! match Puzzle::parse_from_str("2 2\nAB\nC1\nWRAP\n0\n") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W006");
//!         assert!(matches!(*e, PuzzleError::NonLetterInGrid { row: 1, invalid_char: '1' }));
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Custom error type for puzzle input
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid grid size {rows} x {cols}")]
    InvalidGridSize { rows: i64, cols: i64 },

    #[error("line {line_no}: expected {expected}: {source}")]
    MalformedLine {
        line_no: usize,
        expected: &'static str,
        #[source]
        source: Box<PuzzleError>,
    },

    #[error("input ended while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("grid row {row} is blank")]
    BlankGridRow { row: usize },

    #[error("grid row {row} has {found} letters; grid is {rows} x {expected}")]
    GridRowWrongLength { row: usize, rows: usize, expected: usize, found: usize },

    #[error("grid row {row} contains non-letter '{invalid_char}'")]
    NonLetterInGrid { row: usize, invalid_char: char },

    #[error("invalid wrap mode \"{token}\"")]
    InvalidWrapToken { token: String },

    #[error("word {index} is blank")]
    BlankWord { index: usize },

    #[error("word \"{word}\" contains non-letter '{invalid_char}'")]
    NonLetterInWord { word: String, invalid_char: char },

    #[error("line {line_no}: extra content after the last word")]
    TrailingContent { line_no: usize },

    #[error("failed to read puzzle from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("int-parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),

    #[error("grid already has all {rows} rows")]
    TooManyRows { rows: usize },
}

impl From<ParseIntError> for Box<PuzzleError> {
    fn from(pie: ParseIntError) -> Self {
        Box::new(PuzzleError::ParseIntError(pie))
    }
}

impl<'a> NomParseError<&'a str> for Box<PuzzleError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(PuzzleError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "W001",
            PuzzleError::MalformedLine { .. } => "W002",
            PuzzleError::UnexpectedEnd { .. } => "W003",
            PuzzleError::BlankGridRow { .. } => "W004",
            PuzzleError::GridRowWrongLength { .. } => "W005",
            PuzzleError::NonLetterInGrid { .. } => "W006",
            PuzzleError::InvalidWrapToken { .. } => "W007",
            PuzzleError::BlankWord { .. } => "W008",
            PuzzleError::NonLetterInWord { .. } => "W009",
            PuzzleError::TrailingContent { .. } => "W010",
            PuzzleError::Io { .. } => "W011",
            PuzzleError::ParseIntError(_) => "W012",
            PuzzleError::NomError(_) => "W013",
            PuzzleError::TooManyRows { .. } => "W014",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "Grid dimensions below 1",
            PuzzleError::MalformedLine { .. } => "Numeric line could not be parsed",
            PuzzleError::UnexpectedEnd { .. } => "Input ended early",
            PuzzleError::BlankGridRow { .. } => "Empty grid row",
            PuzzleError::GridRowWrongLength { .. } => "Grid row length differs from the column count",
            PuzzleError::NonLetterInGrid { .. } => "Non-letter in a grid row",
            PuzzleError::InvalidWrapToken { .. } => "Wrap line is neither WRAP nor NO_WRAP",
            PuzzleError::BlankWord { .. } => "Empty word",
            PuzzleError::NonLetterInWord { .. } => "Non-letter in a word",
            PuzzleError::TrailingContent { .. } => "Content after the word list",
            PuzzleError::Io { .. } => "Puzzle file could not be read",
            PuzzleError::ParseIntError(_) => "Integer parsing error",
            PuzzleError::NomError(_) => "Low-level nom parser error",
            PuzzleError::TooManyRows { .. } => "More grid rows than declared",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "The first line declares the number of rows and columns. Both must be at least 1.",
            PuzzleError::MalformedLine { .. } => "The header line must hold exactly two non-negative integers and the word-count line exactly one. This wraps the lower-level error that rejected the line.",
            PuzzleError::UnexpectedEnd { .. } => "The file ended before all declared grid rows, the wrap line, the word count, or all declared words were read.",
            PuzzleError::BlankGridRow { .. } => "A grid row was empty. Every row must hold exactly as many letters as the declared column count.",
            PuzzleError::GridRowWrongLength { .. } => "A grid row does not have exactly as many letters as the declared column count.",
            PuzzleError::NonLetterInGrid { .. } => "Grid rows may contain only the letters A-Z and a-z. Spaces, digits and punctuation are rejected.",
            PuzzleError::InvalidWrapToken { .. } => "The line after the grid selects the wrap mode and must be WRAP or NO_WRAP (case-insensitive).",
            PuzzleError::BlankWord { .. } => "A line in the word list was empty.",
            PuzzleError::NonLetterInWord { .. } => "Words may contain only the letters A-Z and a-z.",
            PuzzleError::TrailingContent { .. } => "The file contains non-blank lines after the declared number of words.",
            PuzzleError::Io { .. } => "The puzzle file could not be opened or is not valid UTF-8.",
            PuzzleError::ParseIntError(_) => "A number in the input could not be parsed, usually because it is too large.",
            PuzzleError::NomError(_) => "The low-level line parser rejected its input. This normally appears wrapped in a MalformedLine error.",
            PuzzleError::TooManyRows { .. } => "A row was pushed into a grid builder that already holds every declared row.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidGridSize { .. } => Some("Example header for a 3-row, 4-column grid: '3 4'"),
            PuzzleError::MalformedLine { .. } => Some("Use plain integers separated by spaces (e.g., '3 4' or '2')"),
            PuzzleError::UnexpectedEnd { .. } => Some("Check that the declared row and word counts match the file contents"),
            PuzzleError::BlankGridRow { .. } | PuzzleError::GridRowWrongLength { .. } => {
                Some("Every grid row must have exactly the declared number of letters")
            }
            PuzzleError::NonLetterInGrid { .. } | PuzzleError::NonLetterInWord { .. } => {
                Some("Only letters A-Z and a-z are allowed")
            }
            PuzzleError::InvalidWrapToken { .. } => Some("Use 'WRAP' or 'NO_WRAP' on the line after the grid"),
            PuzzleError::BlankWord { .. } => Some("Remove the empty line or lower the word count"),
            PuzzleError::TrailingContent { .. } => Some("Raise the word count or remove the extra lines"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            PuzzleError::MalformedLine { source, .. } => {
                format!("{} ({})\n  caused by: {}", self, self.code(), source.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<PuzzleError> {
        vec![
            PuzzleError::InvalidGridSize { rows: 0, cols: 3 },
            PuzzleError::MalformedLine {
                line_no: 1,
                expected: "grid dimensions",
                source: Box::new(PuzzleError::NomError(ErrorKind::Digit)),
            },
            PuzzleError::UnexpectedEnd { expected: "wrap mode" },
            PuzzleError::BlankGridRow { row: 0 },
            PuzzleError::GridRowWrongLength { row: 1, rows: 3, expected: 3, found: 2 },
            PuzzleError::NonLetterInGrid { row: 2, invalid_char: '7' },
            PuzzleError::InvalidWrapToken { token: "MAYBE".to_string() },
            PuzzleError::BlankWord { index: 0 },
            PuzzleError::NonLetterInWord { word: "c4t".to_string(), invalid_char: '4' },
            PuzzleError::TrailingContent { line_no: 9 },
            PuzzleError::Io { path: PathBuf::from("missing.txt"), source: io::Error::from(io::ErrorKind::NotFound) },
            PuzzleError::ParseIntError("x".parse::<usize>().unwrap_err()),
            PuzzleError::NomError(ErrorKind::Eof),
            PuzzleError::TooManyRows { rows: 2 },
        ]
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_errors() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        assert_eq!(codes.len(), 14);
    }

    #[test]
    fn test_error_code_format() {
        for err in sample_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (W0XX)", code);
            assert!(code.starts_with("W0"), "Error code '{}' should start with 'W0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in sample_errors() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = PuzzleError::InvalidWrapToken { token: "SOMETIMES".to_string() };
        let detailed = err.display_detailed();

        assert!(detailed.contains("W007"));
        assert!(detailed.contains("SOMETIMES"));
        assert!(detailed.contains("NO_WRAP"));
    }

    #[test]
    fn test_row_length_message_includes_dimensions() {
        let err = PuzzleError::GridRowWrongLength { row: 1, rows: 3, expected: 4, found: 2 };
        let msg = err.to_string();
        assert!(msg.contains("3 x 4"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_malformed_line_chain() {
        let err = PuzzleError::MalformedLine {
            line_no: 4,
            expected: "word count",
            source: Box::new(PuzzleError::NomError(ErrorKind::Digit)),
        };
        let detailed = err.display_detailed();

        assert!(detailed.contains("W002"));
        assert!(detailed.contains("caused by"));
        assert!(detailed.contains("W013"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
