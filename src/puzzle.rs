//! `puzzle` — read and validate a word-search puzzle from plain text.
//!
//! The format, one item per line:
//!
//! ```text
//! N M            rows and columns (integers >= 1)
//! <N grid rows>  each exactly M letters A-Z / a-z
//! WRAP|NO_WRAP   wrap mode, case-insensitive
//! P              number of words
//! <P words>      letters only, one per line
//! ```
//!
//! Reading is fail-fast: the first problem aborts with a [`PuzzleError`] and
//! no partial puzzle is returned. Only blank lines may follow the last word.
//!
//! `parse_from_str` does no I/O; `load_from_path` is the file-reading wrapper.

use crate::errors::PuzzleError;
use crate::grid::{Grid, GridBuilder, WrapMode};
use log::debug;
use nom::{
    character::complete::{char, digit1, space0, space1},
    combinator::{eof, opt, recognize},
    error::ErrorKind,
    sequence::pair,
    IResult,
};
use std::iter::Enumerate;
use std::path::Path;
use std::str::Lines;

pub type PResult<'a, O> = IResult<&'a str, O, Box<PuzzleError>>;

/// A validated grid and the words to look for in it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// Query words, in file order.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found, e.g. `GridRowWrongLength`,
    /// `InvalidWrapToken`, `NonLetterInWord`, or `TrailingContent`.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, Box<PuzzleError>> {
        let mut lines = LineReader::new(contents);

        let (line_no, header) = lines.next_line("grid dimensions")?;
        let (rows, cols) = parse_dimensions(line_no, header)?;

        let mut builder = GridBuilder::new(rows, cols)?;
        for _ in 0..rows {
            let (_, row) = lines.next_line("grid row")?;
            builder.push_row(row)?;
        }

        let (_, wrap_line) = lines.next_line("wrap mode")?;
        let wrap: WrapMode = wrap_line.parse()?;
        let grid = builder.finish(wrap)?;

        let (line_no, count_line) = lines.next_line("word count")?;
        let num_words = parse_word_count(line_no, count_line)?;

        let mut words = Vec::with_capacity(num_words.min(1024));
        for index in 0..num_words {
            let (_, word) = lines.next_line("word")?;
            validate_word(index, word)?;
            words.push(word.to_string());
        }

        if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(Box::new(PuzzleError::TrailingContent { line_no }));
        }

        debug!("read {rows} x {cols} {wrap} grid with {} words", words.len());
        Ok(Puzzle { grid, words })
    }

    /// Read the file at `path` and parse it.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Puzzle::parse_from_str`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Puzzle, Box<PuzzleError>> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| {
            Box::new(PuzzleError::Io { path: path_ref.to_path_buf(), source })
        })?;
        Self::parse_from_str(&data)
    }
}

/// Check that `word` is a non-empty run of ASCII letters.
///
/// `index` is the word's 0-based position in the word list, used in errors.
///
/// # Errors
///
/// `BlankWord` or `NonLetterInWord`.
pub fn validate_word(index: usize, word: &str) -> Result<(), Box<PuzzleError>> {
    if word.is_empty() {
        return Err(Box::new(PuzzleError::BlankWord { index }));
    }
    match word.chars().find(|c| !c.is_ascii_alphabetic()) {
        Some(invalid_char) => Err(Box::new(PuzzleError::NonLetterInWord {
            word: word.to_string(),
            invalid_char,
        })),
        None => Ok(()),
    }
}

/// Numbered lines (1-based) with an "expected X" error when input runs out.
struct LineReader<'a> {
    inner: Enumerate<Lines<'a>>,
}

impl<'a> LineReader<'a> {
    fn new(contents: &'a str) -> Self {
        Self { inner: contents.lines().enumerate() }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), Box<PuzzleError>> {
        self.next().ok_or_else(|| Box::new(PuzzleError::UnexpectedEnd { expected }))
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, line)| (i + 1, line))
    }
}

/// Digits with an optional leading minus, so a negative size reads as a size.
fn signed_digits(input: &str) -> PResult<'_, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

fn dimensions(input: &str) -> PResult<'_, (&str, &str)> {
    let (input, _) = space0(input)?;
    let (input, rows) = signed_digits(input)?;
    let (input, _) = space1(input)?;
    let (input, cols) = signed_digits(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, (rows, cols)))
}

fn single_count(input: &str) -> PResult<'_, &str> {
    let (input, _) = space0(input)?;
    let (input, count) = digit1(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, count))
}

fn parse_dimensions(line_no: usize, line: &str) -> Result<(usize, usize), Box<PuzzleError>> {
    let wrap = |source| malformed(line_no, "grid dimensions", source);
    let (_, (rows_text, cols_text)) = dimensions(line).map_err(|e| wrap(unwrap_nom(e)))?;
    let rows = rows_text.parse::<i64>().map_err(|e| wrap(e.into()))?;
    let cols = cols_text.parse::<i64>().map_err(|e| wrap(e.into()))?;
    if rows < 1 || cols < 1 {
        return Err(Box::new(PuzzleError::InvalidGridSize { rows, cols }));
    }
    let rows = rows_text.parse::<usize>().map_err(|e| wrap(e.into()))?;
    let cols = cols_text.parse::<usize>().map_err(|e| wrap(e.into()))?;
    Ok((rows, cols))
}

fn parse_word_count(line_no: usize, line: &str) -> Result<usize, Box<PuzzleError>> {
    let wrap = |source| malformed(line_no, "word count", source);
    let (_, count) = single_count(line).map_err(|e| wrap(unwrap_nom(e)))?;
    count.parse::<usize>().map_err(|e| wrap(e.into()))
}

fn malformed(line_no: usize, expected: &'static str, source: Box<PuzzleError>) -> Box<PuzzleError> {
    Box::new(PuzzleError::MalformedLine { line_no, expected, source })
}

fn unwrap_nom(err: nom::Err<Box<PuzzleError>>) -> Box<PuzzleError> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => Box::new(PuzzleError::NomError(ErrorKind::Eof)),
    }
}
