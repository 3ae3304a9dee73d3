//! Operator input
//!
//! Workflow code reads every line the operator types through
//! [`LineReader`]. The running program backs it with a rustyline editor;
//! workflow tests feed scripted lines instead. The pure parsers below
//! turn those lines into selections and amounts.
//!
//! Ctrl-C discards the pending line and asks again. Ctrl-D surfaces as
//! [`Input::Cancelled`] so each flow can back out gracefully instead of
//! dying mid-prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::terminal::screen;
use crate::types::{PosError, Price};

/// One answer read from the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, trimmed
    Line(String),

    /// The operator pressed Ctrl-D to back out of the current flow
    Cancelled,
}

/// Source of operator input lines
pub trait LineReader {
    /// Read one trimmed line
    fn line(&mut self, prompt: &str) -> Result<Input, PosError>;
}

/// Line editor for all operator input
pub struct Prompt {
    editor: DefaultEditor,
}

impl Prompt {
    /// Create a prompt backed by a fresh line editor
    pub fn new() -> Result<Self, PosError> {
        let editor = DefaultEditor::new().map_err(|e| PosError::io(e.to_string()))?;
        Ok(Prompt { editor })
    }
}

impl LineReader for Prompt {
    fn line(&mut self, prompt: &str) -> Result<Input, PosError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim().to_string();
                    if !trimmed.is_empty() {
                        let _ = self.editor.add_history_entry(&trimmed);
                    }
                    return Ok(Input::Line(trimmed));
                }
                Err(ReadlineError::Interrupted) => {
                    screen::notice("Interrupted. Press Ctrl-D to back out.");
                }
                Err(ReadlineError::Eof) => return Ok(Input::Cancelled),
                Err(e) => return Err(PosError::io(e.to_string())),
            }
        }
    }
}

/// Parse a 1-based listing selection into a zero-based index
///
/// # Arguments
///
/// * `input` - What the operator typed
/// * `count` - Number of entries in the listing
///
/// # Errors
///
/// Returns `PosError::InvalidSelection` if the input is not a number
/// between 1 and `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, PosError> {
    match input.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Ok(number - 1),
        _ => Err(PosError::invalid_selection(input)),
    }
}

/// Parse a non-negative whole peso amount or quantity
///
/// # Errors
///
/// Returns `PosError::InvalidNumber` if the input is not a non-negative
/// whole number.
pub fn parse_amount(input: &str) -> Result<Price, PosError> {
    input
        .parse::<u64>()
        .map_err(|_| PosError::invalid_number(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first("1", 4, 0)]
    #[case::last("4", 4, 3)]
    #[case::middle("2", 4, 1)]
    fn test_parse_selection_in_range(
        #[case] input: &str,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(parse_selection(input, count).unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0", 4)]
    #[case::past_end("5", 4)]
    #[case::empty("", 4)]
    #[case::letters("abc", 4)]
    #[case::negative("-1", 4)]
    #[case::decimal("1.5", 4)]
    #[case::empty_listing("1", 0)]
    fn test_parse_selection_rejects(#[case] input: &str, #[case] count: usize) {
        let error = parse_selection(input, count).unwrap_err();
        assert_eq!(
            error,
            PosError::InvalidSelection {
                input: input.to_string()
            }
        );
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::small("42", 42)]
    #[case::large("1000000", 1_000_000)]
    fn test_parse_amount_accepts_whole_numbers(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::negative("-5")]
    #[case::decimal("9.99")]
    #[case::empty("")]
    #[case::mixed("12a")]
    fn test_parse_amount_rejects(#[case] input: &str) {
        let error = parse_amount(input).unwrap_err();
        assert_eq!(
            error,
            PosError::InvalidNumber {
                input: input.to_string()
            }
        );
    }
}
