//! Reading the factor count from an interactive stream.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Error returned when the factor count cannot be read.
#[derive(Debug, Error)]
pub enum InputError {
    /// The stream ended before a line was read.
    #[error("no input: expected the number of factors")]
    Empty,

    /// The line was not a non-negative integer.
    #[error("invalid number of factors '{input}': {source}")]
    NotAnInteger {
        /// Trimmed line as read.
        input: String,
        /// Underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// Reading or prompting failed.
    #[error("failed to read the number of factors")]
    Io(#[from] io::Error),
}

/// Parse one line as a factor count.
pub fn parse_factors(line: &str) -> Result<usize, InputError> {
    let input = line.trim();
    input.parse().map_err(|source| InputError::NotAnInteger {
        input: input.to_string(),
        source,
    })
}

/// Write `prompt`, then read and parse a single line from `reader`.
///
/// Range checks (zero, too many factors) are left to the pipeline so the
/// same error messages apply to every input path.
pub fn read_factors<R: BufRead, W: Write>(
    reader: &mut R,
    prompt: &mut W,
) -> Result<usize, InputError> {
    write!(prompt, "Number of factors: ")?;
    prompt.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Empty);
    }
    parse_factors(&line)
}
