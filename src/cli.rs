//! Command line parsing for the explorer binary.

use std::error::Error;
use std::fmt;

pub const USAGE: &str = "Usage: fractal_duet WIDTH HEIGHT

Opens a Mandelbrot window and a Julia window of WIDTH x HEIGHT pixels.
Both dimensions must be whole numbers of at least 2.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    WrongArgCount { found: usize },
    InvalidDimension { arg: String },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgCount { found } => {
                write!(f, "expected 2 arguments, found {}", found)
            }
            Self::InvalidDimension { arg } => {
                write!(f, "'{}' is not a valid window dimension", arg)
            }
        }
    }
}

impl Error for UsageError {}

/// Parses the positional arguments (program name already stripped).
pub fn parse_dimensions(args: &[String]) -> Result<(u32, u32), UsageError> {
    if args.len() != 2 {
        return Err(UsageError::WrongArgCount { found: args.len() });
    }

    let width = parse_dimension(&args[0])?;
    let height = parse_dimension(&args[1])?;

    Ok((width, height))
}

fn parse_dimension(arg: &str) -> Result<u32, UsageError> {
    match arg.parse::<u32>() {
        Ok(value) if value >= 2 => Ok(value),
        _ => Err(UsageError::InvalidDimension {
            arg: arg.to_string(),
        }),
    }
}
