//! Move input parsing.

use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::board::TileColor;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Color(TileColor),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if trimmed == "q" {
            return Err(InputError::UserExit);
        }

        TileColor::from_str(&trimmed)
            .map(MoveInput::Color)
            .map_err(|_| InputError::InvalidInput {
                input: input.trim().to_string(),
            })
    }
}

/// Prompts on stdout and reads one move from stdin. `q` (or end of input)
/// comes back as `InputError::UserExit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    print!("> ");
    io::stdout().flush().map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err(InputError::UserExit),
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
