//! Parsing of the commands a player types at the prompt.
//!
//! A move is two digits, column then row, both 1-based: `81` is the
//! top-right corner.

use std::str::FromStr;

use thiserror::Error;

use crate::board::BOARD_SIZE;
use crate::types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Hints,
    Play(Move),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid move; enter the column (1-8) and then the row (1-8), e.g. 81")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "quit" => return Ok(Command::Quit),
            "hints" => return Ok(Command::Hints),
            _ => {}
        }

        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
        if input.chars().count() != 2 || digits.len() != 2 {
            return Err(ParseCommandError(s.trim().to_string()));
        }

        let in_range = |d: u32| (1..=BOARD_SIZE as u32).contains(&d);
        if !in_range(digits[0]) || !in_range(digits[1]) {
            return Err(ParseCommandError(s.trim().to_string()));
        }

        Ok(Command::Play(Move::new(
            (digits[0] - 1) as u8,
            (digits[1] - 1) as u8,
        )))
    }
}
