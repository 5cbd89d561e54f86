//! Parsing for the lines typed at the menu prompts.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a menu choice: {0:?}")]
    InvalidChoice(String),
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("no value entered")]
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    PushMultiple,
    Pop,
    Peek,
    Display,
    Search,
    Exit,
}

impl Choice {
    pub const ALL: [Self; 6] = [
        Self::PushMultiple,
        Self::Pop,
        Self::Peek,
        Self::Display,
        Self::Search,
        Self::Exit,
    ];

    /// The number typed to select this entry.
    pub fn key(self) -> u8 {
        match self {
            Self::PushMultiple => 1,
            Self::Pop => 2,
            Self::Peek => 3,
            Self::Display => 4,
            Self::Search => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PushMultiple => "Push multiple elements",
            Self::Pop => "Pop element",
            Self::Peek => "Peek top element",
            Self::Display => "View stack contents",
            Self::Search => "Search stack",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for Choice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || InputError::InvalidChoice(s.to_owned());
        let key: u8 = s.parse().map_err(|_| invalid())?;
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(invalid)
    }
}

/// Every whitespace-separated token must be an integer; one bad token rejects
/// the whole line.
pub fn parse_values(line: &str) -> Result<Vec<i32>, InputError> {
    line.split_whitespace().map(parse_value).collect()
}

/// Parse the first token of `line`, ignoring anything after it.
pub fn parse_first_value(line: &str) -> Result<i32, InputError> {
    let token = line.split_whitespace().next().ok_or(InputError::Missing)?;
    parse_value(token)
}

fn parse_value(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_owned()))
}
