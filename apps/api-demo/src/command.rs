//! Input commands understood by the demo.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tap,
    Next,
    Prev,
    Back,
    /// A spoken command, e.g. `say coder3`.
    Say(String),
    /// Let animations and timers run for the given number of milliseconds.
    Wait(u64),
    Show,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidDuration(String),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCommandError::Empty => f.write_str("empty command"),
            ParseCommandError::Unknown(word) => write!(
                f,
                "unknown command `{word}` (expected tap, next, prev, back, say, wait, show or quit)"
            ),
            ParseCommandError::MissingArgument(command) => {
                write!(f, "`{command}` needs an argument")
            }
            ParseCommandError::InvalidDuration(value) => {
                write!(f, "`{value}` is not a duration in milliseconds")
            }
        }
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let rest = words.collect::<Vec<_>>().join(" ");
        match word.to_ascii_lowercase().as_str() {
            "tap" => Ok(Command::Tap),
            "next" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "back" => Ok(Command::Back),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            "say" if rest.is_empty() => Err(ParseCommandError::MissingArgument("say")),
            "say" => Ok(Command::Say(rest.to_ascii_lowercase())),
            "wait" if rest.is_empty() => Err(ParseCommandError::MissingArgument("wait")),
            "wait" => rest
                .parse()
                .map(Command::Wait)
                .map_err(|_| ParseCommandError::InvalidDuration(rest)),
            _ => Err(ParseCommandError::Unknown(word.to_string())),
        }
    }
}
