use std::path::PathBuf;
use std::str::FromStr;

use minesweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Save(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{0}` expects a row and a column")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("Too many arguments for `{0}`")]
    TooManyArgs(&'static str),
}

pub const HELP: &str = "\
Commands (rows and columns start at 0):
  r, reveal ROW COL   reveal a tile
  f, flag ROW COL     place or remove a flag
  s, save [PATH]      save the game
  h, help             show this help
  q, quit             leave the game";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => parse_coords("reveal", &args).map(Command::Reveal),
            "f" | "flag" => parse_coords("flag", &args).map(Command::Flag),
            "s" | "save" => match args.as_slice() {
                [] => Ok(Command::Save(None)),
                [path] => Ok(Command::Save(Some(PathBuf::from(path)))),
                _ => Err(CommandError::TooManyArgs("save")),
            },
            "h" | "help" | "?" => no_args("help", &args, Command::Help),
            "q" | "quit" | "exit" => no_args("quit", &args, Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_owned())),
        }
    }
}

fn parse_coords(name: &'static str, args: &[&str]) -> Result<Coord2, CommandError> {
    match args {
        [row, col] => Ok((parse_coord(row)?, parse_coord(col)?)),
        [_, _, ..] => Err(CommandError::TooManyArgs(name)),
        _ => Err(CommandError::MissingCoords(name)),
    }
}

fn parse_coord(word: &str) -> Result<Coord, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidCoord(word.to_owned()))
}

fn no_args(name: &'static str, args: &[&str], command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::TooManyArgs(name))
    }
}
