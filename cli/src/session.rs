use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use minesweeper_core::{Board, GameError};

use crate::command::{Command, HELP};
use crate::{render, storage};

/// How a session finished.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
}

/// The turn loop: read a command, apply it, show the board, until the game is over or the player leaves.
pub struct Session<R, W> {
    board: Board,
    save_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, save_path: PathBuf, input: R, output: W) -> Self {
        Self {
            board,
            save_path,
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.output, "{}", render::render(&self.board))?;

        loop {
            if let Some(end) = self.finished() {
                self.announce(end)?;
                return Ok(end);
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("Input closed, leaving");
                return Ok(SessionEnd::Quit);
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::warn!("Rejected input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            if !self.apply(command)? {
                return Ok(SessionEnd::Quit);
            }
        }
    }

    /// Runs one command, returns `false` when the player wants to leave.
    fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Reveal(coords) => {
                let outcome = self.board.reveal(coords);
                log::debug!("Reveal {:?}: {:?}", coords, outcome);
                match outcome {
                    Ok(outcome) if outcome.has_update() => self.show_board()?,
                    Ok(_) => writeln!(self.output, "Nothing to reveal there.")?,
                    Err(err) => self.report(err)?,
                }
            }
            Command::Flag(coords) => match self.board.toggle_flag(coords) {
                Ok(outcome) if outcome.has_update() => self.show_board()?,
                Ok(_) => writeln!(self.output, "Revealed tiles cannot be flagged.")?,
                Err(err) => self.report(err)?,
            },
            Command::Save(path) => {
                // only remember a new path once something was written there
                let path = path.unwrap_or_else(|| self.save_path.clone());
                match storage::save(&path, &self.board) {
                    Ok(()) => {
                        writeln!(self.output, "Saved to {}", path.display())?;
                        self.save_path = path;
                    }
                    Err(err) => {
                        log::warn!("Save failed: {:#}", err);
                        writeln!(self.output, "Save failed: {err:#}")?;
                    }
                }
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render::render(&self.board))?;
        Ok(())
    }

    fn report(&mut self, err: GameError) -> Result<()> {
        let (rows, cols) = self.board.size();
        match err {
            GameError::InvalidCoords => writeln!(
                self.output,
                "{err}: rows go from 0 to {} and columns from 0 to {}",
                rows.saturating_sub(1),
                cols.saturating_sub(1)
            )?,
            _ => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn finished(&self) -> Option<SessionEnd> {
        if self.board.is_won() {
            Some(SessionEnd::Won)
        } else if self.board.is_lost() {
            Some(SessionEnd::Lost)
        } else {
            None
        }
    }

    fn announce(&mut self, end: SessionEnd) -> Result<()> {
        log::debug!("Game over: {:?}", end);
        match end {
            SessionEnd::Won => writeln!(self.output, "You win!")?,
            SessionEnd::Lost => writeln!(self.output, "You hit a mine. Game over.")?,
            SessionEnd::Quit => {}
        }
        Ok(())
    }
}
