use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Reasons a save document cannot be turned back into a board.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Malformed save data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unsupported save version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Save declares {declared} mines but the layout holds {actual}")]
    MineCountMismatch {
        declared: CellCount,
        actual: CellCount,
    },
    #[error("Inconsistent tile state at {0:?}")]
    InconsistentTile(Coord2),
    #[error(transparent)]
    Game(#[from] GameError),
}
