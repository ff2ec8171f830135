use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minesweeper_core::Board;

pub const DEFAULT_SAVE_FILE: &str = "minesweeper.json";

pub fn load(path: &Path) -> Result<Board> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Could not read save file {}", path.display()))?;
    let board = Board::from_json(&json)
        .with_context(|| format!("Could not load game from {}", path.display()))?;
    log::info!("Loaded game from {}", path.display());
    Ok(board)
}

pub fn save(path: &Path, board: &Board) -> Result<()> {
    let json = board.to_json().context("Could not serialize game")?;
    fs::write(path, json).with_context(|| format!("Could not write save file {}", path.display()))?;
    log::info!("Saved game to {}", path.display());
    Ok(())
}
