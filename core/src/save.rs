use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Bumped whenever the save layout changes, older saves are refused.
pub const SAVE_VERSION: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub mined: bool,
    pub flagged: bool,
    pub revealed: bool,
    pub neighbor_mine_count: Option<u8>,
}

/// Everything needed to rebuild a board, tiles in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub size: Coord2,
    pub mine_count: CellCount,
    pub tiles: Vec<TileRecord>,
}

impl SaveData {
    pub fn from_board(board: &Board) -> Self {
        Self {
            version: SAVE_VERSION,
            size: board.size(),
            mine_count: board.mine_count(),
            tiles: board
                .tiles()
                .map(|tile| TileRecord {
                    mined: tile.is_mined(),
                    flagged: tile.is_flagged(),
                    revealed: tile.is_revealed(),
                    neighbor_mine_count: tile.neighbor_mine_count(),
                })
                .collect(),
        }
    }

    /// Rebuilds the board, refusing anything a real game could not have produced.
    pub fn into_board(self) -> core::result::Result<Board, SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: self.version,
                expected: SAVE_VERSION,
            });
        }

        let (rows, cols) = self.size;
        let config = GameConfig::new(self.size, self.mine_count)?;
        if self.tiles.len() != usize::from(config.total_cells()) {
            return Err(GameError::InvalidBoardShape.into());
        }

        let mines = self
            .tiles
            .iter()
            .zip(row_major(rows, cols))
            .filter(|(record, _)| record.mined)
            .map(|(_, coords)| coords);
        let layout = FixedMineGenerator::new(mines).generate(config)?;
        if layout.mine_count() != self.mine_count {
            return Err(SaveError::MineCountMismatch {
                declared: self.mine_count,
                actual: layout.mine_count(),
            });
        }

        let mut board = Board::from_layout(&layout);
        for (record, coords) in self.tiles.iter().zip(row_major(rows, cols)) {
            let expected_count = board
                .tile(coords)?
                .neighbors()
                .iter()
                .filter(|&&pos| layout.contains_mine(pos))
                .count() as u8;

            let consistent = match (record.revealed, record.neighbor_mine_count) {
                (true, Some(count)) => !record.flagged && count == expected_count,
                (false, None) => true,
                _ => false,
            };
            if !consistent {
                return Err(SaveError::InconsistentTile(coords));
            }

            board
                .tile_mut(coords)?
                .restore(record.flagged, record.revealed, record.neighbor_mine_count);
        }

        log::debug!(
            "Restored {:?} board, {} mines, {} tiles revealed",
            board.size(),
            board.mine_count(),
            board.revealed_count()
        );
        Ok(board)
    }

    pub fn to_json(&self) -> core::result::Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> core::result::Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Board {
    /// Serializes the whole board as a JSON save document.
    pub fn to_json(&self) -> core::result::Result<String, SaveError> {
        SaveData::from_board(self).to_json()
    }

    pub fn from_json(json: &str) -> core::result::Result<Self, SaveError> {
        SaveData::from_json(json)?.into_board()
    }
}

fn row_major(rows: Coord, cols: Coord) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_board() -> Board {
        // a wall of mines down column 4 keeps the flood on the left
        let mut mines: Vec<Coord2> = (0..BOARD_SIDE).map(|row| (row, 4)).collect();
        mines.push((0, 0));
        let mut board = Board::from_layout(&MineLayout::from_mine_coords((9, 9), &mines).unwrap());

        assert_eq!(board.reveal((8, 0)).unwrap(), RevealOutcome::Revealed);
        board.toggle_flag((0, 0)).unwrap();
        board.toggle_flag((0, 5)).unwrap();
        board
    }

    #[test]
    fn round_trip_restores_identical_board() {
        let board = played_board();

        let json = board.to_json().unwrap();
        let restored = Board::from_json(&json).unwrap();

        assert_eq!(restored, board);
        for (a, b) in board.tiles().zip(restored.tiles()) {
            assert_eq!(a.coords(), b.coords());
            assert_eq!(a.is_mined(), b.is_mined());
            assert_eq!(a.is_flagged(), b.is_flagged());
            assert_eq!(a.is_revealed(), b.is_revealed());
            assert_eq!(a.neighbor_mine_count(), b.neighbor_mine_count());
            assert_eq!(a.neighbors(), b.neighbors());
        }
        assert_eq!(restored.glyphs(), board.glyphs());
    }

    #[test]
    fn round_trip_keeps_lost_state() {
        let mut board = Board::from_layout(&MineLayout::from_mine_coords((9, 9), &[(4, 4)]).unwrap());
        board.reveal((4, 4)).unwrap();

        let restored = Board::from_json(&board.to_json().unwrap()).unwrap();

        assert!(restored.is_lost());
        assert_eq!(restored, board);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Board::from_json("not a save"),
            Err(SaveError::Malformed(_))
        ));
        assert!(matches!(
            Board::from_json("{\"version\": 1}"),
            Err(SaveError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_other_versions() {
        let mut data = SaveData::from_board(&played_board());
        data.version = SAVE_VERSION + 1;

        assert!(matches!(
            data.into_board(),
            Err(SaveError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_truncated_tiles() {
        let mut data = SaveData::from_board(&played_board());
        data.tiles.pop();

        assert!(matches!(
            data.into_board(),
            Err(SaveError::Game(GameError::InvalidBoardShape))
        ));
    }

    #[test]
    fn rejects_wrong_mine_count() {
        let mut data = SaveData::from_board(&played_board());
        data.mine_count -= 1;

        assert!(matches!(
            data.into_board(),
            Err(SaveError::MineCountMismatch { .. })
        ));
    }

    #[test]
    fn rejects_tampered_counts_and_states() {
        let board = played_board();
        let index = board
            .tiles()
            .position(|tile| tile.is_revealed())
            .unwrap();

        let mut data = SaveData::from_board(&board);
        data.tiles[index].neighbor_mine_count =
            data.tiles[index].neighbor_mine_count.map(|count| count + 1);
        assert!(matches!(
            data.into_board(),
            Err(SaveError::InconsistentTile(_))
        ));

        let mut data = SaveData::from_board(&board);
        data.tiles[index].flagged = true;
        assert!(matches!(
            data.into_board(),
            Err(SaveError::InconsistentTile(_))
        ));

        let mut data = SaveData::from_board(&board);
        data.tiles[index].neighbor_mine_count = None;
        assert!(matches!(
            data.into_board(),
            Err(SaveError::InconsistentTile(_))
        ));
    }
}
