use alloc::vec::Vec;

use super::*;

/// Places mines exactly on the given coordinates, duplicates collapse into one mine.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let layout = MineLayout::from_mine_coords(config.size, &self.mines)?;
        if layout.mine_count() != config.mines {
            log::warn!(
                "Fixed layout holds {} mines, config asked for {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}
