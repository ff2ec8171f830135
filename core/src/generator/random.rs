use super::*;

/// Uniform placement without repeats, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        if config.mines > total_cells {
            return Err(GameError::TooManyMines);
        }

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut free_cells = total_cells;
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let Some(cells) = mines.as_slice_mut() else {
                return Err(GameError::InvalidBoardShape);
            };
            while mines_placed < config.mines {
                // pick the n-th free cell, skipping the ones already mined
                let mut place: CellCount = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    let i = i as CellCount;
                    if *cell {
                        place += 1;
                    }
                    if i == place {
                        *cell = true;
                        mines_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        log::debug!(
            "Placed {} mines on a {:?} board with seed {}",
            mines_placed,
            config.size,
            self.seed
        );
        Ok(MineLayout::from_mine_mask(mines))
    }
}
