use alloc::vec;
use ndarray::Array2;

use crate::*;

/// The grid of tiles a game is played on.
///
/// Mines are placed and neighbour lists bound once, when the board is built. Afterwards only reveals and flags
/// change it.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Board {
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        let layout = generator.generate(config)?;
        Ok(Self::from_layout(&layout))
    }

    /// Board with mines placed at random from `seed`.
    pub fn random(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::new(seed))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let size = layout.size();
        let mut board = Self {
            tiles: Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
                Tile::new((row as Coord, col as Coord), false)
            }),
            mine_count: 0,
        };
        board.place_mines(layout);
        board.bind_neighbors();
        board
    }

    fn place_mines(&mut self, layout: &MineLayout) {
        for tile in self.tiles.iter_mut() {
            if layout.contains_mine(tile.coords()) {
                tile.arm();
            }
        }
        self.mine_count = layout.mine_count();
    }

    fn bind_neighbors(&mut self) {
        let size = self.size();
        for tile in self.tiles.iter_mut() {
            let neighbors = tile.find_neighbors(size);
            tile.bind_neighbors(neighbors);
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_tiles(Tile::is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_tiles(Tile::is_revealed)
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flag_count() as isize)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.tiles[coords.to_nd_index()])
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> Result<&mut Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.tiles[coords.to_nd_index()])
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Every non-mined tile is revealed. Flags don't count.
    pub fn is_won(&self) -> bool {
        !self.is_lost() && self.tiles.iter().all(|tile| tile.is_revealed() || tile.is_mined())
    }

    /// Some mine was revealed.
    pub fn is_lost(&self) -> bool {
        self.tiles.iter().any(|tile| tile.is_mined() && tile.is_revealed())
    }

    pub fn is_game_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Display glyph of every tile, same shape as the board.
    pub fn glyphs(&self) -> Array2<Glyph> {
        self.tiles.map(Tile::glyph)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = self.tiles[coords.to_nd_index()].toggle_flag();
        log::debug!("Toggle flag at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Reveals a tile, flooding through every connected tile without adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.tiles[coords.to_nd_index()].can_reveal() {
            return Ok(RevealOutcome::NoChange);
        }

        // a revealed tile is never revealed again, so it doubles as the visited set
        let mut to_visit = vec![coords];
        while let Some(visit_coords) = to_visit.pop() {
            if !self.tiles[visit_coords.to_nd_index()].can_reveal() {
                continue;
            }

            let count = self.count_adjacent_mines(visit_coords);
            if !self.tiles[visit_coords.to_nd_index()].reveal(count) {
                log::trace!("Revealed tile at {:?}, mine count: {}", visit_coords, count);
                continue;
            }

            log::trace!("Flood reveal from {:?}", visit_coords);
            let tile = &self.tiles[visit_coords.to_nd_index()];
            to_visit.extend(
                tile.neighbors()
                    .iter()
                    .copied()
                    .filter(|pos| self.tiles[pos.to_nd_index()].can_reveal()),
            );
        }

        Ok(if self.tiles[coords.to_nd_index()].is_mined() {
            log::debug!("Mine hit at {:?}", coords);
            RevealOutcome::HitMine
        } else if self.is_won() {
            log::debug!("All safe tiles revealed");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.tiles[coords.to_nd_index()]
            .neighbors()
            .iter()
            .filter(|pos| self.tiles[pos.to_nd_index()].is_mined())
            .count() as u8
    }

    fn count_tiles(&self, predicate: impl Fn(&Tile) -> bool) -> CellCount {
        self.tiles.iter().filter(|&tile| predicate(tile)).count() as CellCount
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_game_over() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
