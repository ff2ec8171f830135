use core::fmt;

use smallvec::SmallVec;

use crate::*;

/// Coordinates of the tiles adjacent to one tile, at most eight.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// One cell of the board.
///
/// A tile only knows its neighbours by coordinates, the board owns every tile and resolves those coordinates when a
/// reveal needs them.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    coords: Coord2,
    mined: bool,
    flagged: bool,
    revealed: bool,
    neighbor_mine_count: Option<u8>,
    neighbors: Neighbors,
}

impl Tile {
    pub fn new(coords: Coord2, mined: bool) -> Self {
        Self {
            coords,
            mined,
            flagged: false,
            revealed: false,
            neighbor_mine_count: None,
            neighbors: Neighbors::new(),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn is_mined(&self) -> bool {
        self.mined
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Adjacent mine count, known only once the tile was revealed.
    pub const fn neighbor_mine_count(&self) -> Option<u8> {
        self.neighbor_mine_count
    }

    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    /// Coordinates of every in-bounds tile around this one on a board of `size`.
    pub fn find_neighbors(&self, size: Coord2) -> Neighbors {
        NeighborIter::new(self.coords, size).collect()
    }

    /// Flagged and revealed tiles ignore reveals.
    pub const fn can_reveal(&self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Marks the tile as revealed and caches its adjacent mine count.
    ///
    /// Returns whether the reveal should spread to the neighbours, which happens for any freshly revealed tile
    /// without adjacent mines. Mined tiles reveal like any other tile, losing is up to the board to decide.
    pub(crate) fn reveal(&mut self, neighbor_mine_count: u8) -> bool {
        if !self.can_reveal() {
            return false;
        }
        self.revealed = true;
        self.neighbor_mine_count = Some(neighbor_mine_count);
        neighbor_mine_count == 0
    }

    pub(crate) fn toggle_flag(&mut self) -> MarkOutcome {
        if self.revealed {
            return MarkOutcome::NoChange;
        }
        self.flagged = !self.flagged;
        MarkOutcome::Changed
    }

    pub(crate) fn arm(&mut self) {
        self.mined = true;
    }

    pub(crate) fn bind_neighbors(&mut self, neighbors: Neighbors) {
        self.neighbors = neighbors;
    }

    pub(crate) fn restore(
        &mut self,
        flagged: bool,
        revealed: bool,
        neighbor_mine_count: Option<u8>,
    ) {
        self.flagged = flagged;
        self.revealed = revealed;
        self.neighbor_mine_count = neighbor_mine_count;
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Self { mined: true, revealed: true, .. } => Glyph::Exploded,
            Self { flagged: true, .. } => Glyph::Flag,
            Self { revealed: false, .. } => Glyph::Hidden,
            Self {
                neighbor_mine_count: Some(0) | None,
                ..
            } => Glyph::Blank,
            Self {
                neighbor_mine_count: Some(count),
                ..
            } => Glyph::Count(*count),
        }
    }
}

/// What the player gets to see of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Exploded,
    Flag,
    Hidden,
    Blank,
    Count(u8),
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Self::Exploded => 'X',
            Self::Flag => 'F',
            Self::Hidden => '*',
            Self::Blank => '_',
            Self::Count(count) => match char::from_digit(count as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.as_char().encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_caches_count_and_spreads_only_on_zero() {
        let mut zero = Tile::new((0, 0), false);
        let mut two = Tile::new((0, 1), false);

        assert!(zero.reveal(0));
        assert!(!two.reveal(2));
        assert_eq!(zero.neighbor_mine_count(), Some(0));
        assert_eq!(two.neighbor_mine_count(), Some(2));
        assert_eq!(two.glyph(), Glyph::Count(2));
        assert_eq!(zero.glyph(), Glyph::Blank);
    }

    #[test]
    fn reveal_is_idempotent_and_keeps_first_count() {
        let mut tile = Tile::new((3, 3), false);

        assert!(!tile.reveal(1));
        assert!(!tile.reveal(0));
        assert_eq!(tile.neighbor_mine_count(), Some(1));
    }

    #[test]
    fn flag_blocks_reveal_until_removed() {
        let mut tile = Tile::new((1, 1), false);

        assert_eq!(tile.toggle_flag(), MarkOutcome::Changed);
        assert!(!tile.reveal(0));
        assert!(!tile.is_revealed());
        assert_eq!(tile.neighbor_mine_count(), None);

        assert_eq!(tile.toggle_flag(), MarkOutcome::Changed);
        assert!(tile.reveal(0));
    }

    #[test]
    fn flagging_revealed_tile_changes_nothing() {
        let mut tile = Tile::new((1, 1), false);
        tile.reveal(4);
        let before = tile.clone();

        assert_eq!(tile.toggle_flag(), MarkOutcome::NoChange);
        assert_eq!(tile, before);
    }

    #[test]
    fn flag_then_unflag_restores_glyph() {
        let mut tile = Tile::new((2, 2), true);
        let before = tile.glyph();

        tile.toggle_flag();
        assert_eq!(tile.glyph(), Glyph::Flag);
        tile.toggle_flag();
        assert_eq!(tile.glyph(), before);
    }

    #[test]
    fn revealed_mine_shows_explosion_and_spreads_like_any_tile() {
        let mut lone = Tile::new((0, 0), true);
        let mut crowded = Tile::new((0, 1), true);

        assert!(lone.reveal(0));
        assert!(!crowded.reveal(3));
        assert!(lone.is_revealed());
        assert_eq!(lone.glyph(), Glyph::Exploded);
        assert_eq!(crowded.glyph(), Glyph::Exploded);
    }

    #[test]
    fn glyph_chars() {
        assert_eq!(Glyph::Hidden.as_char(), '*');
        assert_eq!(Glyph::Flag.as_char(), 'F');
        assert_eq!(Glyph::Blank.as_char(), '_');
        assert_eq!(Glyph::Exploded.as_char(), 'X');
        assert_eq!(Glyph::Count(7).as_char(), '7');
    }
}
