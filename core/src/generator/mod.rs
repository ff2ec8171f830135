use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides where the mines of a new board go.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
