use ndarray::Array2;

use super::*;

/// Lights every cell independently with the configured chance.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        // skip the rng for the degenerate chances
        if config.chance_lit <= 0.0 {
            return Board::unlit(config.size);
        }
        if config.chance_lit >= 1.0 {
            log::debug!("Every cell starts lit, board is already solved");
            return Board::all_lit(config.size);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells = Array2::from_shape_simple_fn(config.size.to_nd_index(), || {
            rng.random_bool(config.chance_lit)
        });
        let board = Board::from_cells(cells)?;

        log::trace!(
            "Generated {:?} board with {} of {} cells lit",
            config.size,
            board.lit_count(),
            board.total_cells()
        );
        Ok(board)
    }
}
