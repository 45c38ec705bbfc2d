use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    config: GameConfig,
    board: Board,
    state: EngineState,
    move_count: u32,
}

impl PlayEngine {
    /// Starts a game on a freshly generated board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let board = RandomBoardGenerator::new(seed).generate(config)?;
        Self::with_board(config, board)
    }

    /// Starts a game on a given board, which must match the configured size.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self> {
        config.validate()?;
        if board.size() != config.size {
            return Err(GameError::InvalidBoardShape);
        }

        let state = Self::state_of(&board);
        if state.is_won() {
            log::debug!("Board of size {:?} starts out solved", config.size);
        }

        Ok(Self {
            config,
            board,
            state,
            move_count: 0,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    pub fn lit_count(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn can_activate(&self) -> bool {
        !self.state.is_won()
    }

    /// Applies the flip rule at `coords` and re-evaluates the win condition.
    pub fn activate(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_playing()?;

        self.board = self.board.flip_cells_around(coords)?;
        self.move_count = self.move_count.saturating_add(1);
        self.state = Self::state_of(&self.board);
        log::trace!("activated {:?}, {} cells lit", coords, self.board.lit_count());

        Ok(if self.state.is_won() {
            log::debug!("Won after {} moves", self.move_count);
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }

    /// Throws away the current board for a fresh one with the same configuration.
    pub fn reset(&mut self, seed: u64) -> Result<EngineState> {
        self.board = RandomBoardGenerator::new(seed).generate(self.config)?;
        self.state = Self::state_of(&self.board);
        self.move_count = 0;
        log::debug!("Reset to a new board, state: {:?}", self.state);
        Ok(self.state)
    }

    fn state_of(board: &Board) -> EngineState {
        if board.has_won() {
            EngineState::Won
        } else {
            EngineState::Playing
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_won() {
            Err(GameError::AlreadyWon)
        } else {
            Ok(())
        }
    }
}
