#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size as `(rows, cols)`.
    pub size: Coord2,
    /// Chance of each cell starting lit.
    pub chance_lit: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, chance_lit: f64) -> Self {
        Self { size, chance_lit }
    }

    pub fn new(size: Coord2, chance_lit: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, chance_lit);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 {
            return Err(ConfigError::NoRows.into());
        }
        if self.size.1 == 0 {
            return Err(ConfigError::NoCols.into());
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.chance_lit) {
            return Err(ConfigError::ChanceOutOfRange.into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((5, 5), 0.25)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    Flipped,
    Won,
}
