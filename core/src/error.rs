use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one row")]
    NoRows,
    #[error("Board needs at least one column")]
    NoCols,
    #[error("Chance of a lit cell must be within 0 and 1")]
    ChanceOutOfRange,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game already won, no new moves are accepted")]
    AlreadyWon,
}

pub type Result<T> = core::result::Result<T, GameError>;
