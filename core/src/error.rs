use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines for the board size")]
    TooManyMines,
    #[error("Coordinates outside the board")]
    OutOfBounds,
}

pub type Result<T> = std::result::Result<T, GameError>;
