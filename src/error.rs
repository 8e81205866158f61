use crate::{Coords, TermInt};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Grid size must be positive, got {0}")]
    InvalidGridSize(i16),
    #[error("The initial snake has no cells")]
    EmptySnake,
    #[error("The {what} at {cell:?} lies outside a {grid_size}x{grid_size} grid")]
    OutOfBounds { what: &'static str, cell: Coords, grid_size: i16 },
    #[error("Terminal is {actual:?}, the board needs at least {needed:?}")]
    TerminalTooSmall { needed: (TermInt, TermInt), actual: (TermInt, TermInt) },
    #[error("There was a problem talking to the terminal")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Could not start the logger")]
    Logger(#[from] log::SetLoggerError),
}
