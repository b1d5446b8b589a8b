use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {width}x{height}, the card count must be even and non-zero")]
    InvalidBoardSize { width: Coord, height: Coord },
    #[error("Unrecognized board size {0:?}")]
    UnknownBoardSize(String),
    #[error("Not enough distinct images, {required} needed but only {available} available")]
    InsufficientAssets {
        required: CellCount,
        available: usize,
    },
    #[error("Deck does not pair every image exactly twice")]
    InvalidDeck,
    #[error("A game is in progress")]
    GameInProgress,
}

pub type Result<T> = core::result::Result<T, GameError>;
