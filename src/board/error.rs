use thiserror::Error;

use super::color::TileColor;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot build a {rows}x{cols} board, it must hold between 2 and 64 tiles")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Expected {expected} tile colors, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
    #[error("Invalid tile color: {token:?}")]
    InvalidColor { token: char },
    #[error("Every row of the board must have the same number of tiles")]
    RaggedRows,
    #[error("Cannot move to {color}, it is the color of a starting tile")]
    IllegalMove { color: TileColor },
    #[error("Cannot move, every tile is already owned")]
    GameOver,
}
