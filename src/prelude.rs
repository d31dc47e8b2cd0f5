//! Common types re-exported for convenience.

pub use crate::board::{Bitboard, Board, BoardError, MoveList, Player, TileColor};
pub use crate::search::{SearchAgent, SearchError, SearchStats};
