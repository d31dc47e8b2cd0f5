//! Depth-limited minimax over the territory board.
//!
//! The agent is a stateless recursive walk: each level applies a candidate
//! color to a copy of the board and asks the same routine to answer for the
//! other player one level deeper. Scores are always from the point of view of
//! the player to move at that level, so a child's score is negated on the way
//! up.
//!
//! # Candidates
//! Only the "good" moves (colors that capture right now) are searched. When a
//! player has none, the first legal color stands in as the single candidate.
//! Candidates are visited in palette order and ties keep the earliest one.
//!
//! # Pruning
//! The computer is always the maximizer and the human always the minimizer,
//! whichever player the search starts from. A computer level stops once its
//! best score exceeds `beta` and otherwise raises `alpha`; a human level stops
//! once its best score drops below `alpha` and otherwise lowers `beta`. The
//! window is handed to children as is.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, MoveList, Player, TileColor};

#[cfg(test)]
mod tests;

pub const INFINITY: i32 = i32::MAX;
pub const NEG_INFINITY: i32 = -INFINITY;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Statistics collected during the last search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

pub struct SearchAgent {
    max_depth: u8,
    stats: SearchStats,
}

impl SearchAgent {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            stats: SearchStats::default(),
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Finds the best color for `player` from the top of the tree with a full
    /// window.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn search(&mut self, board: &Board, player: Player) -> Result<TileColor, SearchError> {
        self.reset_stats();
        let start = Instant::now();

        let (best_move, best_score) = self.choose_move(board, player, 0, NEG_INFINITY, INFINITY);

        self.stats.last_search_duration = Some(start.elapsed());
        debug!(
            "search for {} at max depth {}: {:?} scoring {} ({} positions, {} cutoffs)",
            player,
            self.max_depth,
            best_move,
            best_score,
            self.stats.positions_searched,
            self.stats.cutoffs
        );

        let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
        self.stats.last_score = Some(best_score);
        Ok(best_move)
    }

    /// Returns the best move for `player` and its score from `player`'s point
    /// of view. `depth` counts up from the root; at `max_depth` candidates are
    /// scored directly instead of searched. Returns `(None, NEG_INFINITY)` when
    /// there is nothing to play.
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<TileColor>, i32) {
        self.stats.positions_searched += 1;

        let mut best_move = None;
        let mut best_score = NEG_INFINITY;

        for color in candidate_moves(board, player) {
            let next = board.apply_move(color, player);

            let score = if depth >= self.max_depth {
                next.score(player)
            } else {
                let (_, opponent_score) =
                    self.choose_move(&next, player.opposite(), depth + 1, alpha, beta);
                -opponent_score
            };

            if score > best_score {
                best_move = Some(color);
                best_score = score;
            }

            if player.maximize_score() {
                if best_score > beta {
                    self.stats.cutoffs += 1;
                    break;
                }
                alpha = max(alpha, best_score);
            } else {
                if best_score < alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
                beta = min(beta, best_score);
            }
        }

        (best_move, best_score)
    }
}

/// The good moves for `player`, or the first legal move if there are none.
pub fn candidate_moves(board: &Board, player: Player) -> MoveList {
    let good_moves = board.good_moves(player);
    if !good_moves.is_empty() {
        return good_moves;
    }
    board.legal_moves(player).into_iter().take(1).collect()
}
