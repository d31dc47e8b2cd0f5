use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, BoardError, MoveList, Player, TileColor};
use crate::input_handler::MoveInput;
use crate::search::{SearchAgent, SearchError, SearchStats};

/// Deepest search that still answers without a noticeable wait.
pub const DEFAULT_SEARCH_DEPTH: u8 = 10;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            starting_position: Board::random(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum GameEnding {
    Win(Player),
    Tie,
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Invalid move: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Game state plus the search agent that plays for whichever side asks.
pub struct Engine {
    board: Board,
    turn: Player,
    move_history: Vec<(Player, TileColor)>,
    agent: SearchAgent,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The human always moves first.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: Player::Human,
            move_history: Vec::new(),
            agent: SearchAgent::new(config.search_depth),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    pub fn last_move(&self) -> Option<(Player, TileColor)> {
        self.move_history.last().copied()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.turn)
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        if !self.board.is_terminal() {
            return None;
        }

        let ending = match self.board.score(Player::Human) {
            score if score > 0 => GameEnding::Win(Player::Human),
            score if score < 0 => GameEnding::Win(Player::Computer),
            _ => GameEnding::Tie,
        };
        info!("game over: {:?}", ending);
        Some(ending)
    }

    /// Plays `color` for the side to move. Anchor colors are refused.
    pub fn make_move(&mut self, color: TileColor) -> Result<(), EngineError> {
        self.board = self
            .board
            .try_apply_move(color, self.turn)
            .map_err(|error| EngineError::BoardError { error })?;
        self.move_history.push((self.turn, color));
        debug!("{} played {}", self.turn, color);
        Ok(())
    }

    pub fn get_best_move(&mut self) -> Result<TileColor, EngineError> {
        self.agent
            .search(&self.board, self.turn)
            .map_err(|error| EngineError::SearchError { error })
    }

    pub fn make_best_move(&mut self) -> Result<TileColor, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<TileColor, EngineError> {
        match input {
            MoveInput::Color(color) => {
                self.make_move(color)?;
                Ok(color)
            }
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        self.agent.stats().clone()
    }

    pub fn search_depth(&self) -> u8 {
        self.agent.max_depth()
    }
}
