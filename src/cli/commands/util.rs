//! Shared utilities for CLI commands.

use filler::board::Board;
use filler::game::engine::EngineConfig;
use filler::game::mode::GameMode;
use filler::game::r#loop::GameLoop;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub(crate) fn run_game_loop<T: GameMode>(mode: T, config: EngineConfig) {
    let mut game = GameLoop::new(mode, config);
    game.run();
}

/// A fresh random board, or the board for `seed` when one is given.
pub(crate) fn starting_position(seed: Option<u64>) -> Board {
    match seed {
        Some(seed) => {
            info!("generating board from seed {}", seed);
            Board::random_with_rng(&mut StdRng::seed_from_u64(seed))
        }
        None => Board::random(),
    }
}

pub(crate) fn create_config(depth: u8, starting_position: Board) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        starting_position,
    }
}
