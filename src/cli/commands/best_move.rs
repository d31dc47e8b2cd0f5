//! Best move command - ask the search for a move on a given board.

use filler::board::{Board, Player};
use filler::game::engine::{Engine, EngineConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "10")]
    pub depth: u8,
    #[structopt(long = "board")]
    pub starting_position: Board,
    #[structopt(short, long, default_value = "1")]
    pub player: Player,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);
        if self.player != engine.turn() {
            engine.toggle_turn();
        }

        match engine.get_best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
