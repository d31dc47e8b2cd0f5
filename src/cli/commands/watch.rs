//! Watch command - watch the computer play against itself.

use std::time::Duration;

use filler::game::mode::ComputerVsComputer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, starting_position};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "10")]
    pub depth: u8,
    #[structopt(short, long)]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, starting_position(self.seed));
        run_game_loop(
            ComputerVsComputer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
