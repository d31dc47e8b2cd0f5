//! Play command - play a game against the computer.

use filler::game::mode::HumanVsComputer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, starting_position};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "10")]
    pub depth: u8,
    #[structopt(short, long)]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, starting_position(self.seed));
        run_game_loop(HumanVsComputer, config);
    }
}
