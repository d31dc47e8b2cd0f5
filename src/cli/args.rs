//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "filler",
    about = "A two-player territory game played against a minimax search"
)]
pub enum Filler {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for its move at the given `--depth` (default: 10). You own the bottom-left corner and move first. Pass `--seed` to replay the same random board."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play both sides at the given `--depth` (default: 10), pausing `--delay-ms` between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the color the search picks for `--player` (default: 1, the computer) on a board given with `--board`, one letter per tile (r, g, y, b, p, w) and rows separated by `/`. Letters are case-insensitive and only the two corners start owned."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Filler {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
