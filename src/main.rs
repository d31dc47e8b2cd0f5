mod cli;

use cli::commands::Command;
use cli::Filler;
use structopt::StructOpt;

fn main() {
    #[cfg(feature = "instrumentation")]
    filler::instrumentation::init_tracing();
    #[cfg(not(feature = "instrumentation"))]
    env_logger::init();

    Filler::from_args().execute();
}
