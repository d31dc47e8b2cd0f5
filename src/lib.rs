pub mod board;
pub mod game;
pub mod input_handler;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod prelude;
pub mod search;
