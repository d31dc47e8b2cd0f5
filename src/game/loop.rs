use log::warn;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::input_handler::InputError;

use super::mode::GameMode;

pub struct GameLoop<T: GameMode> {
    engine: Engine,
    ui: GameDisplay,
    mode: T,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            mode,
        }
    }

    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.turn();

            if let Some(ending) = self.engine.check_game_over() {
                self.mode.render(&mut self.ui, &self.engine, current_turn);
                println!("{}", self.mode.describe_ending(&ending));
                break;
            }

            self.mode.render(&mut self.ui, &self.engine, current_turn);

            let input = match self.mode.get_move(current_turn) {
                Ok(input) => input,
                Err(InputError::UserExit) => {
                    println!("Game quit successfully.");
                    break;
                }
                Err(error) => {
                    self.ui.set_status(format!("{}", error));
                    continue;
                }
            };

            match self.engine.make_move_from_input(input) {
                Ok(_) => {
                    self.engine.toggle_turn();
                    if let Some(delay) = self.mode.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(EngineError::SearchError { error }) => {
                    warn!("{} has no move ({}), passing", current_turn, error);
                    self.engine.toggle_turn();
                }
                Err(error) => {
                    let moves: Vec<String> = self
                        .engine
                        .legal_moves()
                        .iter()
                        .map(|c| c.to_string())
                        .collect();
                    self.ui
                        .set_status(format!("{}. Try one of: {}", error, moves.join(", ")));
                }
            }
        }
    }
}
