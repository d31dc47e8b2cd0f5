use std::time::Duration;

use crate::board::Player;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, GameEnding};
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait GameMode {
    fn get_move(&self, current_turn: Player) -> Result<MoveInput, InputError>;
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
    fn describe_ending(&self, ending: &GameEnding) -> String;
}

pub struct HumanVsComputer;

pub struct ComputerVsComputer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        engine.search_depth(),
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

impl GameMode for HumanVsComputer {
    fn get_move(&self, current_turn: Player) -> Result<MoveInput, InputError> {
        match current_turn {
            Player::Human => parse_move_input(),
            Player::Computer => Ok(MoveInput::UseEngine),
        }
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            ("You", "Opponent"),
            engine.last_move(),
            Some(&stats),
        );
        if current_turn == Player::Human {
            let moves: Vec<String> = engine.legal_moves().iter().map(|c| c.to_string()).collect();
            println!("Enter your move ({}), or q to quit:", moves.join(", "));
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn describe_ending(&self, ending: &GameEnding) -> String {
        match ending {
            GameEnding::Win(Player::Human) => "You win!".to_string(),
            GameEnding::Win(Player::Computer) => "You lose!".to_string(),
            GameEnding::Tie => "Tie!".to_string(),
        }
    }
}

impl GameMode for ComputerVsComputer {
    fn get_move(&self, _current_turn: Player) -> Result<MoveInput, InputError> {
        Ok(MoveInput::UseEngine)
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, _current_turn: Player) {
        let stats = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            ("Human side", "Computer side"),
            engine.last_move(),
            Some(&stats),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }

    fn describe_ending(&self, ending: &GameEnding) -> String {
        match ending {
            GameEnding::Win(player) => format!("The {} side wins!", player),
            GameEnding::Tie => "Tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endings() {
        assert_eq!(
            HumanVsComputer.describe_ending(&GameEnding::Win(Player::Human)),
            "You win!"
        );
        assert_eq!(
            HumanVsComputer.describe_ending(&GameEnding::Win(Player::Computer)),
            "You lose!"
        );
        let watch = ComputerVsComputer {
            delay_between_moves: None,
        };
        assert_eq!(
            watch.describe_ending(&GameEnding::Win(Player::Computer)),
            "The computer side wins!"
        );
        assert_eq!(watch.describe_ending(&GameEnding::Tie), "Tie!");
    }

    #[test]
    fn test_computer_turns_use_the_engine() {
        assert_eq!(
            HumanVsComputer.get_move(Player::Computer),
            Ok(MoveInput::UseEngine)
        );
        let watch = ComputerVsComputer {
            delay_between_moves: Some(Duration::from_millis(5)),
        };
        assert_eq!(watch.get_move(Player::Human), Ok(MoveInput::UseEngine));
        assert_eq!(watch.frame_delay(), Some(Duration::from_millis(5)));
    }
}
