use std::fmt::Write;

use termion::{clear, color, cursor, style};

use crate::board::{Board, Player, TileColor};

fn ansi_value(tile_color: TileColor) -> color::AnsiValue {
    match tile_color {
        TileColor::Red => color::AnsiValue(1),
        TileColor::Green => color::AnsiValue(2),
        TileColor::Yellow => color::AnsiValue(3),
        TileColor::Blue => color::AnsiValue(4),
        TileColor::Purple => color::AnsiValue(5),
        TileColor::White => color::AnsiValue(7),
    }
}

fn owner_marker(owner: Option<Player>) -> &'static str {
    match owner {
        Some(Player::Human) => " H ",
        Some(Player::Computer) => " C ",
        None => "   ",
    }
}

pub struct GameDisplay {
    buffer: String,
    status: Option<String>,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
            status: None,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// A one-off message shown under the next frame, e.g. why a move was
    /// refused.
    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        labels: (&str, &str),
        last_move: Option<(Player, TileColor)>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.write_frame(board, labels, last_move, stats);
        print!("{}", self.buffer);
    }

    fn write_frame(
        &mut self,
        board: &Board,
        labels: (&str, &str),
        last_move: Option<(Player, TileColor)>,
        stats: Option<&str>,
    ) {
        let (human_label, computer_label) = labels;
        let _ = writeln!(self.buffer, "       SCORE");
        let _ = writeln!(
            self.buffer,
            "{}: {}   {}: {}\n",
            human_label,
            board.owned_count(Player::Human),
            computer_label,
            board.owned_count(Player::Computer)
        );

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let _ = write!(
                    self.buffer,
                    "{}{}{}{}",
                    color::Bg(ansi_value(board.color_at(row, col))),
                    color::Fg(color::Black),
                    owner_marker(board.owner_at(row, col)),
                    style::Reset
                );
            }
            self.buffer.push('\n');
        }
        self.buffer.push('\n');

        if let Some((player, tile_color)) = last_move {
            let label = match player {
                Player::Human => human_label,
                Player::Computer => computer_label,
            };
            let _ = writeln!(self.buffer, "Last move: {} played {}", label, tile_color);
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        if let Some(status) = self.status.take() {
            let _ = writeln!(self.buffer, "\n{}", status);
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
