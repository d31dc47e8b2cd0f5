pub mod bitboard;
pub mod color;
pub mod error;
pub mod generator;
pub mod player;


use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::Rng;
use smallvec::SmallVec;

pub use bitboard::Bitboard;
pub use color::{TileColor, PALETTE_SIZE};
pub use error::BoardError;
pub use player::Player;

pub const ROWS: usize = 8;
pub const COLS: usize = 7;
pub const MAX_TILES: usize = 64;

/// Moves in palette order.
pub type MoveList = SmallVec<[TileColor; PALETTE_SIZE]>;

/// The territory board: a grid of tile colors plus the tiles each player owns.
///
/// `Board` is `Copy`. Applying a move never mutates the receiver; it returns a
/// new board, so search branches can diverge from a shared parent freely.
/// Tiles are indexed `row * cols + col` with row 0 at the top.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    colors: [TileColor; MAX_TILES],
    territory: [Bitboard; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::random()
    }
}

impl Board {
    /// A standard 8x7 board with a fresh random coloring.
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    pub fn random_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colors = generator::random_colors(ROWS, COLS, rng);
        Self::seeded(ROWS, COLS, colors)
    }

    /// Builds a board from an explicit row-major grid. The grid is not checked
    /// for same-colored neighbors.
    pub fn from_colors(rows: usize, cols: usize, colors: &[TileColor]) -> Result<Self, BoardError> {
        let tile_count = rows * cols;
        if rows == 0 || cols == 0 || tile_count < 2 || tile_count > MAX_TILES {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        if colors.len() != tile_count {
            return Err(BoardError::TileCountMismatch {
                expected: tile_count,
                actual: colors.len(),
            });
        }

        let mut grid = [TileColor::Red; MAX_TILES];
        grid[..tile_count].copy_from_slice(colors);
        Ok(Self::seeded(rows, cols, grid))
    }

    /// Gives the human the bottom-left corner and the computer the top-right.
    fn seeded(rows: usize, cols: usize, colors: [TileColor; MAX_TILES]) -> Self {
        let mut territory = [Bitboard::EMPTY; 2];
        territory[Player::Human.index()] = Bitboard::tile((rows - 1) * cols);
        territory[Player::Computer.index()] = Bitboard::tile(cols - 1);
        Self {
            rows,
            cols,
            colors,
            territory,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn color_at(&self, row: usize, col: usize) -> TileColor {
        self.colors[row * self.cols + col]
    }

    pub fn owner_at(&self, row: usize, col: usize) -> Option<Player> {
        let index = row * self.cols + col;
        Player::ALL
            .iter()
            .copied()
            .find(|player| self.territory[player.index()].contains(index))
    }

    pub fn territory(&self, player: Player) -> Bitboard {
        self.territory[player.index()]
    }

    pub fn unowned(&self) -> Bitboard {
        let owned = self.territory[0] | self.territory[1];
        Bitboard::first(self.tile_count()) & !owned
    }

    pub fn owned_count(&self, player: Player) -> usize {
        self.territory(player).count_ones() as usize
    }

    pub fn unowned_count(&self) -> usize {
        self.unowned().count_ones() as usize
    }

    /// Recolors every tile `player` owns to `color`, then captures each
    /// unowned orthogonal neighbor of those tiles that now matches `color`.
    ///
    /// Capture reaches exactly one tile outward from the territory held before
    /// the move. A tile captured here does not capture its own neighbors until
    /// a later move, even if they share the color.
    ///
    /// Anchor colors and finished boards are not rejected here; see
    /// [`Board::try_apply_move`].
    pub fn apply_move(&self, color: TileColor, player: Player) -> Board {
        let mut next = *self;
        let territory = self.territory(player);

        for tile in territory.iter() {
            next.colors[tile] = color;
        }

        let unowned = next.unowned();
        let mut captured = Bitboard::EMPTY;
        for tile in territory.iter() {
            for neighbor in self.neighbors(tile) {
                if unowned.contains(neighbor) && next.colors[neighbor] == color {
                    captured |= Bitboard::tile(neighbor);
                }
            }
        }

        trace!(
            "{} plays {}, captures {} tiles",
            player,
            color,
            captured.count_ones()
        );
        next.territory[player.index()] |= captured;
        next
    }

    /// [`Board::apply_move`], refusing anchor colors and finished boards.
    pub fn try_apply_move(&self, color: TileColor, player: Player) -> Result<Board, BoardError> {
        if self.is_terminal() {
            return Err(BoardError::GameOver);
        }
        let (human_anchor, computer_anchor) = self.starting_anchor_colors();
        if color == human_anchor || color == computer_anchor {
            return Err(BoardError::IllegalMove { color });
        }
        Ok(self.apply_move(color, player))
    }

    /// The palette minus the current colors of both anchor tiles. The result
    /// is the same for either player.
    pub fn legal_moves(&self, _player: Player) -> MoveList {
        let (human_anchor, computer_anchor) = self.starting_anchor_colors();
        TileColor::ALL
            .iter()
            .copied()
            .filter(|color| *color != human_anchor && *color != computer_anchor)
            .collect()
    }

    /// Colors that would capture at least one tile for `player` right now:
    /// the colors of unowned tiles bordering its territory, minus both anchor
    /// colors.
    pub fn good_moves(&self, player: Player) -> MoveList {
        let unowned = self.unowned();
        let mut seen = [false; PALETTE_SIZE];

        for tile in self.territory(player).iter() {
            for neighbor in self.neighbors(tile) {
                if unowned.contains(neighbor) {
                    seen[self.colors[neighbor].index()] = true;
                }
            }
        }

        let (human_anchor, computer_anchor) = self.starting_anchor_colors();
        seen[human_anchor.index()] = false;
        seen[computer_anchor.index()] = false;

        TileColor::ALL
            .iter()
            .copied()
            .filter(|color| seen[color.index()])
            .collect()
    }

    /// Tiles owned by `player` minus tiles owned by the opponent.
    pub fn score(&self, player: Player) -> i32 {
        self.owned_count(player) as i32 - self.owned_count(player.opposite()) as i32
    }

    pub fn is_terminal(&self) -> bool {
        self.unowned().is_empty()
    }

    /// The current colors of the human's and the computer's anchor tiles, in
    /// that order. Anchors are the bottom-left and top-right corners; whichever
    /// of the two the human owns is reported first.
    pub fn starting_anchor_colors(&self) -> (TileColor, TileColor) {
        let bottom_left = (self.rows - 1) * self.cols;
        let top_right = self.cols - 1;

        if self.territory(Player::Human).contains(bottom_left) {
            (self.colors[bottom_left], self.colors[top_right])
        } else {
            (self.colors[top_right], self.colors[bottom_left])
        }
    }

    fn neighbors(&self, tile: usize) -> SmallVec<[usize; 4]> {
        let (row, col) = (tile / self.cols, tile % self.cols);
        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push(tile - self.cols);
        }
        if row + 1 < self.rows {
            neighbors.push(tile + self.cols);
        }
        if col > 0 {
            neighbors.push(tile - 1);
        }
        if col + 1 < self.cols {
            neighbors.push(tile + 1);
        }
        neighbors
    }

    /// Adds tiles to a player's territory directly, for setting up positions
    /// that would take many moves to reach.
    #[cfg(test)]
    pub(crate) fn with_territory(mut self, player: Player, tiles: &[usize]) -> Self {
        for tile in tiles {
            self.territory[player.index()] |= Bitboard::tile(*tile);
        }
        self
    }
}

/// Rows of color tokens separated by `/` or newlines, top row first, e.g.
/// `rgb/gbr`.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let mut colors = Vec::with_capacity(MAX_TILES);
        let mut cols = None;
        let mut rows = 0;

        for line in layout.split(|c: char| c == '/' || c == '\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut width = 0;
            for token in line.chars().filter(|c| !c.is_whitespace()) {
                let color = TileColor::from_char(token).ok_or(BoardError::InvalidColor { token })?;
                colors.push(color);
                width += 1;
            }

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => return Err(BoardError::RaggedRows),
                Some(_) => (),
            }
            rows += 1;
        }

        Board::from_colors(rows, cols.unwrap_or(0), &colors)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let token = self.color_at(row, col).to_char();
                let token = match self.owner_at(row, col) {
                    Some(_) => token.to_ascii_uppercase(),
                    None => token,
                };
                write!(f, "{}", token)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
