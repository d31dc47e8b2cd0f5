use std::fmt;
use std::str::FromStr;

pub const PALETTE_SIZE: usize = 6;

/// A tile color. The discriminant is the palette index, which also fixes the
/// order in which move lists are produced.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum TileColor {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
    Purple = 4,
    White = 5,
}

impl TileColor {
    pub const ALL: [TileColor; PALETTE_SIZE] = [
        TileColor::Red,
        TileColor::Green,
        TileColor::Yellow,
        TileColor::Blue,
        TileColor::Purple,
        TileColor::White,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The single-letter token used for input and for board layouts.
    pub fn to_char(&self) -> char {
        match self {
            TileColor::Red => 'r',
            TileColor::Green => 'g',
            TileColor::Yellow => 'y',
            TileColor::Blue => 'b',
            TileColor::Purple => 'p',
            TileColor::White => 'w',
        }
    }

    pub fn from_char(token: char) -> Option<Self> {
        match token.to_ascii_lowercase() {
            'r' => Some(TileColor::Red),
            'g' => Some(TileColor::Green),
            'y' => Some(TileColor::Yellow),
            'b' => Some(TileColor::Blue),
            'p' => Some(TileColor::Purple),
            'w' => Some(TileColor::White),
            _ => None,
        }
    }

    pub fn to_emoji(&self) -> &'static str {
        match self {
            TileColor::Red => "🟥",
            TileColor::Green => "🟩",
            TileColor::Yellow => "🟨",
            TileColor::Blue => "🟦",
            TileColor::Purple => "🟪",
            TileColor::White => "⬜",
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            TileColor::Red => "red",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Blue => "blue",
            TileColor::Purple => "purple",
            TileColor::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

type ParseError = &'static str;
impl FromStr for TileColor {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let mut chars = color.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(token), None) => TileColor::from_char(token),
            _ => None,
        };
        if let Some(tile_color) = single {
            return Ok(tile_color);
        }

        TileColor::ALL
            .iter()
            .copied()
            .find(|tile_color| tile_color.to_string() == color.to_ascii_lowercase())
            .ok_or("invalid color; options are: r, g, y, b, p, w")
    }
}
