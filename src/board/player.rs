use std::fmt;
use std::str::FromStr;

/// The two sides. `Human` starts in the bottom-left corner and minimizes;
/// `Computer` starts in the top-right corner and maximizes.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    Human = 0,
    Computer = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    pub fn opposite(&self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::Computer => true,
            Player::Human => false,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<u8> for Player {
    fn from(value: u8) -> Self {
        match value {
            0 => Player::Human,
            1 => Player::Computer,
            _ => panic!("Invalid player value: {} (must be 0 or 1)", value),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player as u8
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Human => "human",
            Player::Computer => "computer",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "0" | "human" => Ok(Player::Human),
            "1" | "computer" => Ok(Player::Computer),
            _ => Err("invalid player; options are: 0 (human), 1 (computer)"),
        }
    }
}
