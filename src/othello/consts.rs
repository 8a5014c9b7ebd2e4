use std::ops::Neg;
use crate::utils::prelude::*;

pub const BOARD_SIZE: usize = 8;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The search depth the automated player uses unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

// A disc colour. The discriminants double as the signed cell tally.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    Black = 1,
    White = -1,
}

impl Player {
    /// Notates the player.
    pub fn notate(&self) -> String {
        match self {
            Player::Black => "B",
            Player::White => "W"
        }.into()
    }

    /// The given player's scoring factor.
    /// Choosing 1 and -1 makes the board sum a disc differential in Black's favour.
    pub fn perspective(&self) -> i32 {
        *self as i8 as i32
    }

    /// Parses into a player, where `None` is an empty cell.
    pub fn parse(s: &str) -> Result<Option<Player>> {
        match s {
            "b" | "B" | "x" | "X" => Ok(Some(Player::Black)),
            "w" | "W" | "o" | "O" => Ok(Some(Player::White)),
            "_" | "-" | "."       => Ok(None),
            _                     => Err(anyhow!("invalid notation {s} for player"))
        }
    }

    /// The display character of an optional player; used for printing cells.
    pub fn repr(player: Option<Player>) -> String {
        player.map_or(".".into(), |p| p.notate())
    }
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = Error;
    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
             1 => Ok(Player::Black),
            -1 => Ok(Player::White),
             _ => Err(anyhow!("expected a disc value of 1 or -1, received {value}")),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            _       => Player::parse(s)?.ok_or(anyhow!("{s} does not name a player"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn negation_is_the_opponent() {
        assert_eq!(-Player::Black, Player::White);
        assert_eq!(-Player::White, Player::Black);
        assert_eq!(Player::Black.perspective(), -Player::White.perspective());
    }

    #[test]
    fn parses_names_and_symbols() {
        assert_eq!("black".parse::<Player>().unwrap(), Player::Black);
        assert_eq!("W".parse::<Player>().unwrap(), Player::White);
        assert!(".".parse::<Player>().is_err());
        assert_eq!(Player::parse(".").unwrap(), None);
        assert!(Player::try_from(0).is_err());
    }
}
