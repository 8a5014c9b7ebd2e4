use crate::othello::prelude::*;

/// A cell on an Othello board, stored as a signed tally:
///     +1: a Black disc
///     -1: a White disc
///      0: empty
///
/// Negating a cell swaps the owner, and summing cells gives Black's disc differential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoardCell(i8);

impl BoardCell {
    pub const EMPTY: BoardCell = BoardCell(0);

    /// Produces the cell holding the given disc, if any.
    pub fn new(player: Option<Player>) -> BoardCell {
        BoardCell(player.map_or(0, |p| p as i8))
    }

    /// Determines the disc in this cell, if any.
    pub fn cell_value(&self) -> Option<Player> {
        Player::try_from(self.0).ok()
    }

    /// Whether or not the cell has no disc.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether the cell holds the given player's disc.
    pub fn holds(&self, player: Player) -> bool {
        self.0 == player as i8
    }

    /// The raw tally of the cell.
    pub fn tally(&self) -> i8 {
        self.0
    }

    /// Produces a new board cell with the disc flipped; empty cells stay empty.
    pub fn negated(&self) -> BoardCell {
        BoardCell(-self.0)
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Player::repr(self.cell_value()))
    }
}
