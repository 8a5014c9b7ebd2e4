pub(crate) mod board_cell;
pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod pretty;
pub(crate) mod scores;
pub(crate) mod validity;

use super::prelude::*;

pub use board_cell::BoardCell;


/// The grid of cells on an Othello board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid(pub [[BoardCell; BOARD_SIZE]; BOARD_SIZE]);

impl Grid {
    pub fn notate(&self) -> String {
        self.0.map(|row| {
            row.map(|cell| Player::repr(cell.cell_value())).join("")
        }).join("")
    }
}

/// An 8x8 Othello board.
///
/// The board is nothing but its grid: whose turn it is, passes and history belong to the `Game`
/// driving it. Boards are `Copy`, so a search branch takes an independent board by dereferencing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// A grid of squares on the board, each containing a Black disc, a White disc, or nothing.
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Returns the canonical starting position: Black on (3,3) and (4,4), White on (3,4) and (4,3).
    pub fn new() -> Board {
        let mut cells = Grid::default();
        cells.0[3][3] = BoardCell::new(Some(Player::Black));
        cells.0[4][4] = BoardCell::new(Some(Player::Black));
        cells.0[3][4] = BoardCell::new(Some(Player::White));
        cells.0[4][3] = BoardCell::new(Some(Player::White));
        Board { cells }
    }

    /// Returns a board with an arbitrary arrangement of discs.
    pub fn from_grid(cells: Grid) -> Board {
        Board { cells }
    }

    /// Returns a board with no discs at all.
    pub fn empty() -> Board {
        Board { cells: Grid::default() }
    }

    /// Determines the disc at a given row and column on the board, if any exists.
    pub fn cell(&self, coord: &Coord) -> Result<Option<Player>> {
        self.get(coord).map(|v: BoardCell| v.cell_value())
    }

    /// Sets the disc at a given row and column on the board.
    pub fn set_cell(&mut self, coord: &Coord, cell: Option<Player>) -> Result<&mut Self> {
        let r = self.get_mut(coord)?;
        *r = BoardCell::new(cell);
        Ok(self)
    }

    /// The number of discs of the given colour on the board.
    pub fn count_discs(&self, player: Player) -> usize {
        self.cells.0.iter().flatten().filter(|cell| cell.holds(player)).count()
    }

    /// The number of cells without a disc.
    pub fn count_empty(&self) -> usize {
        self.cells.0.iter().flatten().filter(|cell| cell.is_empty()).count()
    }

    /// Returns the setup notation for the board, a 64 character row-major string.
    pub fn notate(&self) -> String {
        self.cells.notate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_the_canonical_position() {
        let board = Board::new();
        assert_eq!(board.cell(&Coord::new(3, 3)).unwrap(), Some(Player::Black));
        assert_eq!(board.cell(&Coord::new(4, 4)).unwrap(), Some(Player::Black));
        assert_eq!(board.cell(&Coord::new(3, 4)).unwrap(), Some(Player::White));
        assert_eq!(board.cell(&Coord::new(4, 3)).unwrap(), Some(Player::White));

        assert_eq!(board.count_discs(Player::Black), 2);
        assert_eq!(board.count_discs(Player::White), 2);
        assert_eq!(board.count_empty(), 60);

        let others = Coord::all()
            .filter(|c| !(3..=4).contains(&c.row) || !(3..=4).contains(&c.col))
            .all(|c| board.cell(&c).unwrap().is_none());
        assert!(others);
    }

    #[test]
    fn cell_access_is_bounds_checked() {
        let mut board = Board::empty();
        assert!(board.cell(&Coord::new(8, 0)).is_err());
        assert!(board.set_cell(&Coord::new(0, 8), Some(Player::Black)).is_err());

        board.set_cell(&Coord::new(7, 7), Some(Player::White)).unwrap();
        assert_eq!(board.count_discs(Player::White), 1);
        assert_eq!(board.count_empty(), NUM_CELLS - 1);
    }

    #[test]
    fn notates_row_major() {
        let notation = Board::new().notate();
        assert_eq!(notation.len(), NUM_CELLS);
        assert_eq!(&notation[24..32], "...BW...");
        assert_eq!(&notation[32..40], "...WB...");
    }
}
