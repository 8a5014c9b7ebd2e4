use super::BoardCell;
use crate::othello::prelude::*;

impl Board {
    /// Gets the board cell at a given coordinate.
    pub(super) fn get(&self, coord: &Coord) -> Result<BoardCell> {
        if coord.in_bounds() {
            Ok(self.cells.0[coord.row][coord.col])
        } else {
            Err(anyhow!(
                "invalid coordinate ({:02}, {:02})",
                coord.row,
                coord.col
            ))
        }
    }

    /// Gets a mutable reference to the board cell at a given coordinate.
    pub(super) fn get_mut(&mut self, coord: &Coord) -> Result<&mut BoardCell> {
        if coord.in_bounds() {
            Ok(&mut self.cells.0[coord.row][coord.col])
        } else {
            Err(anyhow!(
                "invalid coordinate ({:02}, {:02})",
                coord.row,
                coord.col
            ))
        }
    }
}

impl Board {
    /// Unchecked cell in the grid; engine use only. Callers produce coordinates from `Ray` or `Coord::all`.
    pub(super) fn get_unchecked(&self, coord: &Coord) -> &BoardCell {
        &self.cells.0[coord.row][coord.col]
    }

    /// Unchecked mutable reference into the grid; engine use only.
    pub(super) fn get_mut_unchecked(&mut self, coord: &Coord) -> &mut BoardCell {
        &mut self.cells.0[coord.row][coord.col]
    }
}
