use crate::othello::prelude::*;

impl Board {
    /// Determines whether `player` may place a disc at `coord`. The coordinate must be on the board
    /// and empty, and at least one direction must bracket a run of opponent discs. Directions are
    /// tried in the order of `DIRECTIONS` and the first bracketing ray settles it.
    pub fn is_valid_move(&self, coord: &Coord, player: Player) -> bool {
        if !self.get(coord).is_ok_and(|cell| cell.is_empty()) {
            return false;
        }
        DIRECTIONS.iter().any(|direction| self.brackets(coord, direction, player) > 0)
    }

    /// The length of the run of opponent discs that `player` brackets along one ray from `coord`,
    /// or 0 if the ray holds no opponent disc next to `coord`, or ends at an empty cell or the edge.
    pub(super) fn brackets(&self, coord: &Coord, direction: &OffsetCoord, player: Player) -> usize {
        let mut run = 0;
        for c in Ray::new(coord, direction) {
            let cell = self.get_unchecked(&c);
            if cell.holds(-player) {
                run += 1;
            } else if cell.holds(player) {
                return run;
            } else {
                return 0;
            }
        }
        0 // fell off the board
    }
}
