use super::*;

impl Board {
    /// Gets the naive score on the board in Black's perspective: the sum of every cell's tally.
    pub fn score(&self) -> i32 {
        self.cells.0.iter().map(|row| {
            row.iter().map(|cell| cell.tally() as i32).sum::<i32>()
        }).sum::<i32>()
    }

    /// The disc differential in `player`'s favour.
    pub fn disc_differential(&self, player: Player) -> i32 {
        self.score() * player.perspective()
    }
}
