use crate::othello::prelude::*;

/// A static evaluation, always relative to some player.
pub type Evaluation = i32;

/// Stands in for negative infinity; a real evaluation is always strictly greater.
pub const WORST_EVAL: Evaluation = -i32::MAX;

/// Stands in for positive infinity.
pub const BEST_EVAL: Evaluation = i32::MAX;

/// Scores a board for a player without looking ahead.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> Evaluation;
}

#[derive(Clone, Copy, Debug, Default)]
/// The disc differential: the player's discs minus the opponent's. No positional weighting.
pub struct DiscDifferential;

impl Evaluator for DiscDifferential {
    fn evaluate(&self, board: &Board, player: Player) -> Evaluation {
        board.disc_differential(player)
    }
}
