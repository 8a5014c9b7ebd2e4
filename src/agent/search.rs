use std::time::Instant;

use crate::othello::prelude::*;

use super::evaluator::{Evaluation, Evaluator, BEST_EVAL, WORST_EVAL};

/// Which player's moves a search node looks at, both to decide it is terminal and to expand it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminalRule {
    /// Every node expands the moves of the side actually to move there.
    #[default]
    SideToMove,
    /// Every node expands the root player's moves, played by whichever side the node belongs to.
    /// A node is terminal once the root player has no move, even where the opponent is to move.
    RootPlayer,
}

/// A fixed-depth minimax searcher with alpha-beta pruning.
///
/// Every expanded move is played on a fresh copy of its parent's board, so no branch can observe
/// another's board. Leaves are always scored from the root player's perspective; this is sound
/// because the disc differential is zero-sum, so minimizing nodes need no sign flip.
pub struct AlphaBeta<E: Evaluator> {
    evaluator: E,
    rule: TerminalRule,
    nodes_visited: u64,
}

impl<E: Evaluator> AlphaBeta<E> {
    pub fn new(evaluator: E, rule: TerminalRule) -> Self {
        AlphaBeta { evaluator, rule, nodes_visited: 0 }
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    pub fn rule(&self) -> TerminalRule {
        self.rule
    }

    /// Scores `board` `depth` plies deep for `root`, where a maximizing node has `root` to move.
    ///
    /// With the full window (`WORST_EVAL`, `BEST_EVAL`) the result equals `minimax` to the same depth.
    pub fn search(
        &mut self, board: &Board, depth: u8, alpha: Evaluation, beta: Evaluation, maximizing: bool, root: Player,
    ) -> Evaluation {
        self.nodes_visited += 1;

        let mover = if maximizing { root } else { -root };
        let moves = self.expand(board, depth, mover, root);
        if moves.is_empty() {
            return self.evaluator.evaluate(board, root);
        }

        let [mut alpha, mut beta] = [alpha, beta];
        if maximizing {
            let mut best = WORST_EVAL;
            for mv in moves {
                let mut child = *board;
                child.apply_move(&mv, mover);
                let value = self.search(&child, depth - 1, alpha, beta, false, root);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break; // beta cut-off
                }
            }
            best
        } else {
            let mut best = BEST_EVAL;
            for mv in moves {
                let mut child = *board;
                child.apply_move(&mv, mover);
                let value = self.search(&child, depth - 1, alpha, beta, true, root);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break; // alpha cut-off
                }
            }
            best
        }
    }

    /// Exhaustive minimax without pruning, over the same tree `search` explores.
    pub fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool, root: Player) -> Evaluation {
        self.nodes_visited += 1;

        let mover = if maximizing { root } else { -root };
        let moves = self.expand(board, depth, mover, root);
        if moves.is_empty() {
            return self.evaluator.evaluate(board, root);
        }

        let values = moves.into_iter().map(|mv| {
            let mut child = *board;
            child.apply_move(&mv, mover);
            self.minimax(&child, depth - 1, !maximizing, root)
        }).collect::<Vec<Evaluation>>();
        let best = match maximizing {
            true => values.into_iter().max(),
            _    => values.into_iter().min(),
        };
        best.unwrap_or(WORST_EVAL) // unreachable, `moves` is non-empty
    }

    /// Picks the move for `player` whose reply tree scores best. Each move is searched with the full
    /// window, and only a strictly better score replaces the incumbent, so ties go to the earliest
    /// move in row-major order.
    pub fn choose_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Coord> {
        let start = Instant::now();
        self.nodes_visited = 0;

        let mut best: Option<(Coord, Evaluation)> = None;
        let mut alpha = WORST_EVAL; // bookkeeping only; every move is searched with the full window
        for mv in board.valid_moves(player) {
            let mut child = *board;
            child.apply_move(&mv, player);
            let value = self.search(&child, depth, WORST_EVAL, BEST_EVAL, false, player);
            log::trace!("{} {} scores {} (alpha {})", player, mv, value, alpha);

            if best.is_none_or(|(_, incumbent)| value > incumbent) {
                best = Some((mv, value));
            }
            alpha = alpha.max(value);
        }

        let elapsed = start.elapsed();
        match best {
            Some((mv, value)) => log::debug!(
                "{} chose {} scoring {} after {} nodes in {:?} ({:.2e} nps)",
                player, mv, value, self.nodes_visited, elapsed,
                self.nodes_visited as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
            ),
            None => log::debug!("{} has no move to choose from", player),
        }
        best.map(|(mv, _)| mv)
    }

    /// The moves a node expands; none at all makes it a leaf.
    fn expand(&self, board: &Board, depth: u8, mover: Player, root: Player) -> Vec<Coord> {
        if depth == 0 {
            return vec![];
        }
        match self.rule {
            TerminalRule::SideToMove => board.valid_moves(mover),
            TerminalRule::RootPlayer => board.valid_moves(root),
        }
    }
}
