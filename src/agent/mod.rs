mod evaluator;
mod search;

use crate::othello::prelude::*;

pub use evaluator::{DiscDifferential, Evaluation, Evaluator, BEST_EVAL, WORST_EVAL};
pub use search::{AlphaBeta, TerminalRule};

/// The automated Othello player.
pub struct OthelloAgent {
    strategy: AlphaBeta<DiscDifferential>,
    depth: u8,
}

impl OthelloAgent {
    /// Chooses the move `player` should make on `board`, or `None` if they have to pass.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        self.strategy.choose_move(board, player, self.depth)
    }

    /// Generates the best move for the side to move in a game.
    pub fn generate_move(&mut self, game: &Game) -> Option<Coord> {
        self.choose_move(game.board(), game.player_to_move())
    }

    /// Configures the depth of the search.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn max_depth(&self) -> u8 {
        self.depth
    }

    /// The number of nodes the last move choice visited.
    pub fn nodes_visited(&self) -> u64 {
        self.strategy.nodes_visited()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AgentConfig {
    pub depth: u8,
    pub rule: TerminalRule,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            rule: TerminalRule::default(),
        }
    }
}

impl AgentConfig {
    /// Gets the default configuration for the engine.
    pub fn new() -> AgentConfig {
        AgentConfig::default()
    }

    /// Produces an agent.
    pub fn get_agent(&self) -> OthelloAgent {
        OthelloAgent {
            strategy: AlphaBeta::new(DiscDifferential, self.rule),
            depth: self.depth,
        }
    }
}

/// Chooses `player`'s move on `board` with the default configuration: a depth 4 search scored
/// by disc differential. `None` means the player has no legal move and must pass.
pub fn choose_move(board: &Board, player: Player) -> Option<Coord> {
    AgentConfig::default().get_agent().choose_move(board, player)
}
