use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "An Othello engine speaking a line-based text protocol on stdin")]
pub struct OTPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Plies the engine searches below each of its candidate moves.
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u8,

    /// Expand the engine's own moves at every search node and stop wherever it has none.
    #[arg(long, default_value_t = false)]
    pub legacy_search: bool,
}

impl OTPServerOptions {
    pub fn agent_config(&self) -> AgentConfig {
        let mut config = AgentConfig::default();

        config.depth = self.depth;
        if self.legacy_search {
            config.rule = TerminalRule::RootPlayer;
        }

        config
    }
}
