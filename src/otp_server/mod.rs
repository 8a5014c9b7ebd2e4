mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::OTPServerOptions;

use crate::prelude::*;

/// Serves the Othello Text Protocol: one command per line in, a response terminated by `ok` out.
pub struct OTPServer<W: Write> {
    agent: OthelloAgent,
    game: Option<Game>,
    config: OTPServerOptions,
    out: W,
}

impl OTPServer<std::io::Stdout> {
    /// Produces a new OTP server on stdout with the given engine configuration.
    pub fn new(options: OTPServerOptions) -> OTPServer<std::io::Stdout> {
        OTPServer::with_writer(options, std::io::stdout())
    }
}

impl<W: Write> OTPServer<W> {
    /// Produces a new OTP server responding on the given writer.
    pub fn with_writer(options: OTPServerOptions, out: W) -> OTPServer<W> {
        OTPServer {
            agent: options.agent_config().get_agent(),
            game: None,
            config: options,
            out,
        }
    }

    /// Runs the engine over stdin until `quit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        self.serve(stdin.lock())
    }

    /// Runs the engine over any line source until `quit` or the end of input.
    pub fn serve(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.lines() {
            let cmdstr = line.context("failed to read a command")?;

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");
            if cmd == "quit" {
                log::info!("quitting");
                return Ok(());
            }

            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
        log::info!("input closed");
        Ok(())
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bestmove" => self.best_move(args),
            | "board" => self.board(args),
            | "go" => self.go(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "pass" => self.play_move(&["pass"]),
            | "play" => self.play_move(args),
            | "score" => self.score(args),
            | "selfplay" => self.self_play(args),
            | "status" => self.status(args),
            | "undo" => self.undo_move(args),
            | "validmoves" => self.valid_moves(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err:#}");
                self.err(&err)
            },
        }
    }

    /// Answers with the engine's move without playing it; `depth N` applies to this query only.
    fn best_move(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let mut query = self.config.agent_config();
        if args.len() >= 2 {
            match args[0] {
                "depth" => { query.depth = args[1].parse::<u8>()?; },
                _       => { return Err(anyhow!("unrecognized search option {}", args[0])); }
            };
        }
        let game = self.game.as_ref().ok_or(anyhow!("no game in progress"))?;
        let mv = query.get_agent().generate_move(game);

        let notation = mv.map_or("pass".into(), |c| c.notate());
        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    fn board(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let pretty = self.get().board().pretty();
        writeln!(self.out, "{}", pretty)?;
        Ok(())
    }

    /// Lets the engine choose and commit a move for the side to move, passing if it has none.
    fn go(&mut self, _args: &[&str]) -> Result<()> {
        let mv = self.engine_move()?;
        writeln!(self.out, "{}", mv.map_or("pass".into(), |c| c.notate()))?;
        Ok(())
    }

    /// Starts a new game, potentially from an advanced position (i.e. with a move history).
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let game = if !args.is_empty() {
            let gamestr = args.join(" ").parse::<GameString>()?;
            Game::replay(&gamestr)?
        } else {
            Game::default()
        };
        self.game = Some(game);

        let notation = self.get().notate();
        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        if args.is_empty() {
            return Err(anyhow!("no move provided"));
        }

        let MoveString { repr: _, coord } = args[0].parse::<MoveString>()?;
        match coord {
            Some(c) => self.get_mut().play(&c)?,
            None    => self.get_mut().pass()?,
        };
        self.announce_if_over();

        let notation = self.get().notate();
        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    fn score(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let board = self.get().board();
        let [black, white] = [Player::Black, Player::White].map(|p| board.count_discs(p));
        writeln!(self.out, "Black: {}    White: {}", black, white)?;
        Ok(())
    }

    /// Plays the engine against itself until the game ends.
    fn self_play(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        while !self.get().is_over() {
            self.engine_move()?;
        }

        let notation = self.get().notate();
        let outcome = self.get().outcome().ok_or(anyhow!("game did not finish"))?;
        writeln!(self.out, "{}", notation)?;
        writeln!(self.out, "{}", outcome)?;
        Ok(())
    }

    fn status(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let status = match self.get().outcome() {
            Some(outcome) => outcome.to_string(),
            None          => format!("{} to move", self.get().player_to_move()),
        };
        writeln!(self.out, "{}", status)?;
        Ok(())
    }

    fn undo_move(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        self.get_mut().undo()?;

        let notation = self.get().notate();
        writeln!(self.out, "{}", notation)?;
        Ok(())
    }

    fn valid_moves(&mut self, _args: &[&str]) -> Result<()> {
        self.ensure_started()?;
        let moves = self.get().valid_moves();
        let movestr = moves.iter().map(|c| c.notate()).join("; ");

        writeln!(self.out, "{}", moves.len())?;
        writeln!(self.out, "{}", movestr)?;
        Ok(())
    }

    // engine

    /// Chooses and commits the engine's move for the side to move.
    fn engine_move(&mut self) -> Result<Option<Coord>> {
        self.ensure_started()?;
        if self.get().is_over() {
            return Err(anyhow!("the game is over"));
        }

        let game = self.game.as_ref().ok_or(anyhow!("no game in progress"))?;
        let player = game.player_to_move();
        let mv = self.agent.generate_move(game);
        match mv {
            Some(c) => self.get_mut().play(&c)?,
            None    => self.get_mut().pass()?,
        };
        log::info!("{} plays {}", player, mv.map_or("pass".into(), |c| c.notate()));

        self.announce_if_over();
        Ok(mv)
    }

    fn announce_if_over(&self) {
        if let Some(outcome) = self.get().outcome() {
            let board = self.get().board();
            log::info!(
                "game over, {} ({} to {})",
                outcome, board.count_discs(Player::Black), board.count_discs(Player::White)
            );
        }
    }

    // accessors

    fn ensure_started(&mut self) -> Result<&mut Game> {
        if self.game.is_none() {
            Err(anyhow!("no game in progress"))
        } else {
            Ok(self.get_mut())
        }
    }

    /// Retrieves the game in a shared context; only called after `ensure_started`.
    fn get(&self) -> &Game {
        self.game.as_ref().unwrap()
    }

    /// Retrieves the game in a mutable context; only called after `ensure_started`.
    fn get_mut(&mut self) -> &mut Game {
        self.game.as_mut().unwrap()
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()>
    {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the OTP stream.
    fn err(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.out, "err\n{:#}", err)?;
        self.ok()
    }

    /// Prints the ok footer to the OTP stream.
    fn ok(&mut self) -> Result<()>
    {
        writeln!(self.out, "ok")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn transcript(depth: &str, commands: &[&str]) -> String {
        let options = OTPServerOptions::parse_from(["othello", "--depth", depth]);
        let mut server = OTPServer::with_writer(options, Vec::<u8>::new());
        server.serve(commands.join("\n").as_bytes()).unwrap();
        String::from_utf8(server.out).unwrap()
    }

    #[test]
    fn requires_a_game() {
        let out = transcript("1", &["play 24"]);
        assert_eq!(out, "err\nno game in progress\nok\n");
    }

    #[test]
    fn plays_a_human_move() {
        let out = transcript("1", &["newgame", "validmoves", "play e3", "score"]);
        assert_eq!(
            out,
            "start\nok\n4\n24; 35; 42; 53\nok\nstart;24\nok\nBlack: 4    White: 1\nok\n"
        );
    }

    #[test]
    fn rejects_illegal_moves_and_passes() {
        let out = transcript("1", &["newgame", "play 00", "pass", "status"]);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0..2], ["start", "ok"]);
        assert_eq!(lines[2], "err");
        assert_eq!(lines[4], "ok");
        assert_eq!(lines[5], "err");
        assert_eq!(lines[7], "ok");
        assert_eq!(lines[8..], ["Black to move", "ok"]);
    }

    #[test]
    fn engine_answers_and_commits() {
        let out = transcript("2", &["newgame", "bestmove", "go", "undo", "status"]);
        assert_eq!(out, "start\nok\n24\nok\n24\nok\nstart\nok\nBlack to move\nok\n");
    }

    #[test]
    fn depth_queries_do_not_change_the_engine() {
        let options = OTPServerOptions::parse_from(["othello", "--depth", "3"]);
        let mut server = OTPServer::with_writer(options, Vec::<u8>::new());
        server.serve(["newgame", "bestmove depth 1", "go"].join("\n").as_bytes()).unwrap();

        assert_eq!(server.agent.max_depth(), 3);
        let mut shallow = AgentConfig { depth: 1, rule: TerminalRule::SideToMove }.get_agent();
        shallow.choose_move(&Board::new(), Player::Black);
        assert!(server.agent.nodes_visited() > shallow.nodes_visited());
        assert_eq!(String::from_utf8(server.out).unwrap(), "start\nok\n24\nok\n24\nok\n");
    }

    #[test]
    fn loads_a_gamestring() {
        let out = transcript("1", &["newgame start;24;23", "status", "undo", "undo", "undo"]);
        assert_eq!(out, "start;24;23\nok\nBlack to move\nok\nstart;24\nok\nstart\nok\nerr\nno move to undo\nok\n");
    }

    #[test]
    fn self_play_reaches_an_outcome() {
        let out = transcript("1", &["newgame", "selfplay", "status"]);
        let lines = out.lines().collect::<Vec<_>>();
        let outcome = lines[3];
        assert!(outcome == "Black wins" || outcome == "White wins" || outcome == "tie", "{out}");
        assert_eq!(lines[4], "ok");
        assert_eq!(lines[5], outcome);
    }

    #[test]
    fn stops_at_quit() {
        let out = transcript("1", &["info", "quit", "newgame"]);
        assert_eq!(out, format!("id {} v{}\nok\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
    }
}
