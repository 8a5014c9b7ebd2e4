use crate::othello::prelude::*;

/// The result of a finished game, decided purely by disc count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl Outcome {
    /// Compares the disc counts on a board.
    pub fn of(board: &Board) -> Outcome {
        match board.count_discs(Player::Black).cmp(&board.count_discs(Player::White)) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
            std::cmp::Ordering::Less    => Outcome::Winner(Player::White),
            std::cmp::Ordering::Equal   => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Tie            => write!(f, "tie"),
        }
    }
}

/// A game of record: the board the players actually play on, whose turn it is, and a linear history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    setup: Board,
    player_to_move: Player,

    /// Every move played, `None` for a pass, alongside the board it was played from.
    history: Vec<(Option<Coord>, Board)>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::new())
    }
}

impl Game {
    /// Starts a game from a setup, with Black to move.
    pub fn new(setup: Board) -> Game {
        Game {
            board: setup,
            setup,
            player_to_move: Player::Black,
            history: vec![],
        }
    }

    /// Builds a game from a gamestring, replaying (and thereby validating) each of its moves.
    pub fn replay(gamestring: &GameString) -> Result<Game> {
        let mut game = Game::new(gamestring.setup.board);
        for (i, mv) in gamestring.moves.iter().enumerate() {
            let played = match mv.coord {
                Some(coord) => game.play(&coord),
                None        => game.pass(),
            };
            played.with_context(|| format!("move {} ({}) of the gamestring is illegal", i + 1, mv.repr))?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    /// The legal moves of the side to move.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.valid_moves(self.player_to_move)
    }

    /// Plays a disc for the side to move, if valid, and hands the turn over.
    pub fn play(&mut self, coord: &Coord) -> Result<()> {
        let before = self.board;
        let flipped = self.board.play(coord, self.player_to_move)?;
        log::debug!("{} played {} capturing {} discs", self.player_to_move, coord, flipped);

        self.history.push((Some(*coord), before));
        self.next_player();
        Ok(())
    }

    /// Passes the turn; only legal when the side to move has no valid move.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_over() {
            return Err(anyhow!("the game is over"));
        }
        if self.board.has_valid_move(self.player_to_move) {
            return Err(anyhow!("{} has a valid move and cannot pass", self.player_to_move));
        }
        log::debug!("{} passes", self.player_to_move);

        self.history.push((None, self.board));
        self.next_player();
        Ok(())
    }

    /// Undoes the most recent move or pass, returning it.
    pub fn undo(&mut self) -> Result<Option<Coord>> {
        let Some((mv, board)) = self.history.pop() else {
            return Err(anyhow!("no move to undo"));
        };
        self.board = board;
        self.next_player();
        Ok(mv)
    }

    /// Whether the game has ended: the board is full or neither side can move.
    ///
    /// Only a side without a move may pass, so two passes in a row would need both sides stuck,
    /// which already ends the game before the second pass.
    pub fn is_over(&self) -> bool {
        self.board.count_empty() == 0
            || (!self.board.has_valid_move(self.player_to_move) && !self.board.has_valid_move(-self.player_to_move))
    }

    /// The result of the game, once it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| Outcome::of(&self.board))
    }

    /// Returns the full gamestring for this game: the setup followed by every move.
    pub fn notate(&self) -> String {
        let setup = match self.setup == Board::new() {
            true => START_SETUP.to_owned(),
            _    => self.setup.notate(),
        };
        std::iter::once(setup)
            .chain(self.history.iter().map(|(mv, _)| mv.map_or("pass".into(), |c| c.notate())))
            .join(";")
    }

    fn next_player(&mut self) {
        self.player_to_move = -self.player_to_move;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board(black: usize) -> Board {
        let mut board = Board::empty();
        for (i, c) in Coord::all().enumerate() {
            let player = if i < black { Player::Black } else { Player::White };
            board.set_cell(&c, Some(player)).unwrap();
        }
        board
    }

    #[test]
    fn full_board_with_more_black_discs_is_a_black_win() {
        let game = Game::new(full_board(33));
        assert_eq!(game.board().count_discs(Player::Black), 33);
        assert_eq!(game.board().count_discs(Player::White), 31);
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));
        assert_eq!(game.outcome().unwrap().to_string(), "Black wins");
    }

    #[test]
    fn evenly_split_full_board_is_a_tie() {
        let game = Game::new(full_board(32));
        assert_eq!(game.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn game_ends_when_neither_side_can_move() {
        // Black can only reach (0,2); afterwards nobody can move and only Black discs remain.
        let setup = [
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ].concat().parse::<SetupString>().unwrap().board;
        let mut game = Game::new(setup);
        assert!(game.pass().is_err());

        game.play(&Coord::new(0, 2)).unwrap();
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));
        assert!(game.pass().is_err());
    }

    #[test]
    fn passing_hands_over_the_turn() {
        // White has no move here but Black does.
        let setup = [
            "BWW.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......B",
        ].concat().parse::<SetupString>().unwrap().board;
        let mut game = Game::new(setup);
        game.player_to_move = Player::White;

        assert!(game.valid_moves().is_empty());
        assert!(!game.is_over());
        game.pass().unwrap();
        assert_eq!(game.player_to_move(), Player::Black);
        assert!(game.notate().ends_with(";pass"));

        // Black can still move, so there is no second pass in a row.
        assert!(game.pass().is_err());

        game.play(&Coord::new(0, 3)).unwrap();
        assert_eq!(game.board().count_discs(Player::White), 0);
        assert!(game.is_over());
        assert!(game.pass().is_err());
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut game = Game::default();
        assert!(game.undo().is_err());

        game.play(&Coord::new(2, 4)).unwrap();
        assert_eq!(game.player_to_move(), Player::White);
        assert_eq!(game.undo().unwrap(), Some(Coord::new(2, 4)));
        assert_eq!(game.player_to_move(), Player::Black);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn replays_and_notates_gamestrings() {
        let gamestring = "start;24;23;22".parse::<GameString>().unwrap();
        let game = Game::replay(&gamestring).unwrap();
        assert_eq!(game.notate(), "start;24;23;22");
        assert_eq!(game.player_to_move(), Player::White);

        let illegal = "start;24;24".parse::<GameString>().unwrap();
        assert!(Game::replay(&illegal).is_err());
    }
}
