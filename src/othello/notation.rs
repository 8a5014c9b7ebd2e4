use std::sync::LazyLock;

use regex::Regex;

use crate::othello::prelude::*;

/// The token that names the canonical starting position in a gamestring.
pub const START_SETUP: &str = "start";

/// A segment of a gamestring that represents the board setup
/// (i.e. the placements of the Black and White discs).
#[derive(Clone, Debug)]
pub struct SetupString {
    pub repr: String,
    pub board: Board
}

/// Parses a 64-character setup string (of the form ...BW... etc.).
fn _parse_naive_setup_string(s: &str) -> std::result::Result<SetupString, Error> {
    let mut grid = Grid::default();
    for (i, ch) in s.chars().enumerate() {
        let [r, c] = [i / BOARD_SIZE, i % BOARD_SIZE];
        let player = Player::parse(&ch.to_string())?;
        grid.0[r][c] = BoardCell::new(player);
    }
    Ok(SetupString { repr: s.to_owned(), board: Board::from_grid(grid) })
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == START_SETUP {
            return Ok(SetupString { repr: s.to_owned(), board: Board::new() });
        }
        match s.chars().count() {
            NUM_CELLS => _parse_naive_setup_string(s),
            _         => Err(anyhow!("unrecognized setup string {s}"))
        }
    }
}

/// Either the 2 digit row-column form or the algebraic form of a coordinate.
static MOVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?<coord>[0-7]{2}|[a-hA-H][1-8])$").expect("move pattern is a valid regex")
});

/// A segment of a gamestring that represents a move. If the move
/// is a pass, then it contains no coordinate.
#[derive(Clone, Debug)]
pub struct MoveString {
    pub repr: String,
    pub coord: Option<Coord>
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "pass" {
            return Ok(MoveString { repr: s.to_owned(), coord: None });
        }

        let Some(matches) = MOVE_PATTERN.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let coord = matches.name("coord").unwrap().as_str().parse::<Coord>()?;
        Ok(MoveString { repr: s.to_owned(), coord: Some(coord) })
    }
}

/// A parsed gamestring that resolves to a game of Othello.
///
/// Caveat: the game need not actually be semantically valid, only syntactically;
/// any given move may be illegal in the position the preceding moves produce.
///
/// To ensure a gamestring is actually valid, its moves should be tried
/// iteratively against Game::play() and Game::pass(), which is what Game::replay() does.
#[derive(Clone, Debug)]
pub struct GameString {
    pub setup: SetupString,
    pub moves: Vec<MoveString>
}

impl std::str::FromStr for GameString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s.split(";").collect::<Vec<&str>>();
        let Some((setup_str, movelist)) = parts.split_first() else {
            return Err(anyhow!("gamestring cannot be empty!"));
        };
        if setup_str.trim().is_empty() {
            return Err(anyhow!("gamestring cannot be empty!"));
        }

        let setup = setup_str.trim().parse::<SetupString>()?;
        let mut moves = vec![];
        for move_str in movelist.iter().filter(|m| !m.trim().is_empty()) {
            let mv = move_str.trim().parse::<MoveString>()?;
            moves.push(mv);
        }

        Ok(GameString { setup, moves })
    }
}
