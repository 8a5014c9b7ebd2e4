use crate::othello::prelude::*;

impl Board {
    /// Every position at which `player` may move, in row-major order. Search explores moves in
    /// this order and the automated player breaks ties with it, so it must stay stable.
    ///
    /// An empty list means the player has to pass.
    pub fn valid_moves(&self, player: Player) -> Vec<Coord> {
        Coord::all().filter(|c| self.is_valid_move(c, player)).collect()
    }

    /// Whether `player` has any move at all.
    pub fn has_valid_move(&self, player: Player) -> bool {
        Coord::all().any(|c| self.is_valid_move(&c, player))
    }

    /// Plays a move on this board, if valid. Returns the number of captured discs.
    pub fn play(&mut self, coord: &Coord, player: Player) -> Result<usize> {
        if self.is_valid_move(coord, player) {
            Ok(self.apply_move(coord, player))
        } else {
            Err(anyhow!("{} cannot play {} in this position", player, coord))
        }
    }

    /// Places `player`'s disc at `coord` and flips every opponent run it brackets, with no checks;
    /// engine use only. Returns the number of captured discs.
    ///
    /// The caller must know the move is valid. On a coordinate that brackets nothing the disc is
    /// still placed and nothing is captured; off the board this panics.
    pub fn apply_move(&mut self, coord: &Coord, player: Player) -> usize {
        *self.get_mut_unchecked(coord) = BoardCell::new(Some(player));

        DIRECTIONS.iter().map(|direction| {
            let run = self.brackets(coord, direction, player);
            Ray::new(coord, direction).take(run).for_each(|c| {
                let cell = self.get_mut_unchecked(&c);
                *cell = cell.negated();
            });
            run
        }).sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::othello::prelude::*;

    #[test]
    fn opening_moves() {
        let board = Board::new();
        assert_eq!(
            board.valid_moves(Player::Black),
            vec![Coord::new(2, 4), Coord::new(3, 5), Coord::new(4, 2), Coord::new(5, 3)]
        );
        assert!(board.has_valid_move(Player::Black));
    }

    #[test]
    fn white_opening_moves() {
        let board = Board::new();
        assert_eq!(
            board.valid_moves(Player::White),
            vec![Coord::new(2, 3), Coord::new(3, 2), Coord::new(4, 5), Coord::new(5, 4)]
        );
        assert!(board.has_valid_move(Player::White));
    }

    #[test]
    fn nobody_moves_on_an_empty_board() {
        let board = Board::empty();
        assert!(!board.has_valid_move(Player::Black));
        assert!(!board.has_valid_move(Player::White));
    }

    #[test]
    fn capture_worked_example() {
        let before = Board::new();
        let mut board = before;
        let flipped = board.apply_move(&Coord::new(2, 4), Player::Black);

        assert_eq!(flipped, 1);
        assert_eq!(board.cell(&Coord::new(2, 4)).unwrap(), Some(Player::Black));
        assert_eq!(board.cell(&Coord::new(3, 4)).unwrap(), Some(Player::Black));
        for c in Coord::all().filter(|c| *c != Coord::new(2, 4) && *c != Coord::new(3, 4)) {
            assert_eq!(board.cell(&c).unwrap(), before.cell(&c).unwrap(), "{c} changed");
        }

        assert_eq!(board.count_discs(Player::Black), 4);
        assert_eq!(board.count_discs(Player::White), 1);
        assert_eq!(board.count_empty(), 59);
    }

    #[test]
    fn captures_in_several_directions_at_once() {
        let mut board = [
            "B..B....",
            ".W.W....",
            "..WW....",
            "BWW.WB..",
            "........",
            "........",
            "........",
            "........",
        ].concat().parse::<SetupString>().unwrap().board;

        let flipped = board.play(&Coord::new(3, 3), Player::Black).unwrap();

        // west run of two, east run of one, north run of two, north-west diagonal of two
        assert_eq!(flipped, 7);
        assert_eq!(board.count_discs(Player::White), 0);
    }

    #[test]
    fn play_rejects_invalid_moves() {
        let mut board = Board::new();
        assert!(board.play(&Coord::new(0, 0), Player::Black).is_err());
        assert!(board.play(&Coord::new(2, 4), Player::White).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn unchecked_move_without_captures_only_places() {
        let mut board = Board::new();
        let flipped = board.apply_move(&Coord::new(0, 0), Player::White);
        assert_eq!(flipped, 0);
        assert_eq!(board.count_discs(Player::White), 3);
        assert_eq!(board.count_discs(Player::Black), 2);
    }

    #[test]
    fn every_valid_move_adds_exactly_one_disc() {
        let mut rng = StdRng::seed_from_u64(0x07e1107);
        for _ in 0..40 {
            let mut board = Board::new();
            let mut player = Player::Black;
            loop {
                let moves = board.valid_moves(player);
                let Some(mv) = moves.choose(&mut rng) else {
                    if !board.has_valid_move(-player) {
                        break;
                    }
                    player = -player;
                    continue;
                };

                let before = board;
                let occupied = board.count_discs(Player::Black) + board.count_discs(Player::White);
                let empty = board.count_empty();
                board.apply_move(mv, player);

                assert_eq!(board.count_discs(Player::Black) + board.count_discs(Player::White), occupied + 1);
                assert_eq!(board.count_empty(), empty - 1);
                assert!(Coord::all().all(|c| {
                    before.cell(&c).unwrap().is_none() || board.cell(&c).unwrap().is_some()
                }));
                player = -player;
            }
        }
    }
}
