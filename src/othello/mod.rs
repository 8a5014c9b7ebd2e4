/*
 *  The rules of Othello (Reversi) on the standard 8x8 board.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod game;
pub mod notation;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Grid, BoardCell},
        consts::*,
        coords::{self, *},
        game::{Game, Outcome},
        notation::*,
    };
}
