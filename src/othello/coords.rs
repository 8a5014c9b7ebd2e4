use crate::othello::prelude::*;

/// Simple board coordinate; realistically bounded to 8x8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    /// Accepts either the 2 digit row-column form (`24`) or the algebraic form (`e3`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        let &[first, second] = chars.as_slice() else {
            return Err(anyhow!("expected a 2 character coordinate; received {s}"));
        };
        let coord = match (first.to_digit(10), second.to_digit(10)) {
            (Some(row), Some(col)) => Coord::new(row as usize, col as usize),
            (None, Some(rank)) if first.is_ascii_alphabetic() => {
                let file = first.to_ascii_lowercase() as usize - 'a' as usize;
                Coord::new((rank as usize).wrapping_sub(1), file)
            },
            _ => return Err(anyhow!("could not parse coordinate {s}"))
        };
        if coord.in_bounds() {
            Ok(coord)
        } else {
            Err(anyhow!("coordinate {s} is off the board"))
        }
    }
}

impl Coord {
    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The canonical notation of the coord is its row digit followed by its column digit.
    pub fn notate(&self) -> String {
        format!("{}{}", self.row, self.col)
    }

    /// Every coordinate on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

// Simple offset pair that can be used to walk rays across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// The eight ray directions, in the order both the validity check and the capture walk visit them.
pub static DIRECTIONS: [OffsetCoord; 8] = [
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: 0 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: 1, cols: 1 },
    OffsetCoord { rows: -1, cols: -1 },
    OffsetCoord { rows: 1, cols: -1 },
    OffsetCoord { rows: -1, cols: 1 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds_signed(&self) -> bool {
        0 <= self.rows && self.rows < BOARD_SIZE as isize && 0 <= self.cols && self.cols < BOARD_SIZE as isize
    }

    /// The coordinate this offset lands on, if it is on the board.
    pub fn checked(&self) -> Option<Coord> {
        self.in_bounds_signed().then(|| self.coerce())
    }
}

/// Walks from (but excluding) an origin along a direction until the board edge.
pub struct Ray {
    cursor: OffsetCoord,
    direction: OffsetCoord,
}

impl Ray {
    pub fn new(origin: &Coord, direction: &OffsetCoord) -> Ray {
        Ray { cursor: OffsetCoord::from(origin), direction: *direction }
    }
}

impl Iterator for Ray {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor = self.cursor + self.direction;
        self.cursor.checked()
    }
}

// C -> OC

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}
