//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::{Board, Move, RecentMarks, Step};

/// Default board size (9x9)
pub const DEFAULT_BOARD_SIZE: usize = 9;
/// Smallest board that still has room for a five
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 19;

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Owner of the stone in this cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// The two sides. Player one plays the dark stones and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Stone color name shown to users
    pub fn color_name(self) -> &'static str {
        match self {
            Player::One => "Black",
            Player::Two => "White",
        }
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Cell {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_name())
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step `dist` cells along `(dx, dy)`; `None` when leaving a board of `size`
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, dist: isize, size: usize) -> Option<Pos> {
        let x = self.x as isize + dx * dist;
        let y = self.y as isize + dy * dist;
        if x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
