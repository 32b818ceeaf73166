use serde::{Deserialize, Serialize};
use std::fmt;

/// A board cell packed into one comparable value: `x` in the high byte, `y` in the low byte.
///
/// Equality and ordering follow the packed value, so two positions are equal exactly when
/// their coordinates are. Boards are at most 255 cells on each axis, which keeps
/// [`Position::INVALID`] distinct from every cell a [`Board`] can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(u16);

impl Position {
    /// Sentinel for "no such position".
    pub const INVALID: Position = Position(u16::MAX);

    pub const fn new(x: u8, y: u8) -> Self {
        Position(((x as u16) << 8) | y as u16)
    }

    pub const fn x(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn y(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_invalid(self) -> bool {
        self.0 == u16::MAX
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn from_raw(raw: u16) -> Self {
        Position(raw)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "(invalid)")
        } else {
            write!(f, "({}, {})", self.x(), self.y())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit step as `(dx, dy)`; `y` grows downwards.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Fixed board bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// Both dimensions must lie in `1..=255`; see [`crate::GameConfig::validate`].
    pub const fn new(width: u8, height: u8) -> Self {
        Board { width, height }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bounds check used by every placement path.
    pub fn contains(&self, position: Position) -> bool {
        !position.is_invalid() && position.x() < self.width && position.y() < self.height
    }

    /// Position for signed coordinates, or `None` when off the board.
    pub fn position_at(&self, x: i16, y: i16) -> Option<Position> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(Position::new(x as u8, y as u8))
    }

    /// Neighbouring cell without wrapping.
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        self.position_at(from.x() as i16 + dx, from.y() as i16 + dy)
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(crate::BOARD_WIDTH, crate::BOARD_HEIGHT)
    }
}
