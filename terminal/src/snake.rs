use common::{Board, Direction, Position, SnakeView};
use std::collections::VecDeque;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Result of one forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        head: Position,
        /// Cell the tail left, if the snake did not grow
        vacated: Option<Position>,
    },
    Crashed,
}

/// Player snake. Moves wrap around the board edges; running into its own body ends the game.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
}

impl Snake {
    /// Horizontal snake in the middle row, heading right.
    pub fn new(board: &Board) -> Self {
        let y = board.height() / 2;
        let head_x = (INITIAL_SNAKE_LENGTH as u8).min(board.width()).saturating_sub(1);
        let body = (0..=head_x)
            .rev()
            .map(|x| Position::new(x, y))
            .collect();
        Self {
            body,
            direction: Direction::Right,
            next_direction: Direction::Right,
        }
    }

    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(Position::INVALID)
    }

    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Queue a turn for the next move. Reversing onto the body is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(&direction) {
            self.next_direction = direction;
        }
    }

    /// Cell the head will enter on the next move.
    pub fn next_head(&self, board: &Board) -> Position {
        let head = self.head();
        let (dx, dy) = self.next_direction.delta();
        let x = (head.x() as i16 + dx).rem_euclid(board.width() as i16);
        let y = (head.y() as i16 + dy).rem_euclid(board.height() as i16);
        Position::new(x as u8, y as u8)
    }

    /// Move one cell, keeping the tail in place when `grow` is set.
    pub fn advance(&mut self, board: &Board, grow: bool) -> MoveOutcome {
        let next = self.next_head(board);
        if self.runs_into_itself(next, grow) {
            return MoveOutcome::Crashed;
        }
        self.move_head(next, grow)
    }

    /// Move one cell, asking `eat` whether the new head cell makes the snake grow.
    ///
    /// `eat` only runs once the move is known not to crash. The tail cell is never offered
    /// since the snake itself covers it.
    pub fn advance_with(
        &mut self,
        board: &Board,
        eat: impl FnOnce(Position) -> bool,
    ) -> MoveOutcome {
        let next = self.next_head(board);
        if self.runs_into_itself(next, false) {
            return MoveOutcome::Crashed;
        }
        let grow = self.body.back() != Some(&next) && eat(next);
        self.move_head(next, grow)
    }

    fn runs_into_itself(&self, next: Position, grow: bool) -> bool {
        let keep = if grow {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.iter().take(keep).any(|&p| p == next)
    }

    fn move_head(&mut self, next: Position, grow: bool) -> MoveOutcome {
        self.direction = self.next_direction;
        self.body.push_front(next);
        let vacated = if grow { None } else { self.body.pop_back() };
        MoveOutcome::Moved {
            head: next,
            vacated,
        }
    }
}

impl SnakeView for Snake {
    fn is_snake_at(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    fn head_position(&self) -> Position {
        self.head()
    }
}
