use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Board, Direction, FoodError, FoodRegistry, MAX_PLACEMENT_ATTEMPTS, Position, RandomSource,
    SnakeView, spawn_food,
};

/// Outcome of one rat step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatStep {
    pub previous: Position,
    pub current: Position,
    /// Whether the renderer should blank `previous`. False when the rat stayed put or the
    /// snake is drawn there.
    pub clear_previous: bool,
}

impl RatStep {
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }
}

/// The roaming rat. It is tracked as an ordinary registry entry so food queries see it; this
/// struct only remembers where that entry is.
///
/// Once eaten the rat has no entry. `position` then keeps the cell it was eaten on so the
/// next step starts from there, but that cell is no longer a registry key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rat {
    position: Option<Position>,
    #[serde(default)]
    eaten: bool,
}

impl Rat {
    pub fn new() -> Self {
        Rat {
            position: None,
            eaten: false,
        }
    }

    pub fn store(&mut self, position: Position) {
        self.position = Some(position);
        self.eaten = false;
    }

    /// Last known cell, also while eaten.
    pub fn retrieve(&self) -> Option<Position> {
        self.position
    }

    /// Cell of the rat's registry entry. `None` while eaten or before placement.
    pub fn on_board(&self) -> Option<Position> {
        if self.eaten { None } else { self.position }
    }

    pub fn is_eaten(&self) -> bool {
        self.eaten
    }

    /// Record that the snake ate the rat. The caller has already removed its entry.
    pub fn mark_eaten(&mut self) {
        if self.position.is_some() {
            self.eaten = true;
        }
    }

    pub fn reset(&mut self) {
        self.position = None;
        self.eaten = false;
    }

    /// Put the rat on a free cell at game start.
    pub fn place<R: RandomSource + ?Sized>(
        &mut self,
        registry: &mut FoodRegistry,
        board: &Board,
        snake: &dyn SnakeView,
        rng: &mut R,
        clock_ticks: u32,
    ) -> Result<Position, FoodError> {
        let position = spawn_food(registry, board, |p| snake.is_snake_at(p), rng, clock_ticks)?;
        self.position = Some(position);
        self.eaten = false;
        Ok(position)
    }

    /// Try to move one cell in a random cardinal direction.
    ///
    /// Steps never wrap: a step off an edge bounces one cell inwards instead. Cells holding
    /// other food, the snake or the active super food are refused. After
    /// [`MAX_PLACEMENT_ATTEMPTS`] refusals the rat stays where it is.
    ///
    /// An eaten rat is registered afresh on the chosen cell, so it comes back on its next
    /// step. Whatever now sits on the cell it was eaten on is left alone.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        registry: &mut FoodRegistry,
        board: &Board,
        snake: &dyn SnakeView,
        super_food: Option<Position>,
        rng: &mut R,
    ) -> Result<RatStep, FoodError> {
        let previous = self.position.ok_or(FoodError::RatNotPlaced)?;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = Direction::ALL[rng.next_below(4) as usize];
            let Some(candidate) = clamped_step(board, previous, direction) else {
                continue;
            };

            if registry.is_food_at(candidate)
                || snake.is_snake_at(candidate)
                || super_food == Some(candidate)
            {
                continue;
            }

            let was_eaten = self.eaten;
            match registry.food_at(previous).filter(|_| !was_eaten) {
                Some(id) => registry.relocate(id, candidate)?,
                None => {
                    registry.add(candidate)?;
                    debug!("rat respawned at {}", candidate);
                }
            }
            self.position = Some(candidate);
            self.eaten = false;

            let snake_covers_previous =
                snake.head_position() == previous || snake.is_snake_at(previous);
            return Ok(RatStep {
                previous,
                current: candidate,
                clear_previous: !was_eaten && !snake_covers_previous,
            });
        }

        debug!("rat boxed in at {}", previous);
        Ok(RatStep {
            previous,
            current: previous,
            clear_previous: false,
        })
    }
}

/// Cell one step from `from`, reflecting off the board edges. `None` only when the board is
/// too small for any move along that axis.
fn clamped_step(board: &Board, from: Position, direction: Direction) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let x = clamp_axis(from.x(), dx, board.width());
    let y = clamp_axis(from.y(), dy, board.height());
    board.position_at(x, y)
}

fn clamp_axis(coord: u8, delta: i16, extent: u8) -> i16 {
    let coord = coord as i16;
    if delta == 0 {
        return coord;
    }
    let max = extent as i16 - 1;
    let target = coord + delta;
    if target < 0 {
        1.min(max)
    } else if target > max {
        (max - 1).max(0)
    } else {
        target
    }
}
