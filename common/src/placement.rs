use log::{debug, warn};

use crate::{Board, FoodError, FoodRegistry, MAX_PLACEMENT_ATTEMPTS, Position, RandomSource};

/// Clock divisors picked at random for each candidate's stride term.
const CLOCK_DIVISORS: [u32; 4] = [5, 1, 2, 4];
const X_OFFSET: u32 = 3;
const Y_OFFSET: u32 = 5;

/// Find a cell holding no food for which `occupied` is false.
///
/// Candidates follow a deterministic stride seeded from `clock_ticks`: each one advances the
/// running `x` by `3 + attempt + i` and `y` by `5 + i`, where `i` is the clock divided by a
/// randomly drawn divisor. At most [`MAX_PLACEMENT_ATTEMPTS`] cells are tried; running out
/// is reported as [`FoodError::NoRoom`] and should be retried on a later tick.
pub fn find_unoccupied_position<F, R>(
    registry: &FoodRegistry,
    board: &Board,
    occupied: F,
    rng: &mut R,
    clock_ticks: u32,
) -> Result<Position, FoodError>
where
    F: Fn(Position) -> bool,
    R: RandomSource + ?Sized,
{
    if board.area() == 0 {
        warn!("no room for food on an empty {}x{} board", board.width(), board.height());
        return Err(FoodError::NoRoom { attempts: 0 });
    }

    let width = board.width() as u32;
    let height = board.height() as u32;
    let mut x: u32 = 0;
    let mut y: u32 = 0;

    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let divisor = CLOCK_DIVISORS[rng.next_below(CLOCK_DIVISORS.len() as u32) as usize];
        let stride = clock_ticks / divisor;

        x = x
            .wrapping_add(X_OFFSET)
            .wrapping_add(attempt)
            .wrapping_add(stride)
            % width;
        y = y.wrapping_add(Y_OFFSET).wrapping_add(stride) % height;

        let candidate = Position::new(x as u8, y as u8);
        if !registry.is_food_at(candidate) && !occupied(candidate) {
            return Ok(candidate);
        }
    }

    warn!("no room for more food after {} attempts", MAX_PLACEMENT_ATTEMPTS);
    Err(FoodError::NoRoom {
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Place a new food item on a free cell and register it.
///
/// Fails with [`FoodError::Full`] when the registry is at capacity and with
/// [`FoodError::NoRoom`] when the search gives up; neither changes the registry.
pub fn spawn_food<F, R>(
    registry: &mut FoodRegistry,
    board: &Board,
    occupied: F,
    rng: &mut R,
    clock_ticks: u32,
) -> Result<Position, FoodError>
where
    F: Fn(Position) -> bool,
    R: RandomSource + ?Sized,
{
    if registry.is_full() {
        return Err(FoodError::Full {
            capacity: registry.capacity(),
        });
    }

    let position = find_unoccupied_position(registry, board, occupied, rng, clock_ticks)?;
    let id = registry.add(position)?;
    debug!("spawned food {} at {}", id, position);
    Ok(position)
}
