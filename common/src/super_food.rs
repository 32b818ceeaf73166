use log::debug;
use serde::{Deserialize, Serialize};

use crate::clock::elapsed_since;
use crate::{Board, FoodRegistry, Position, RandomSource, SnakeView, spawn_food};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuperFoodStatus {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuperFoodEvent {
    Spawned(Position),
    /// Lifetime ran out before the snake reached it; the registry entry is gone.
    Expired(Position),
    /// The snake head reached it; removing the entry and scoring is up to the consumer.
    Eaten(Position),
}

/// Time-limited bonus food.
///
/// Inactive until `spawn_cooldown_ms` has passed since the last removal and a free cell is
/// found, then active until eaten or until `active_ms` has passed. All timing uses wrapping
/// deltas so a rolled-over clock keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperFood {
    status: SuperFoodStatus,
    position: Option<Position>,
    spawn_time: u32,
    removal_time: u32,
    spawn_cooldown_ms: u32,
    active_ms: u32,
}

impl SuperFood {
    pub fn new(spawn_cooldown_ms: u32, active_ms: u32) -> Self {
        SuperFood {
            status: SuperFoodStatus::Inactive,
            position: None,
            spawn_time: 0,
            removal_time: 0,
            spawn_cooldown_ms,
            active_ms,
        }
    }

    /// Back to inactive with the spawn cooldown starting at `now`.
    pub fn reset(&mut self, now: u32) {
        self.status = SuperFoodStatus::Inactive;
        self.position = None;
        self.spawn_time = now;
        self.removal_time = now;
    }

    pub fn store(&mut self, position: Option<Position>) {
        self.position = position;
    }

    pub fn retrieve(&self) -> Option<Position> {
        self.position
    }

    pub fn status(&self) -> SuperFoodStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SuperFoodStatus::Active
    }

    pub fn spawn_time(&self) -> u32 {
        self.spawn_time
    }

    pub fn removal_time(&self) -> u32 {
        self.removal_time
    }

    /// Advance the lifecycle to `now`. At most one transition happens per call, and the
    /// eaten check always runs before the expiry check.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        now: u32,
        registry: &mut FoodRegistry,
        board: &Board,
        snake: &dyn SnakeView,
        rng: &mut R,
    ) -> Option<SuperFoodEvent> {
        match (self.status, self.position) {
            (SuperFoodStatus::Active, Some(position)) if snake.head_position() == position => {
                self.deactivate(now);
                debug!("super food eaten at {}", position);
                Some(SuperFoodEvent::Eaten(position))
            }
            (SuperFoodStatus::Active, position) => {
                if elapsed_since(now, self.spawn_time) < self.active_ms {
                    return None;
                }
                self.deactivate(now);
                let position = position?;
                if let Some(id) = registry.food_at(position) {
                    // The id comes from the lookup above.
                    let _ = registry.remove(id);
                }
                debug!("super food expired at {}", position);
                Some(SuperFoodEvent::Expired(position))
            }
            (SuperFoodStatus::Inactive, _) => {
                if elapsed_since(now, self.removal_time) < self.spawn_cooldown_ms {
                    return None;
                }
                match spawn_food(registry, board, |p| snake.is_snake_at(p), rng, now) {
                    Ok(position) => {
                        self.status = SuperFoodStatus::Active;
                        self.position = Some(position);
                        self.spawn_time = now;
                        debug!("super food spawned at {}", position);
                        Some(SuperFoodEvent::Spawned(position))
                    }
                    Err(e) => {
                        debug!("super food spawn deferred: {}", e);
                        None
                    }
                }
            }
        }
    }

    fn deactivate(&mut self, now: u32) {
        self.status = SuperFoodStatus::Inactive;
        self.position = None;
        self.removal_time = now;
    }
}

impl Default for SuperFood {
    fn default() -> Self {
        SuperFood::new(crate::SUPER_FOOD_SPAWN_COOLDOWN_MS, crate::SUPER_FOOD_ACTIVE_MS)
    }
}
