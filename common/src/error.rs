use thiserror::Error;

use crate::FoodId;

/// Failures surfaced by the registry, the placement oracle and the rat controller.
///
/// None of these are fatal: callers skip the operation and retry on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoodError {
    #[error("food registry is full ({capacity} items)")]
    Full { capacity: usize },

    #[error("no free cell found after {attempts} attempts")]
    NoRoom { attempts: u32 },

    #[error("food id {id} out of range (registry holds {len} items)")]
    OutOfRange { id: FoodId, len: usize },

    #[error("rat has not been placed on the board")]
    RatNotPlaced,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions {width}x{height} must each be between 1 and 255")]
    InvalidBoard { width: u16, height: u16 },

    #[error("registry capacity must be at least 2 (rat and super food), got {0}")]
    CapacityTooSmall(usize),

    #[error("registry capacity {capacity} exceeds the {cells} cells on the board")]
    CapacityExceedsBoard { capacity: usize, cells: usize },

    #[error("initial food {initial} leaves no room for the rat and super food (capacity {capacity})")]
    TooMuchInitialFood { initial: usize, capacity: usize },

    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}
