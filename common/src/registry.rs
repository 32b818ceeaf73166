use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FoodError, Position};

/// Index of an entry in the [`FoodRegistry`].
///
/// IDs always form the dense range `0..len`. Removing an entry shifts every later entry
/// down by one, so an ID is only meaningful until the next removal. Hold on to positions,
/// not IDs, across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodId(pub usize);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounded, compacting list of food-like entities (food, super food and the rat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRegistry {
    positions: Vec<Position>,
    capacity: usize,
}

impl FoodRegistry {
    pub fn new(capacity: usize) -> Self {
        FoodRegistry {
            positions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Empty the registry for a new game.
    pub fn reset(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() >= self.capacity
    }

    /// First entry at `position`. Positions are unique, so there is at most one.
    pub fn food_at(&self, position: Position) -> Option<FoodId> {
        self.positions
            .iter()
            .position(|&p| p == position)
            .map(FoodId)
    }

    pub fn is_food_at(&self, position: Position) -> bool {
        self.food_at(position).is_some()
    }

    pub fn position_of(&self, id: FoodId) -> Result<Position, FoodError> {
        self.positions
            .get(id.0)
            .copied()
            .ok_or(FoodError::OutOfRange {
                id,
                len: self.positions.len(),
            })
    }

    /// Append an entry at a cell the caller has already checked; returns the new ID.
    ///
    /// Use [`crate::spawn_food`] to have the placement oracle choose the cell.
    pub fn add(&mut self, position: Position) -> Result<FoodId, FoodError> {
        if self.is_full() {
            return Err(FoodError::Full {
                capacity: self.capacity,
            });
        }
        debug_assert!(!self.is_food_at(position), "duplicate food at {position}");
        self.positions.push(position);
        Ok(FoodId(self.positions.len() - 1))
    }

    /// Remove an entry, shifting later IDs down by one.
    ///
    /// An unknown ID is reported as [`FoodError::OutOfRange`] and leaves the registry
    /// untouched; callers wanting a silent no-op can discard the error.
    pub fn remove(&mut self, id: FoodId) -> Result<Position, FoodError> {
        if id.0 >= self.positions.len() {
            return Err(FoodError::OutOfRange {
                id,
                len: self.positions.len(),
            });
        }
        Ok(self.positions.remove(id.0))
    }

    /// Move an existing entry in place; its ID is unchanged.
    pub fn relocate(&mut self, id: FoodId, position: Position) -> Result<(), FoodError> {
        let len = self.positions.len();
        let slot = self
            .positions
            .get_mut(id.0)
            .ok_or(FoodError::OutOfRange { id, len })?;
        *slot = position;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodId, Position)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(id, &position)| (FoodId(id), position))
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl Default for FoodRegistry {
    fn default() -> Self {
        FoodRegistry::new(crate::MAX_FOOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PseudoRandom, RandomSource};
    use std::collections::HashSet;

    fn assert_dense_and_unique(registry: &FoodRegistry) {
        let ids: Vec<usize> = registry.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, (0..registry.len()).collect::<Vec<_>>());
        let unique: HashSet<Position> = registry.positions().iter().copied().collect();
        assert_eq!(unique.len(), registry.len());
        assert!(registry.len() <= registry.capacity());
    }

    #[test]
    fn test_add_returns_sequential_ids() {
        let mut registry = FoodRegistry::new(4);
        assert_eq!(registry.add(Position::new(1, 1)), Ok(FoodId(0)));
        assert_eq!(registry.add(Position::new(2, 1)), Ok(FoodId(1)));
        assert_eq!(registry.food_at(Position::new(2, 1)), Some(FoodId(1)));
        assert!(!registry.is_food_at(Position::new(3, 3)));
    }

    #[test]
    fn test_full_registry_rejects_add() {
        let mut registry = FoodRegistry::new(2);
        registry.add(Position::new(0, 0)).unwrap();
        registry.add(Position::new(0, 1)).unwrap();
        assert_eq!(
            registry.add(Position::new(0, 2)),
            Err(FoodError::Full { capacity: 2 })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_compacts_ids() {
        let mut registry = FoodRegistry::new(4);
        let a = Position::new(1, 0);
        let b = Position::new(2, 0);
        let c = Position::new(3, 0);
        for p in [a, b, c] {
            registry.add(p).unwrap();
        }

        assert_eq!(registry.remove(FoodId(0)), Ok(a));
        assert_eq!(registry.food_at(a), None);
        assert_eq!(registry.food_at(b), Some(FoodId(0)));
        assert_eq!(registry.food_at(c), Some(FoodId(1)));
        assert_dense_and_unique(&registry);
    }

    #[test]
    fn test_invalid_ids_are_reported() {
        let mut registry = FoodRegistry::new(4);
        registry.add(Position::new(5, 5)).unwrap();

        assert_eq!(
            registry.position_of(FoodId(1)),
            Err(FoodError::OutOfRange {
                id: FoodId(1),
                len: 1
            })
        );
        assert!(registry.remove(FoodId(3)).is_err());
        assert!(registry.relocate(FoodId(1), Position::new(0, 0)).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_relocate_keeps_id() {
        let mut registry = FoodRegistry::new(4);
        registry.add(Position::new(0, 0)).unwrap();
        let id = registry.add(Position::new(1, 0)).unwrap();
        registry.relocate(id, Position::new(1, 1)).unwrap();
        assert_eq!(registry.position_of(id), Ok(Position::new(1, 1)));
        assert_eq!(registry.food_at(Position::new(1, 0)), None);
    }

    #[test]
    fn test_random_add_remove_sequences_stay_dense() {
        let mut rng = PseudoRandom::new(99);
        let mut registry = FoodRegistry::new(8);

        for _ in 0..2000 {
            if rng.next_below(3) == 0 && !registry.is_empty() {
                let id = FoodId(rng.next_below(registry.len() as u32) as usize);
                let removed = registry.remove(id).unwrap();
                assert!(!registry.is_food_at(removed));
            } else {
                let pos = Position::new(rng.next_below(16) as u8, rng.next_below(8) as u8);
                if !registry.is_food_at(pos) {
                    let _ = registry.add(pos);
                }
            }
            assert_dense_and_unique(&registry);
        }
    }

    #[test]
    fn test_reset_empties() {
        let mut registry = FoodRegistry::new(3);
        registry.add(Position::new(0, 0)).unwrap();
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.capacity(), 3);
    }
}
