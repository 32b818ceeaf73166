use serde::{Deserialize, Serialize};

use crate::SPEED_BONUS_CAP;

/// Running score plus the speed bonus that shortens the snake's move interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u32,
    speed_bonus: u32,
    speed_bonus_cap: u32,
}

impl ScoreKeeper {
    pub fn new(speed_bonus_cap: u32) -> Self {
        ScoreKeeper {
            score: 0,
            speed_bonus: 0,
            speed_bonus_cap,
        }
    }

    /// Zero the score for a new game. The speed bonus is cleared separately on game over.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Add points. While below the cap the speed bonus grows by one and a half times the
    /// value (rounded down), clamped to the cap.
    pub fn add(&mut self, value: u16) {
        self.score = self.score.saturating_add(value as u32);
        if self.speed_bonus < self.speed_bonus_cap {
            let increment = value as u32 * 3 / 2;
            self.speed_bonus = self
                .speed_bonus
                .saturating_add(increment)
                .min(self.speed_bonus_cap);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_bonus(&self) -> u32 {
        self.speed_bonus
    }

    pub fn reset_speed_bonus(&mut self) {
        self.speed_bonus = 0;
    }

    /// Snake move interval once the bonus is taken off.
    pub fn move_interval(&self, base_ms: u32) -> u32 {
        base_ms.saturating_sub(self.speed_bonus)
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        ScoreKeeper::new(SPEED_BONUS_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_score_and_bonus() {
        let mut score = ScoreKeeper::default();
        for _ in 0..3 {
            score.add(10);
        }
        assert_eq!(score.score(), 30);
        assert_eq!(score.speed_bonus(), 45);
    }

    #[test]
    fn test_bonus_rounds_down() {
        let mut score = ScoreKeeper::default();
        score.add(1);
        assert_eq!(score.speed_bonus(), 1);
        score.add(3);
        assert_eq!(score.speed_bonus(), 5);
    }

    #[test]
    fn test_bonus_is_clamped_to_cap() {
        let mut score = ScoreKeeper::default();
        score.add(299);
        assert_eq!(score.speed_bonus(), 448);
        score.add(10);
        assert_eq!(score.speed_bonus(), 450);
        score.add(u16::MAX);
        assert_eq!(score.speed_bonus(), 450);
        assert_eq!(score.score(), 299 + 10 + u16::MAX as u32);
    }

    #[test]
    fn test_bonus_never_exceeds_cap_for_any_sequence() {
        let mut score = ScoreKeeper::default();
        for value in (0..2000u16).map(|i| i.wrapping_mul(37) % 500) {
            score.add(value);
            assert!(score.speed_bonus() <= 450);
        }
    }

    #[test]
    fn test_reset_speed_bonus_keeps_score() {
        let mut score = ScoreKeeper::default();
        score.add(40);
        score.reset_speed_bonus();
        assert_eq!(score.speed_bonus(), 0);
        assert_eq!(score.score(), 40);
    }

    #[test]
    fn test_reset_keeps_speed_bonus() {
        let mut score = ScoreKeeper::default();
        score.add(20);
        score.reset();
        assert_eq!(score.score(), 0);
        assert_eq!(score.speed_bonus(), 30);
    }

    #[test]
    fn test_move_interval_shrinks_with_bonus() {
        let mut score = ScoreKeeper::default();
        assert_eq!(score.move_interval(600), 600);
        score.add(100);
        assert_eq!(score.move_interval(600), 450);
        score.add(1000);
        assert_eq!(score.move_interval(600), 150);
        assert_eq!(score.move_interval(100), 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = ScoreKeeper::default();
        score.score = u32::MAX - 1;
        score.add(10);
        assert_eq!(score.score(), u32::MAX);
    }
}
