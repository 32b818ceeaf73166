use common::Clock;
use std::time::{Duration, Instant};

/// Wall clock in milliseconds since construction that can be frozen while the game is
/// paused. Readings wrap at `u32::MAX` like a hardware tick counter.
#[derive(Debug)]
pub struct PausableClock {
    start: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl PausableClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn toggle_pause(&mut self) {
        match self.paused_at.take() {
            Some(paused_at) => self.paused_total += paused_at.elapsed(),
            None => self.paused_at = Some(Instant::now()),
        }
    }

    fn running_time(&self) -> Duration {
        let end = self.paused_at.unwrap_or_else(Instant::now);
        end.duration_since(self.start).saturating_sub(self.paused_total)
    }
}

impl Default for PausableClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PausableClock {
    fn now(&self) -> u32 {
        self.running_time().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_clock_does_not_advance() {
        let mut clock = PausableClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        let frozen = clock.now();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.now(), frozen);

        clock.toggle_pause();
        assert!(!clock.is_paused());
        std::thread::sleep(Duration::from_millis(20));
        assert!(clock.now() >= frozen + 15);
    }
}
