use std::cell::Cell;

/// Monotonic millisecond tick counter.
///
/// Values are `u32` and wrap; compare instants with [`elapsed_since`], never directly.
pub trait Clock {
    fn now(&self) -> u32;
}

/// Milliseconds from `earlier` to `now`, correct across counter rollover.
pub fn elapsed_since(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}

/// Clock advanced by hand. Used by tests and headless simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    ticks: Cell<u32>,
}

impl ManualClock {
    pub fn new(start: u32) -> Self {
        ManualClock {
            ticks: Cell::new(start),
        }
    }

    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    pub fn advance(&self, ms: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u32 {
        self.ticks.get()
    }
}
