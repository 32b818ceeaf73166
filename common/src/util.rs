use serde::{Deserialize, Serialize};

/// Injectable source of pseudo-random draws.
///
/// The placement oracle and the rat only need coarse draws (`% 4`), so a weak generator is
/// fine. Tests plug in scripted sequences.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish draw in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

// Simple pseudorandom number generator using xorshift algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if seed == 0 { 0x1234567890abcdef } else { seed };
        PseudoRandom { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for PseudoRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        ScriptedRandom { values, index: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        value
    }
}
