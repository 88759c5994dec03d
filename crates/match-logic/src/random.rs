//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG used for the opponent's draw.
//! Uses a simple but effective xorshift algorithm.

/// Source of uniformly distributed integers.
///
/// Round resolution only ever asks for a value in `[0, max)`, so this is the
/// whole surface a front-end has to provide to plug in its own generator.
pub trait RandomSource {
    /// Generate a value in range [0, max). Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

const SEED_MIX: u64 = 0x517cc1b727220a95;
const ROUND_MIX: u64 = 0x9e3779b97f4a7c15;

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self::from_state(seed.wrapping_mul(SEED_MIX) ^ ROUND_MIX)
    }

    /// Create a new RNG from a 32-byte seed
    pub fn from_bytes(seed: &[u8; 32]) -> Self {
        // Combine seed bytes into initial state
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }
        Self::from_state(state)
    }

    fn from_state(state: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = if state == 0 { ROUND_MIX } else { state };

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Create RNG for a specific round, independent of how many draws
    /// earlier rounds consumed
    pub fn for_round(&self, round: u32) -> Self {
        let mut new_state = self.state;
        new_state ^= (round as u64 + 1).wrapping_mul(ROUND_MIX);

        let mut rng = Self::from_state(new_state);
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    ///
    /// Draws below `2^32 mod max` are rejected so every value in the range
    /// is equally likely.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        let threshold = max.wrapping_neg() % max;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % max;
            }
        }
    }
}

impl RandomSource for SeededRng {
    fn next_range(&mut self, max: u32) -> u32 {
        SeededRng::next_range(self, max)
    }
}
