//! Random sources for throws, jitter and face shuffling.
//!
//! Everything that rolls dice takes a `&mut impl RandomSource`, so tests can
//! replay a throw from a fixed seed.

/// Uniform random source
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_f32(&mut self) -> f32;

    /// Uniform value in `[min, max]`
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        // Rounding can land one ulp past `max` on wide ranges.
        (min + self.next_f32() * (max - min)).min(max)
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }
}

/// Xorshift32 step
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

const DEFAULT_SEED: u32 = 12345;

/// Seeded xorshift32 generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Zero is a fixed point of xorshift, so it is replaced by the default seed.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { DEFAULT_SEED } else { seed } }
    }

    /// Seed from a millisecond timestamp
    pub fn from_time_ms(now_ms: f64) -> Self {
        let bits = now_ms.to_bits();
        Self::new((bits ^ (bits >> 32)) as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit an f32 mantissa exactly, keeping the result below 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}
