/// Seeded xorshift32 generator.
///
/// Fast and deterministic for a given seed, which keeps tests reproducible.
/// Not suitable for anything security-related.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

/// Fallback seed; xorshift never leaves the all-zero state.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

impl Rng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Seed from a JS timestamp (ms since epoch), folding the high bits in.
    pub fn from_timestamp(ms: f64) -> Self {
        let bits = ms.to_bits();
        Self::new((bits ^ (bits >> 32)) as u32)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform float in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit exactly in an f32 mantissa
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform integer in [0, n); returns 0 when n == 0
    #[inline]
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.next_u32() % n
    }
}

#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_does_not_get_stuck() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn floats_stay_in_half_open_ranges() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
            let r = rng.range(0.4, 1.2);
            assert!((0.4..1.2).contains(&r));
        }
    }

    #[test]
    fn below_handles_zero() {
        let mut rng = Rng::new(9);
        assert_eq!(rng.below(0), 0);
        assert!(rng.below(360) < 360);
    }
}
