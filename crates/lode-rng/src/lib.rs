//! Deterministic seeded random streams for terrain generation.
#![forbid(unsafe_code)]

/// Counter-mix stream: a 32-bit state advanced per call with fixed bit-mixing
/// constants. All arithmetic is wrapping, so the stream is reproducible
/// bit-for-bit on every platform.
#[derive(Clone, Copy, Debug)]
pub struct CounterRng {
    state: u32,
}

impl CounterRng {
    #[inline]
    pub const fn new(seed: i32) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Next value in [0, 1).
    pub fn next(&mut self) -> f32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        let out = t ^ (t >> 14);
        (out as f64 / 4_294_967_296.0) as f32
    }
}

/// Sine-hash stream: a stateless function of (seed, call index). Cheap and
/// deterministic, with visible periodicity at aligned indices; kept as-is
/// for worlds generated with it.
#[derive(Clone, Copy, Debug)]
pub struct TrigRng {
    seed: i32,
    index: u32,
}

impl TrigRng {
    #[inline]
    pub const fn new(seed: i32) -> Self {
        Self { seed, index: 0 }
    }

    /// Hash for an explicit index, in [0, 1).
    pub fn at(seed: i32, n: u32) -> f32 {
        let v = (seed as f64 * 1.0e-5 + n as f64 * 78.233).sin() * 43_758.545_3;
        v.abs().fract() as f32
    }

    /// Next value in [0, 1); advances the call index.
    pub fn next(&mut self) -> f32 {
        let v = Self::at(self.seed, self.index);
        self.index = self.index.wrapping_add(1);
        v
    }
}

/// The single stream contract world generators see. Which strategy backs a
/// given world is a generation-policy detail.
#[derive(Clone, Copy, Debug)]
pub enum SeedRng {
    Counter(CounterRng),
    Trig(TrigRng),
}

impl SeedRng {
    #[inline]
    pub const fn counter(seed: i32) -> Self {
        SeedRng::Counter(CounterRng::new(seed))
    }

    #[inline]
    pub const fn trig(seed: i32) -> Self {
        SeedRng::Trig(TrigRng::new(seed))
    }

    /// Next value in [0, 1).
    pub fn next(&mut self) -> f32 {
        match self {
            SeedRng::Counter(r) => r.next(),
            SeedRng::Trig(r) => r.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_stream_is_reproducible() {
        let mut a = CounterRng::new(1337);
        let mut b = CounterRng::new(1337);
        for _ in 0..256 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn counter_streams_diverge_across_seeds() {
        let mut a = CounterRng::new(1);
        let mut b = CounterRng::new(2);
        let same = (0..32).filter(|_| a.next() == b.next()).count();
        assert!(same < 32);
    }

    #[test]
    fn trig_hash_is_pure_in_seed_and_index() {
        assert_eq!(TrigRng::at(42, 7).to_bits(), TrigRng::at(42, 7).to_bits());
        let mut s = TrigRng::new(42);
        for n in 0..64 {
            assert_eq!(s.next().to_bits(), TrigRng::at(42, n).to_bits());
        }
    }

    #[test]
    fn facade_matches_backing_stream() {
        let mut facade = SeedRng::counter(99);
        let mut raw = CounterRng::new(99);
        for _ in 0..64 {
            assert_eq!(facade.next().to_bits(), raw.next().to_bits());
        }
    }
}
