//! Seedable xorshift32 random source. Every random draw in the simulation
//! goes through an explicit instance of this, so a whole run is reproducible
//! from one u32 seed.

use std::time::{SystemTime, UNIX_EPOCH};

pub struct SimRng {
    state: u32,
}

impl SimRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the system clock. Each simulation started in a different
    /// nanosecond gets a different stream.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(0x5EED_1234);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max). Requires min <= max; min == max
    /// degenerates to min.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "range requires min <= max, got [{min}, {max})");
        min + self.next_f32() * (max - min)
    }

    /// Draws once; true with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_inside_half_open_bounds() {
        let mut rng = SimRng::new(0xBAD_5EED);
        for _ in 0..2000 {
            // Spawn-band and fall-speed shaped ranges, signed and asymmetric
            let x = rng.range(-1.5, 1.5);
            assert!(x >= -1.5 && x < 1.5);
            let v = rng.range(0.002, 0.01);
            assert!(v >= 0.002 && v < 0.01);
        }
    }

    #[test]
    fn rng_is_reproducible() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        // xorshift with state 0 would be stuck at 0 forever
        let mut zero = SimRng::new(0);
        let mut one = SimRng::new(1);
        for _ in 0..10 {
            assert_eq!(zero.next_f32(), one.next_f32());
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = SimRng::new(3);
        for _ in 0..10 {
            assert_eq!(rng.range(0.5, 0.5), 0.5);
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(11);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
        }
        for _ in 0..100 {
            assert!(rng.chance(1.1));
        }
    }
}
