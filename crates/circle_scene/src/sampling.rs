//! Uniform random draws used by the packing loop.
use glam::DVec2;
use rand::RngCore;

/// Scale factor mapping the top 53 bits of a `u64` onto `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// Generate a random float in the range [lo, hi). Returns `lo` when the range is empty.
#[inline]
pub fn rand_range(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + rand01(rng) * (hi - lo)
}

/// Draw a point uniformly from the unit square `[0, 1)²`.
///
/// The x coordinate is drawn before y, so a fixed random stream always maps to the same point.
#[inline]
pub fn unit_point(rng: &mut dyn RngCore) -> DVec2 {
    let x = rand01(rng);
    let y = rand01(rng);
    DVec2::new(x, y)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    pub(crate) struct FixedRng {
        pub value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            (self.value >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert!(1.0 - result < 1e-15);
    }

    #[test]
    fn rand01_half_range_is_one_half() {
        let mut rng = FixedRng { value: 1u64 << 63 };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn rand_range_handles_empty_and_regular_ranges() {
        let mut rng = FixedRng { value: 1u64 << 63 };
        assert_eq!(rand_range(&mut rng, 2.0, 2.0), 2.0);
        assert_eq!(rand_range(&mut rng, 3.0, 1.0), 3.0);
        assert_eq!(rand_range(&mut rng, 1.0, 3.0), 2.0);
    }

    #[test]
    fn unit_points_lie_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = unit_point(&mut rng);
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa: Vec<DVec2> = (0..16).map(|_| unit_point(&mut rng_a)).collect();
        let pb: Vec<DVec2> = (0..16).map(|_| unit_point(&mut rng_b)).collect();
        assert_eq!(pa, pb);
    }
}
