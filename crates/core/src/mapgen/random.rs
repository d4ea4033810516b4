//! Range helpers over the injected random source.

use rand_chacha::rand_core::Rng;

/// Uniform integer in `[min_value, max_value]`.
pub(crate) fn random_range<R: Rng>(rng: &mut R, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
    (i64::from(min_value) + (rng.next_u64() % range_size) as i64) as i32
}

/// Uniform float in `[0, 1)`.
pub(crate) fn random_unit<R: Rng>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn random_range_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for _ in 0..500 {
            let value = random_range(&mut rng, 7, 13);
            assert!((7..=13).contains(&value));
        }
        assert_eq!(random_range(&mut rng, -4, -4), -4);
    }

    #[test]
    fn random_unit_is_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            let value = random_unit(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }
}
