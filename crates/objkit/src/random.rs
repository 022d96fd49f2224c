use rand::Rng;

/// Uniform random integer in `[min, max)`, or `[min, max]` when
/// `include_max` is set.
///
/// An empty range yields `min`.
pub fn random_int(min: i64, max: i64, include_max: bool) -> i64 {
    random_int_with(&mut rand::thread_rng(), min, max, include_max)
}

/// [`random_int`] drawing from a caller-supplied generator.
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64, include_max: bool) -> i64 {
    if include_max {
        if max < min {
            return min;
        }
        rng.gen_range(min..=max)
    } else {
        if max <= min {
            return min;
        }
        rng.gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exclusive_range_bounds() {
        for _ in 0..1000 {
            let n = random_int(0, 10, false);
            assert!((0..10).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn inclusive_range_reaches_max() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<i64> = (0..2000)
            .map(|_| random_int_with(&mut rng, 0, 10, true))
            .collect();
        assert!(draws.iter().all(|n| (0..=10).contains(n)));
        assert!(draws.contains(&10));
        assert!(draws.contains(&0));
    }

    #[test]
    fn exclusive_range_never_reaches_max() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!((0..2000).all(|_| random_int_with(&mut rng, -3, 3, false) < 3));
    }

    #[test]
    fn seeded_draws_repeat() {
        let a: Vec<i64> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| random_int_with(&mut rng, 0, 100, false)).collect()
        };
        let b: Vec<i64> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| random_int_with(&mut rng, 0, 100, false)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn empty_ranges_return_min() {
        assert_eq!(random_int(5, 5, false), 5);
        assert_eq!(random_int(5, 2, false), 5);
        assert_eq!(random_int(5, 4, true), 5);
        assert_eq!(random_int(5, 5, true), 5);
    }
}
