use lode_rng::{CounterRng, SeedRng, TrigRng};
use proptest::prelude::*;

proptest! {
    #[test]
    fn counter_values_stay_in_unit_range(seed in any::<i32>()) {
        let mut rng = CounterRng::new(seed);
        for _ in 0..512 {
            let v = rng.next();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn trig_values_stay_in_unit_range(seed in any::<i32>(), n in 0u32..100_000) {
        let v = TrigRng::at(seed, n);
        prop_assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn identical_seeds_yield_identical_streams(seed in any::<i32>()) {
        let mut a = SeedRng::counter(seed);
        let mut b = SeedRng::counter(seed);
        for _ in 0..128 {
            prop_assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }
}
