use lode_world::{GenParams, TilePolicy, generate_tiles, generate_voxels, surface_top};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn dense_generation_is_pure(seed in any::<i32>()) {
        let params = GenParams::default();
        for policy in [TilePolicy::Heightmap, TilePolicy::Radial] {
            let a = generate_tiles(seed, 64, 64, policy, &params);
            let b = generate_tiles(seed, 64, 64, policy, &params);
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn sparse_generation_is_pure(seed in any::<i32>()) {
        let params = GenParams::default();
        let a = generate_voxels(seed, 8, &params);
        let b = generate_voxels(seed, 8, &params);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn heightmap_band_holds_for_any_seed(seed in any::<i32>()) {
        let params = GenParams::default();
        let field = generate_tiles(seed, 120, 80, TilePolicy::Heightmap, &params);
        for x in 0..field.width() {
            let top = surface_top(&field, x) - 1;
            prop_assert!(top >= params.heightmap.surface_min);
            prop_assert!(top <= params.heightmap.surface_max);
        }
    }
}
