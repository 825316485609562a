mod common;

use ca_planter_core::generator::{evolve, generate};
use ca_planter_core::rule::{apply, decode, encode, Rule};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_row(max_width: usize)(
        row in prop::collection::vec(0u8..=1, 1..max_width)
    ) -> Vec<u8> {
        row
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_decode_reencodes_to_rule(n in 0i64..=255) {
        let table = decode(n).unwrap();
        prop_assert!(table.iter().all(|&b| b <= 1));
        prop_assert_eq!(i64::from(encode(&table)), n);
    }

    #[test]
    fn test_decode_rejects_out_of_range(n in prop_oneof![i64::MIN..0, 256i64..i64::MAX]) {
        prop_assert!(decode(n).is_err());
    }

    #[test]
    fn test_apply_is_binary(n in any::<u8>(), l in 0u8..=1, c in 0u8..=1, r in 0u8..=1) {
        let out = apply(l, c, r, Rule::from(n).table()).unwrap();
        prop_assert!(out <= 1);
    }

    #[test]
    fn test_apply_rejects_non_binary(n in any::<u8>(), bad in 2u8..) {
        let table = Rule::from(n).table().to_owned();
        prop_assert!(apply(bad, 0, 0, &table).is_err());
        prop_assert!(apply(0, bad, 0, &table).is_err());
        prop_assert!(apply(0, 0, bad, &table).is_err());
    }

    #[test]
    fn test_generate_shape(
        width in 1usize..64,
        height in 1usize..64,
        n in 0i64..=255,
        seed in any::<u64>()
    ) {
        let grid = generate(width, height, n, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        common::assert_well_formed(&grid, width, height);
    }

    #[test]
    fn test_evolve_keeps_seed_row(seed in arb_row(48), n in any::<u8>(), height in 1usize..16) {
        let grid = evolve(&seed, height, &Rule::from(n)).unwrap();
        prop_assert_eq!(grid.row(0).unwrap(), seed.as_slice());
    }

    #[test]
    fn test_rotation_commutes_with_evolution(seed in arb_row(48), n in any::<u8>(), k in 0usize..48) {
        // Toroidal boundaries make evolution shift-invariant.
        let rule = Rule::from(n);
        let k = k % seed.len();
        let mut rotated = seed.clone();
        rotated.rotate_left(k);

        let plain = evolve(&seed, 6, &rule).unwrap();
        let shifted = evolve(&rotated, 6, &rule).unwrap();
        for t in 0..6 {
            let mut expected = plain.row(t).unwrap().to_vec();
            expected.rotate_left(k);
            prop_assert_eq!(shifted.row(t).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn test_width_one_depends_on_center_only(n in any::<u8>(), cell in 0u8..=1) {
        let rule = Rule::from(n);
        let grid = evolve(&[cell], 2, &rule).unwrap();
        let expected = if cell == 0 { rule.table()[7] } else { rule.table()[0] };
        prop_assert_eq!(grid.get(1, 0), Some(expected));
    }
}
