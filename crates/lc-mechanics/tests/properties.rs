//! Property tests for trait splits, meter bounds, and die manipulation.

use lc_mechanics::dice::flip_value;
use lc_mechanics::meter::{Aspect, Conviction, DespairMeter, ReflectionTrack, Strength};
use lc_mechanics::sheet::ItemId;
use lc_mechanics::{
    CheckModifiers, DicePool, MechError, RngSource, SelectedSide, TraitDistribution, count_hits,
    resolve_check,
};
use proptest::prelude::*;

fn strength() -> impl Strategy<Value = Strength> {
    prop_oneof![
        Just(Strength::Weak),
        Just(Strength::Stable),
        Just(Strength::Strong)
    ]
}

fn aspect() -> impl Strategy<Value = Aspect> {
    prop_oneof![Just(Aspect::Ethical), Just(Aspect::Shadow)]
}

proptest! {
    #[test]
    fn every_face_lands_on_exactly_one_side(left in 1u32..=5, face in 1u32..=6) {
        let d = TraitDistribution::new(left).unwrap();
        let on_left = d.left_range().contains(face);
        let on_right = d.right_range().contains(face);
        prop_assert!(on_left != on_right);
        prop_assert_eq!(d.left_count() + d.right_count(), 6);
    }

    #[test]
    fn out_of_range_split_is_rejected(left in prop_oneof![Just(0u32), 6u32..100]) {
        let mut d = TraitDistribution::default();
        let err = d.set_left_count(left).unwrap_err();
        prop_assert!(matches!(err, MechError::OutOfRangeValue(_)));
        prop_assert_eq!(d.left_count(), 3);
    }

    #[test]
    fn despair_stays_in_bounds(start in 0u32..=10, deltas in prop::collection::vec(-20i32..=20, 0..30)) {
        let mut meter = DespairMeter::new(start).unwrap();
        for delta in deltas {
            let change = meter.adjust(delta);
            prop_assert!(change.value <= DespairMeter::MAX);
            prop_assert_eq!(change.value, meter.value());
        }
    }

    #[test]
    fn conviction_damage_is_clamped(strength in strength(), deltas in prop::collection::vec(-5i32..=5, 0..20)) {
        let id = ItemId::new();
        let mut conviction = Conviction::new(strength);
        for delta in deltas {
            let change = conviction.adjust_damage(id, delta);
            prop_assert!(change.value <= change.max);
            prop_assert_eq!(change.lost, change.value == change.max);
        }
    }

    #[test]
    fn reflection_never_overflows(marks in prop::collection::vec(aspect(), 0..20)) {
        let mut track = ReflectionTrack::default();
        for a in marks {
            let change = track.mark(a);
            prop_assert!(change.ethical + change.shadow <= ReflectionTrack::CAPACITY);
            prop_assert_eq!(change.full, track.is_full());
        }
    }

    #[test]
    fn flip_is_an_involution(face in 1u32..=6) {
        let flipped = flip_value(face);
        prop_assert!((1..=6).contains(&flipped));
        prop_assert_eq!(face + flipped, 7);
        prop_assert_eq!(flip_value(flipped), face);
    }

    #[test]
    fn hits_never_exceed_dice_times_sides(
        faces in prop::collection::vec(1u32..=6, 1..5),
        left in 1u32..=5,
    ) {
        let pool = DicePool::from_values(faces.clone());
        let d = TraitDistribution::new(left).unwrap();
        let sides = [
            SelectedSide::new("left", d.left_range()),
            SelectedSide::new("right", d.right_range()),
        ];
        // Opposite sides of one trait split every face, so each die hits once.
        prop_assert_eq!(count_hits(&pool, &sides) as usize, faces.len());
    }

    #[test]
    fn seeded_checks_only_produce_d6_faces(seed in any::<u64>(), signature in any::<bool>(), help in any::<bool>()) {
        let mut source = RngSource::seeded(seed);
        let modifiers = CheckModifiers { signature_used: signature, help_used: help, conviction: None };
        let result = resolve_check(&[SelectedSide::unnamed(1, 3)], 1, &modifiers, &mut source).unwrap();
        prop_assert_eq!(result.dice.len(), modifiers.pool_size());
        prop_assert!(result.dice.values().iter().all(|v| (1..=6).contains(v)));
        prop_assert_eq!(result.success, result.hits >= 1);
    }
}
