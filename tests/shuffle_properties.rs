//! Property tests for shuffling, deck building and the placement rule.

use proptest::prelude::*;

use jigsaw_memory::assets::AssetId;
use jigsaw_memory::core::shuffle::{fisher_yates, sample_without_replacement, shuffled_indices};
use jigsaw_memory::core::{GameRng, PuzzleConfig};
use jigsaw_memory::memory::deck::{build_deck, is_well_formed};
use jigsaw_memory::puzzle::{PlacementResult, PuzzleEngine, RejectReason};

fn photos(n: usize) -> Vec<AssetId> {
    (1..=n).map(|i| AssetId::new(format!("img{}.jpg", i))).collect()
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), len in 0usize..64) {
        let mut rng = GameRng::new(seed);
        let mut items: Vec<usize> = (0..len).collect();
        fisher_yates(&mut rng, &mut items);
        items.sort_unstable();
        prop_assert_eq!(items, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn prop_shuffled_indices_deterministic(seed in any::<u64>(), len in 0usize..32) {
        let a = shuffled_indices(&mut GameRng::new(seed), len);
        let b = shuffled_indices(&mut GameRng::new(seed), len);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_sample_is_distinct(seed in any::<u64>(), pool in 0usize..20, count in 0usize..20) {
        let items: Vec<usize> = (0..pool).collect();
        let sample = sample_without_replacement(&mut GameRng::new(seed), &items, count);

        if count > pool {
            prop_assert!(sample.is_none());
        } else {
            let mut sample = sample.unwrap();
            prop_assert_eq!(sample.len(), count);
            sample.sort_unstable();
            sample.dedup();
            prop_assert_eq!(sample.len(), count);
        }
    }

    #[test]
    fn prop_deck_well_formed(seed in any::<u64>(), pairs in 1usize..10, extra in 0usize..10) {
        let drawing = AssetId::from("drawing.png");
        let pool = photos(pairs - 1 + extra);
        let deck = build_deck(&drawing, &pool, pairs, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);
        prop_assert!(is_well_formed(&deck, pairs));
        prop_assert!(deck.iter().all(|card| !card.revealed && !card.matched));
    }

    #[test]
    fn prop_only_matching_slot_accepts(seed in any::<u64>(), piece in 0usize..8, slot in 0usize..8) {
        let mut engine = PuzzleEngine::with_rng(PuzzleConfig::default(), GameRng::new(seed));
        engine.new_game(&photos(3)).unwrap();

        let result = engine.attempt_drop(piece, slot).unwrap();
        if piece == slot {
            prop_assert!(result.is_placed());
            prop_assert_eq!(engine.session().unwrap().correct_count(), 1);
        } else {
            prop_assert_eq!(result, PlacementResult::Rejected { piece, slot, reason: RejectReason::WrongSlot });
            prop_assert_eq!(engine.session().unwrap().correct_count(), 0);
        }
    }
}
