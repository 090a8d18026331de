//! Memory game integration tests.
//!
//! Decks are dealt with a seeded RNG, so the tests locate pairs through the
//! session rather than assuming positions.

use jigsaw_memory::assets::{AssetId, MemoryStore, TieredDiscovery};
use jigsaw_memory::core::{AssetConfig, GameError, GameEvent, GameRng, MemoryConfig};
use jigsaw_memory::memory::deck::pair_counts;
use jigsaw_memory::memory::{CardState, IgnoreReason, MemoryEngine, MemorySession, PairId, RevealResult};

fn photos(n: usize) -> Vec<AssetId> {
    (1..=n).map(|i| AssetId::new(format!("img{}.jpg", i))).collect()
}

fn started(seed: u64) -> MemoryEngine {
    let mut engine = MemoryEngine::with_rng(MemoryConfig::default(), GameRng::new(seed));
    engine.new_game(AssetId::from("drawing.png"), &photos(8)).unwrap();
    engine.drain_events();
    engine
}

/// Index of the other card with the same pair id as `index`.
fn partner(session: &MemorySession, index: usize) -> usize {
    let pair_id = &session.card(index).unwrap().pair_id;
    (0..session.cards().len())
        .find(|&i| i != index && &session.card(i).unwrap().pair_id == pair_id)
        .unwrap()
}

/// Some card that does not pair with `index`.
fn stranger(session: &MemorySession, index: usize) -> usize {
    let pair_id = &session.card(index).unwrap().pair_id;
    (0..session.cards().len())
        .find(|&i| &session.card(i).unwrap().pair_id != pair_id)
        .unwrap()
}

/// Twelve cards, six pair ids, each twice, one of them the drawing.
#[test]
fn test_deck_shape() {
    for seed in 0..20 {
        let engine = started(seed);
        let session = engine.session().unwrap();
        assert_eq!(session.cards().len(), 12);
        assert_eq!(session.total_pairs(), 6);

        let counts = pair_counts(session.cards().iter());
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
        assert_eq!(counts.get(&PairId::User), Some(&2));

        for card in session.cards() {
            assert_eq!(card.state(), CardState::FaceDown);
            if card.pair_id == PairId::User {
                assert_eq!(card.image, AssetId::from("drawing.png"));
            }
        }
    }
}

/// Too few photos is an error, not a short deck.
#[test]
fn test_insufficient_photos() {
    let mut engine = MemoryEngine::with_rng(MemoryConfig::default(), GameRng::new(1));
    let err = engine.new_game(AssetId::from("drawing.png"), &photos(4)).unwrap_err();
    assert_eq!(err, GameError::InsufficientAssets { required: 5, available: 4 });
    assert!(engine.session().is_none());

    // Duplicates don't count twice.
    let mut doubled = photos(4);
    doubled.extend(photos(4));
    let err = engine.new_game(AssetId::from("drawing.png"), &doubled).unwrap_err();
    assert_eq!(err, GameError::InsufficientAssets { required: 5, available: 4 });
}

/// A matching pair stays up and frees input at once.
#[test]
fn test_match_stays_face_up() {
    let mut engine = started(3);
    let second = partner(engine.session().unwrap(), 0);

    assert_eq!(engine.reveal(0).unwrap(), RevealResult::Revealed(0));
    assert_eq!(
        engine.reveal(second).unwrap(),
        RevealResult::Matched { first: 0, second, completed: false }
    );

    let session = engine.session().unwrap();
    assert_eq!(session.matched_pairs(), 1);
    assert!(session.flipped_indices().is_empty());
    assert!(!session.is_input_locked());
    assert_eq!(session.card(0).unwrap().state(), CardState::Matched);
    assert_eq!(session.card(second).unwrap().state(), CardState::Matched);

    assert_eq!(
        engine.reveal(0).unwrap(),
        RevealResult::Ignored(IgnoreReason::AlreadyMatched)
    );
}

/// Reveals on matched or face-up cards change nothing and say nothing.
#[test]
fn test_ignored_reveals_are_silent() {
    let mut engine = started(5);
    let second = partner(engine.session().unwrap(), 0);
    engine.reveal(0).unwrap();
    engine.reveal(second).unwrap();
    engine.drain_events();

    let third = (0..12).find(|&i| i != 0 && i != second).unwrap();
    engine.reveal(third).unwrap();
    engine.drain_events();
    let before = engine.session().unwrap().clone();

    assert_eq!(
        engine.reveal(second).unwrap(),
        RevealResult::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert_eq!(
        engine.reveal(third).unwrap(),
        RevealResult::Ignored(IgnoreReason::AlreadyFaceUp)
    );

    assert!(engine.drain_events().is_empty());
    assert_eq!(engine.pending_transitions(), 0);
    let after = engine.session().unwrap();
    assert_eq!(after.cards(), before.cards());
    assert_eq!(after.flipped_indices(), [third]);
    assert_eq!(after.matched_pairs(), 1);
}

/// A mismatch locks input until the flip-back delay passes.
#[test]
fn test_mismatch_locks_then_flips_back() {
    let mut engine = started(4);
    let (first, second) = {
        let session = engine.session().unwrap();
        (0, stranger(session, 0))
    };
    let third = (0..12).find(|&i| i != first && i != second).unwrap();

    engine.reveal(first).unwrap();
    assert_eq!(
        engine.reveal(second).unwrap(),
        RevealResult::Mismatched { first, second }
    );
    assert!(engine.session().unwrap().is_input_locked());

    // Clicks during the delay are dropped.
    engine.advance(1000);
    assert_eq!(
        engine.reveal(third).unwrap(),
        RevealResult::Ignored(IgnoreReason::InputLocked)
    );
    assert!(!engine.session().unwrap().card(third).unwrap().revealed);

    engine.advance(500);
    let session = engine.session().unwrap();
    assert!(!session.is_input_locked());
    assert_eq!(session.card(first).unwrap().state(), CardState::FaceDown);
    assert_eq!(session.card(second).unwrap().state(), CardState::FaceDown);
    assert_eq!(session.matched_pairs(), 0);

    assert_eq!(
        engine.drain_events(),
        vec![
            GameEvent::CardRevealed(first),
            GameEvent::CardRevealed(second),
            GameEvent::PairMismatched(first, second),
            GameEvent::CardsHidden(first, second),
        ]
    );
    assert_eq!(engine.reveal(third).unwrap(), RevealResult::Revealed(third));
}

/// Clearing the board wins once, after the victory delay.
#[test]
fn test_full_game() {
    let mut engine = started(8);
    let mut done = vec![false; 12];

    for first in 0..12 {
        if done[first] {
            continue;
        }
        let second = partner(engine.session().unwrap(), first);
        engine.reveal(first).unwrap();
        engine.reveal(second).unwrap();
        done[first] = true;
        done[second] = true;
    }

    assert!(engine.session().unwrap().is_complete());
    engine.advance(400);

    let events = engine.drain_events();
    assert_eq!(events.iter().filter(|e| e.is_victory()).count(), 1);
    assert_eq!(events.iter().filter(|e| matches!(e, GameEvent::PairMatched(..))).count(), 6);
}

/// A new game mid-mismatch leaves the new board alone.
#[test]
fn test_new_game_discards_pending_flip_back() {
    let mut engine = started(6);
    let second = stranger(engine.session().unwrap(), 0);
    engine.reveal(0).unwrap();
    engine.reveal(second).unwrap();

    engine.new_game(AssetId::from("drawing.png"), &photos(8)).unwrap();
    engine.reveal(0).unwrap();

    engine.advance(1500);
    let session = engine.session().unwrap();
    assert_eq!(session.flipped_indices(), [0]);
    assert!(session.card(0).unwrap().revealed);
    assert_eq!(engine.pending_transitions(), 0);
}

/// Photos can come straight from asset discovery.
#[test]
fn test_new_game_from_discovery() {
    let store = MemoryStore::new().with_files((1..=6).map(|i| format!("img{}.jpg", i)));
    let mut source = TieredDiscovery::new(store, AssetConfig::memory());
    let mut engine = MemoryEngine::with_rng(MemoryConfig::default(), GameRng::new(2));

    let session = engine.new_game_from(AssetId::from("drawing.png"), &mut source).unwrap();
    assert_eq!(session.cards().len(), 12);
    for card in session.cards() {
        if let PairId::Photo(photo) = &card.pair_id {
            assert!(photo.as_str().ends_with(".jpg"));
        }
    }
}

/// Smaller boards work the same way.
#[test]
fn test_two_pair_game() {
    let mut engine = MemoryEngine::with_rng(MemoryConfig::new(2), GameRng::new(12));
    let session = engine.new_game(AssetId::from("d.png"), &photos(1)).unwrap();
    assert_eq!(session.cards().len(), 4);
}
