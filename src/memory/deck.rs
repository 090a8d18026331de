//! Deck construction.
//!
//! A deck holds `total_pairs` pairs: one pair of the player's drawing and
//! `total_pairs - 1` photo pairs sampled without replacement. The whole deck
//! is then shuffled.

use rustc_hash::{FxHashMap, FxHashSet};

use super::card::{Card, PairId};
use crate::assets::AssetId;
use crate::core::shuffle::{fisher_yates, sample_without_replacement};
use crate::core::{GameError, RandomSource};

/// Drop repeated photo names, keeping first occurrences in order.
#[must_use]
pub fn distinct_photos(photos: &[AssetId]) -> Vec<AssetId> {
    let mut seen = FxHashSet::default();
    photos
        .iter()
        .filter(|photo| seen.insert(*photo))
        .cloned()
        .collect()
}

/// Build a shuffled deck.
///
/// Fails with [`GameError::InsufficientAssets`] when `photos` holds fewer
/// than `total_pairs - 1` distinct names.
pub fn build_deck<R: RandomSource + ?Sized>(
    drawing: &AssetId,
    photos: &[AssetId],
    total_pairs: usize,
    rng: &mut R,
) -> Result<Vec<Card>, GameError> {
    assert!(total_pairs > 0, "Deck must have at least 1 pair");

    let photos = distinct_photos(photos);
    let required = total_pairs - 1;
    let picked = sample_without_replacement(rng, &photos, required).ok_or(GameError::InsufficientAssets {
        required,
        available: photos.len(),
    })?;

    let mut deck = Vec::with_capacity(total_pairs * 2);
    deck.push(Card::user(drawing.clone()));
    deck.push(Card::user(drawing.clone()));
    for photo in picked {
        deck.push(Card::photo(photo.clone()));
        deck.push(Card::photo(photo));
    }

    fisher_yates(rng, &mut deck);
    Ok(deck)
}

/// How many cards carry each pair id.
#[must_use]
pub fn pair_counts<'a, I>(cards: I) -> FxHashMap<&'a PairId, usize>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(&card.pair_id).or_insert(0) += 1;
    }
    counts
}

/// Does `cards` hold exactly `total_pairs` pairs, one of them the user's?
#[must_use]
pub fn is_well_formed<'a, I>(cards: I, total_pairs: usize) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let counts = pair_counts(cards);
    counts.len() == total_pairs
        && counts.values().all(|&count| count == 2)
        && counts.contains_key(&PairId::User)
}
