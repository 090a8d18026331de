//! Shuffling and sampling on top of [`RandomSource`].
//!
//! Both games build their setup from these: the jigsaw shuffles piece
//! indices and picks an image, the memory game samples photos without
//! replacement and shuffles the deck.

use super::rng::RandomSource;

/// Shuffle a slice in place with Fisher–Yates.
///
/// Walks from the last position down to 1, swapping each position with a
/// uniformly chosen index at or below it, so every ordering is equally
/// likely given a uniform source.
pub fn fisher_yates<T, R: RandomSource + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_index(i + 1);
        slice.swap(i, j);
    }
}

/// A uniformly shuffled permutation of `0..n`.
#[must_use]
pub fn shuffled_indices<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    fisher_yates(rng, &mut order);
    order
}

/// Choose a random element from a slice.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    slice.get(rng.next_index(slice.len()))
}

/// Draw `count` elements without replacement, in draw order.
///
/// Each draw picks uniformly among the elements not drawn yet.
/// Returns `None` when the slice holds fewer than `count` elements.
#[must_use]
pub fn sample_without_replacement<T: Clone, R: RandomSource + ?Sized>(
    rng: &mut R,
    slice: &[T],
    count: usize,
) -> Option<Vec<T>> {
    if slice.len() < count {
        return None;
    }

    let mut remaining: Vec<usize> = (0..slice.len()).collect();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let slot = rng.next_index(remaining.len());
        let index = remaining.remove(slot);
        picked.push(slice[index].clone());
    }
    Some(picked)
}
