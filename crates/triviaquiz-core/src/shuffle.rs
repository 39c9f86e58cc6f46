//! Unbiased option shuffling.
//!
//! Options are shuffled with an explicit Fisher–Yates pass rather than a
//! comparator sort, which would not produce a uniform permutation.

use rand::Rng;

use crate::model::Question;

/// Shuffle `items` in place.
///
/// For each index `i` from the last down to 1, pick `j` uniformly in
/// `[0, i]` and swap `items[i]` with `items[j]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The question's candidate answers in a fresh random order.
pub fn present_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut options = question.candidates();
    fisher_yates(&mut options, rng);
    options
}
