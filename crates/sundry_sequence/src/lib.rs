//! Index-aware higher-order helpers over slices.
//!
//! Every predicate and transform receives the element together with its
//! position, so callers can express rules such as "every even-indexed item
//! is positive" without zipping by hand.
//!
//! [`some`] and [`every`] deliberately visit the whole slice: the predicate
//! runs once per element even after the answer is known, so side effects in
//! the predicate are observed for every element.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Returns true if `pred` holds for at least one element.
///
/// The predicate is evaluated for every element. An empty slice yields false.
pub fn some<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter().enumerate().fold(false, |acc, (index, item)| {
        let hit = pred(item, index);
        acc || hit
    })
}

/// Returns true if `pred` holds for every element.
///
/// The predicate is evaluated for every element. An empty slice yields true.
pub fn every<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter().enumerate().fold(true, |acc, (index, item)| {
        let hit = pred(item, index);
        acc && hit
    })
}

/// Left fold: `combine(combine(initial, seq[0]), seq[1])...`
pub fn reduce<T, A, F>(seq: &[T], mut combine: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for item in seq {
        acc = combine(acc, item);
    }
    acc
}

/// Calls `f` once per element, in order.
pub fn each<T, F>(seq: &[T], mut f: F)
where
    F: FnMut(&T, usize),
{
    for (index, item) in seq.iter().enumerate() {
        f(item, index);
    }
}

/// Returns a new vector where `result[i] == f(&seq[i], i)`.
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    seq.iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

/// Returns the first element for which `pred` holds.
pub fn find<T, F>(seq: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .find(|(index, item)| pred(item, *index))
        .map(|(_, item)| item)
}

/// Like [`find`], but returns `T::default()` when nothing matches.
///
/// A default-valued result is ambiguous: it may be a real match. Use
/// [`find`] when the distinction matters.
pub fn find_or_default<T, F>(seq: &[T], pred: F) -> T
where
    T: Clone + Default,
    F: FnMut(&T, usize) -> bool,
{
    find(seq, pred).cloned().unwrap_or_default()
}

/// Returns the elements for which `pred` holds, preserving order.
pub fn filter<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(index, item)| pred(item, *index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Returns how many elements satisfy `pred`.
pub fn count<T, F>(seq: &[T], mut pred: F) -> usize
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(index, item)| pred(item, *index))
        .count()
}
