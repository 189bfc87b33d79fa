//! Frequency grouping and top-N ranking shared by the vocabulary and
//! proper-noun statistics.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Build a key -> count mapping in one pass over `keys`.
pub fn frequency_map<K: Ord>(keys: impl IntoIterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Up to `size` keys ordered by descending count.
///
/// Equal counts resolve in ascending key order: entries enter the sort in
/// `BTreeMap` key order and the sort is stable.
pub fn top_n<K: Ord + Clone>(size: usize, frequencies: &BTreeMap<K, usize>) -> Vec<K> {
    let mut entries: Vec<(&K, usize)> = frequencies.iter().map(|(k, &n)| (k, n)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .take(size)
        .map(|(key, _)| key.clone())
        .collect()
}
