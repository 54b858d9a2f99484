//! Frequency helpers shared by the reporters.
//!
//! Ties are resolved deterministically: higher count first, then the
//! smaller value according to `Ord`.

use std::collections::BTreeMap;

/// Count occurrences of each distinct value, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    // BTreeMap yields ascending values; a stable sort on count keeps that
    // order among equal counts.
    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Most frequent value and its count, `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}
