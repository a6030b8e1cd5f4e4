//! Left outer join.
//!
//! The inner side is drained into a key lookup on the first `next()`; the
//! outer side then streams. Each outer element yields one row per matching
//! inner element (in inner order), or a single row with `None` when nothing
//! matches.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LeftJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    I: Iterator,
{
    outer: O,
    inner: Option<I>,
    outer_key: FO,
    inner_key: FI,
    combine: F,
    lookup: HashMap<K, Vec<I::Item>>,
    /// Outer element whose matches are being emitted, with its key.
    current: Option<(O::Item, K)>,
    /// Next match index for `current`.
    pos: usize,
}

impl<O, I, K, FO, FI, F> LeftJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    I: Iterator,
{
    pub(crate) fn new(outer: O, inner: I, outer_key: FO, inner_key: FI, combine: F) -> Self {
        Self {
            outer,
            inner: Some(inner),
            outer_key,
            inner_key,
            combine,
            lookup: HashMap::new(),
            current: None,
            pos: 0,
        }
    }
}

impl<O, I, K, FO, FI, F, R> Iterator for LeftJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    O::Item: Clone,
    I: Iterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(O::Item, Option<I::Item>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some(inner) = self.inner.take() {
            for item in inner {
                let key = (self.inner_key)(&item);
                self.lookup.entry(key).or_default().push(item);
            }
        }

        loop {
            if let Some((outer, key)) = self.current.take() {
                let Some(matches) = self.lookup.get(&key) else {
                    continue;
                };
                let Some(matched) = matches.get(self.pos).cloned() else {
                    continue;
                };
                let more = self.pos + 1 < matches.len();
                self.pos += 1;

                // Hand the outer element over on its last match.
                if more {
                    let row = (self.combine)(outer.clone(), Some(matched));
                    self.current = Some((outer, key));
                    return Some(row);
                }
                return Some((self.combine)(outer, Some(matched)));
            }

            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            if self.lookup.contains_key(&key) {
                self.current = Some((outer, key));
                self.pos = 0;
            } else {
                return Some((self.combine)(outer, None));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every outer element produces at least one row.
        let (lower, _) = self.outer.size_hint();
        (lower.saturating_add(usize::from(self.current.is_some())), None)
    }
}

impl<O, I, K, FO, FI, F, R> FusedIterator for LeftJoin<O, I, K, FO, FI, F>
where
    O: FusedIterator,
    O::Item: Clone,
    I: Iterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(O::Item, Option<I::Item>) -> R,
{
}
