//! Full outer join.
//!
//! Both inputs are collected up front: the unmatched inner rows can only be
//! known once every outer key has been seen. Do not use on unbounded input.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::vec;

use super::left::LeftJoin;
use super::{pair, Pair};

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FullJoin<A, B, K, FO, FI, F> {
    matched: LeftJoin<vec::IntoIter<A>, vec::IntoIter<B>, K, FO, FI, Pair<A, B>>,
    /// Inner rows whose key never occurs on the outer side, in inner order.
    unmatched: vec::IntoIter<B>,
    combine: F,
}

impl<A, B, K, FO, FI, F> FullJoin<A, B, K, FO, FI, F>
where
    B: Clone,
    K: Eq + Hash,
    FO: FnMut(&A) -> K,
    FI: FnMut(&B) -> K,
{
    pub(crate) fn new<O, I>(
        outer: O,
        inner: I,
        mut outer_key: FO,
        mut inner_key: FI,
        combine: F,
    ) -> Self
    where
        O: IntoIterator<Item = A>,
        I: IntoIterator<Item = B>,
    {
        let outer: Vec<A> = outer.into_iter().collect();
        let inner: Vec<B> = inner.into_iter().collect();

        // Exclusion is per key: every inner row with an unseen key is kept.
        let outer_keys: HashSet<K> = outer.iter().map(&mut outer_key).collect();
        let unmatched: Vec<B> = inner
            .iter()
            .filter(|&item| !outer_keys.contains(&inner_key(item)))
            .cloned()
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            outer = outer.len(),
            inner = inner.len(),
            outer_keys = outer_keys.len(),
            unmatched = unmatched.len(),
            "full join materialized"
        );

        Self {
            matched: LeftJoin::new(
                outer.into_iter(),
                inner.into_iter(),
                outer_key,
                inner_key,
                pair as Pair<_, _>,
            ),
            unmatched: unmatched.into_iter(),
            combine,
        }
    }
}

impl<A, B, K, FO, FI, F, R> Iterator for FullJoin<A, B, K, FO, FI, F>
where
    A: Clone,
    B: Clone,
    K: Eq + Hash,
    FO: FnMut(&A) -> K,
    FI: FnMut(&B) -> K,
    F: FnMut(Option<A>, Option<B>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some((outer, inner)) = self.matched.next() {
            return Some((self.combine)(Some(outer), inner));
        }
        let inner = self.unmatched.next()?;
        Some((self.combine)(None, Some(inner)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = self.matched.size_hint();
        (lower.saturating_add(self.unmatched.len()), None)
    }
}

impl<A, B, K, FO, FI, F, R> FusedIterator for FullJoin<A, B, K, FO, FI, F>
where
    A: Clone,
    B: Clone,
    K: Eq + Hash,
    FO: FnMut(&A) -> K,
    FI: FnMut(&B) -> K,
    F: FnMut(Option<A>, Option<B>) -> R,
{
}
