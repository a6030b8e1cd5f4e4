//! Right outer join: a left join with the operands swapped.

use std::hash::Hash;
use std::iter::FusedIterator;

use super::left::LeftJoin;
use super::{pair, Pair};

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RightJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    I: Iterator,
{
    swapped: LeftJoin<I, O, K, FI, FO, Pair<I::Item, O::Item>>,
    combine: F,
}

impl<O, I, K, FO, FI, F> RightJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    I: Iterator,
{
    pub(crate) fn new(outer: O, inner: I, outer_key: FO, inner_key: FI, combine: F) -> Self {
        Self {
            swapped: LeftJoin::new(inner, outer, inner_key, outer_key, pair as Pair<_, _>),
            combine,
        }
    }
}

impl<O, I, K, FO, FI, F, R> Iterator for RightJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    O::Item: Clone,
    I: Iterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(Option<O::Item>, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (inner, outer) = self.swapped.next()?;
        Some((self.combine)(outer, inner))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.swapped.size_hint()
    }
}

impl<O, I, K, FO, FI, F, R> FusedIterator for RightJoin<O, I, K, FO, FI, F>
where
    O: Iterator,
    O::Item: Clone,
    I: FusedIterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(Option<O::Item>, I::Item) -> R,
{
}
