//! Outer joins over in-memory sequences.
//!
//! Keys are compared with `Eq + Hash`. The absent side of an unmatched row
//! is `None`. Left and right joins stream the driving side; the full join
//! materializes both inputs first.

mod full;
mod left;
mod right;

use std::hash::Hash;

pub use full::FullJoin;
pub use left::LeftJoin;
pub use right::RightJoin;

/// Row shape used when one join is built from another.
type Pair<A, B> = fn(A, Option<B>) -> (A, Option<B>);

fn pair<A, B>(a: A, b: Option<B>) -> (A, Option<B>) {
    (a, b)
}

/// Left outer join of `outer` with `inner`.
pub fn left_join<O, I, K, FO, FI, F, R>(
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    combine: F,
) -> LeftJoin<O::IntoIter, I::IntoIter, K, FO, FI, F>
where
    O: IntoIterator,
    O::Item: Clone,
    I: IntoIterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(O::Item, Option<I::Item>) -> R,
{
    LeftJoin::new(
        outer.into_iter(),
        inner.into_iter(),
        outer_key,
        inner_key,
        combine,
    )
}

/// Right outer join: every `inner` element is kept.
pub fn right_join<O, I, K, FO, FI, F, R>(
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    combine: F,
) -> RightJoin<O::IntoIter, I::IntoIter, K, FO, FI, F>
where
    O: IntoIterator,
    O::Item: Clone,
    I: IntoIterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(Option<O::Item>, I::Item) -> R,
{
    RightJoin::new(
        outer.into_iter(),
        inner.into_iter(),
        outer_key,
        inner_key,
        combine,
    )
}

/// Full outer join. Collects both inputs before returning.
pub fn full_join<O, I, K, FO, FI, F, R>(
    outer: O,
    inner: I,
    outer_key: FO,
    inner_key: FI,
    combine: F,
) -> FullJoin<O::Item, I::Item, K, FO, FI, F>
where
    O: IntoIterator,
    O::Item: Clone,
    I: IntoIterator,
    I::Item: Clone,
    K: Eq + Hash,
    FO: FnMut(&O::Item) -> K,
    FI: FnMut(&I::Item) -> K,
    F: FnMut(Option<O::Item>, Option<I::Item>) -> R,
{
    FullJoin::new(outer, inner, outer_key, inner_key, combine)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn left_join_repeats_outer_per_match() {
        let rows: Vec<_> = left_join(
            vec![String::from("a")],
            vec![(1, "a"), (2, "a"), (3, "a")],
            |o: &String| o.clone(),
            |i: &(i32, &str)| i.1.to_string(),
            |o, i| (o, i.map(|(n, _)| n)),
        )
        .collect();
        assert_eq!(
            rows,
            vec![
                ("a".to_string(), Some(1)),
                ("a".to_string(), Some(2)),
                ("a".to_string(), Some(3)),
            ]
        );
    }

    #[test]
    fn inner_lookup_is_deferred_until_first_next() {
        let built = Cell::new(0);
        let mut join = left_join(
            vec![1],
            vec![1, 2],
            |o: &i32| *o,
            |i: &i32| {
                built.set(built.get() + 1);
                *i
            },
            |o, i| (o, i),
        );
        assert_eq!(built.get(), 0);
        assert_eq!(join.next(), Some((1, Some(1))));
        assert_eq!(built.get(), 2);
        assert_eq!(join.next(), None);
    }

    #[test]
    fn size_hint_counts_one_row_per_outer() {
        let join = left_join(vec![1, 2, 3], Vec::<i32>::new(), |o: &i32| *o, |i: &i32| *i, |o, _| o);
        assert_eq!(join.size_hint().0, 3);
    }

    #[test]
    fn size_hint_saturates_on_unbounded_outer() {
        let mut join = left_join(std::iter::repeat(1), vec![1, 1], |o: &i32| *o, |i: &i32| *i, |o, i| (o, i));
        assert_eq!(join.next(), Some((1, Some(1))));
        assert_eq!(join.size_hint(), (usize::MAX, None));
    }
}
