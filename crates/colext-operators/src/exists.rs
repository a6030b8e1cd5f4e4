//! Existence check.

/// `true` if any element of `source` satisfies `predicate`.
pub fn exists<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    source.into_iter().any(predicate)
}
