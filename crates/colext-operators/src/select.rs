//! Best-effort mapping.
//!
//! `try_select` applies a fallible transform to every element and
//! substitutes `Default::default()` wherever it fails. The output always has
//! the source's length; failures are dropped without a trace.

use std::iter::FusedIterator;

/// The outcome of one fallible transform call.
pub trait Attempt {
    type Output;

    /// `None` on failure; the failure itself is discarded.
    fn attempt(self) -> Option<Self::Output>;
}

impl<T, E> Attempt for Result<T, E> {
    type Output = T;

    fn attempt(self) -> Option<T> {
        self.ok()
    }
}

impl<T> Attempt for Option<T> {
    type Output = T;

    fn attempt(self) -> Option<T> {
        self
    }
}

#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct TrySelect<I, F> {
    iter: I,
    transform: F,
}

impl<I, F> TrySelect<I, F> {
    pub(crate) fn new(iter: I, transform: F) -> Self {
        Self { iter, transform }
    }
}

impl<I, F, A> Iterator for TrySelect<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> A,
    A: Attempt,
    A::Output: Default,
{
    type Item = A::Output;

    fn next(&mut self) -> Option<A::Output> {
        let item = self.iter.next()?;
        Some((self.transform)(item).attempt().unwrap_or_default())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, A> DoubleEndedIterator for TrySelect<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> A,
    A: Attempt,
    A::Output: Default,
{
    fn next_back(&mut self) -> Option<A::Output> {
        let item = self.iter.next_back()?;
        Some((self.transform)(item).attempt().unwrap_or_default())
    }
}

impl<I, F, A> ExactSizeIterator for TrySelect<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> A,
    A: Attempt,
    A::Output: Default,
{
}

impl<I, F, A> FusedIterator for TrySelect<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> A,
    A: Attempt,
    A::Output: Default,
{
}

/// Map `source` through `transform`, replacing failures with the default.
pub fn try_select<S, F, A>(source: S, transform: F) -> TrySelect<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> A,
    A: Attempt,
    A::Output: Default,
{
    TrySelect::new(source.into_iter(), transform)
}
