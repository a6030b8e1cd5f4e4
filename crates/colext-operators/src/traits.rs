//! Extension traits that expose the operators as iterator methods.
//!
//! Each method forwards to the free function of the same name; the traits are
//! blanket-implemented for every `Iterator`.
//!
//! ```
//! use colext_operators::prelude::*;
//!
//! let users = vec![(1, "ann"), (2, "bob")];
//! let posts = vec![(2, "hello")];
//! let rows: Vec<_> = users
//!     .into_iter()
//!     .left_join(posts, |u| u.0, |p| p.0, |u, p| (u.1, p.map(|p| p.1)))
//!     .collect();
//! assert_eq!(rows, vec![("ann", None), ("bob", Some("hello"))]);
//! ```

use std::hash::Hash;

use colext_core::record::Record;
use colext_core::spec::SortSpec;

use crate::join::{self, FullJoin, LeftJoin, RightJoin};
use crate::order::{self, DynamicOrder, OrderBy};
use crate::select::{self, Attempt, TrySelect};

pub trait JoinExt: Iterator + Sized {
    fn left_join<I, K, FO, FI, F, R>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        combine: F,
    ) -> LeftJoin<Self, I::IntoIter, K, FO, FI, F>
    where
        Self::Item: Clone,
        I: IntoIterator,
        I::Item: Clone,
        K: Eq + Hash,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&I::Item) -> K,
        F: FnMut(Self::Item, Option<I::Item>) -> R,
    {
        join::left_join(self, inner, outer_key, inner_key, combine)
    }

    fn right_join<I, K, FO, FI, F, R>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        combine: F,
    ) -> RightJoin<Self, I::IntoIter, K, FO, FI, F>
    where
        Self::Item: Clone,
        I: IntoIterator,
        I::Item: Clone,
        K: Eq + Hash,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&I::Item) -> K,
        F: FnMut(Option<Self::Item>, I::Item) -> R,
    {
        join::right_join(self, inner, outer_key, inner_key, combine)
    }

    /// Collects both sides before returning.
    fn full_join<I, K, FO, FI, F, R>(
        self,
        inner: I,
        outer_key: FO,
        inner_key: FI,
        combine: F,
    ) -> FullJoin<Self::Item, I::Item, K, FO, FI, F>
    where
        Self::Item: Clone,
        I: IntoIterator,
        I::Item: Clone,
        K: Eq + Hash,
        FO: FnMut(&Self::Item) -> K,
        FI: FnMut(&I::Item) -> K,
        F: FnMut(Option<Self::Item>, Option<I::Item>) -> R,
    {
        join::full_join(self, inner, outer_key, inner_key, combine)
    }
}

impl<T: Iterator> JoinExt for T {}

pub trait TrySelectExt: Iterator + Sized {
    fn try_select<F, A>(self, transform: F) -> TrySelect<Self, F>
    where
        F: FnMut(Self::Item) -> A,
        A: Attempt,
        A::Output: Default,
    {
        select::try_select(self, transform)
    }
}

impl<T: Iterator> TrySelectExt for T {}

pub trait OrderByFieldsExt: Iterator + Sized {
    fn order_by_fields<N>(self, fields: impl IntoIterator<Item = N>, descending: bool) -> OrderBy<Self>
    where
        Self::Item: Record,
        N: Into<String>,
    {
        order::order_by(self, fields, descending)
    }

    fn order_by_spec(self, spec: &SortSpec) -> OrderBy<Self>
    where
        Self::Item: Record,
    {
        order::order_by_spec(self, spec)
    }

    fn order_by_navigation<T, F, N>(
        self,
        nav: F,
        fields: impl IntoIterator<Item = N>,
        descending: bool,
    ) -> OrderBy<Self>
    where
        Self::Item: 'static,
        T: Record,
        F: Fn(&Self::Item) -> &T + Send + Sync + 'static,
        N: Into<String>,
    {
        order::order_by_navigation(self, nav, fields, descending)
    }

    /// Sort with an already resolved order.
    fn order_by_dynamic(self, order: DynamicOrder<Self::Item>) -> OrderBy<Self> {
        OrderBy::new(self, order)
    }
}

impl<T: Iterator> OrderByFieldsExt for T {}

pub trait ExistsExt: Iterator + Sized {
    fn exists<P>(self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        crate::exists::exists(self, predicate)
    }
}

impl<T: Iterator> ExistsExt for T {}
