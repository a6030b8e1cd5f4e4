//! Ordering by field names chosen at runtime.

mod dynamic;

use std::iter::FusedIterator;
use std::vec;

use colext_core::record::Record;
use colext_core::spec::SortSpec;

pub use dynamic::{DropReason, DroppedField, DynamicOrder};

/// Iterator over a source sorted by a `DynamicOrder`.
///
/// The source is collected and sorted on the first `next()`. Elements that
/// compare equal on every key keep their source order unless the order was
/// configured as unstable.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct OrderBy<I: Iterator> {
    source: Option<I>,
    order: DynamicOrder<I::Item>,
    sorted: vec::IntoIter<I::Item>,
}

impl<I: Iterator> OrderBy<I> {
    pub(crate) fn new(source: I, order: DynamicOrder<I::Item>) -> Self {
        Self {
            source: Some(source),
            order,
            sorted: Vec::new().into_iter(),
        }
    }

    pub fn order(&self) -> &DynamicOrder<I::Item> {
        &self.order
    }

    fn materialize(&mut self) {
        if let Some(source) = self.source.take() {
            let mut items: Vec<I::Item> = source.collect();
            self.order.sort(&mut items);
            self.sorted = items.into_iter();
        }
    }
}

impl<I: Iterator> Iterator for OrderBy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.materialize();
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

impl<I: Iterator> FusedIterator for OrderBy<I> {}

/// Sort `source` by `fields` of its element type, all in one direction.
pub fn order_by<S, N>(source: S, fields: impl IntoIterator<Item = N>, descending: bool) -> OrderBy<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Record,
    N: Into<String>,
{
    order_by_spec(source, &SortSpec::new(fields).descending(descending))
}

pub fn order_by_spec<S>(source: S, spec: &SortSpec) -> OrderBy<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Record,
{
    OrderBy::new(source.into_iter(), DynamicOrder::new(spec))
}

/// Sort `source` by `fields` of the nested value reached through `nav`.
pub fn order_by_navigation<S, T, F, N>(
    source: S,
    nav: F,
    fields: impl IntoIterator<Item = N>,
    descending: bool,
) -> OrderBy<S::IntoIter>
where
    S: IntoIterator,
    S::Item: 'static,
    T: Record,
    F: Fn(&S::Item) -> &T + Send + Sync + 'static,
    N: Into<String>,
{
    let spec = SortSpec::new(fields).descending(descending);
    OrderBy::new(source.into_iter(), DynamicOrder::navigate(nav, &spec))
}
