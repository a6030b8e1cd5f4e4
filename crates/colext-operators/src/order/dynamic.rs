//! Runtime-resolved multi-key comparator.
//!
//! Resolution:
//! 1. drop case-insensitive duplicate names (first occurrence wins);
//! 2. look each name up in the element's `FieldTable`, ignoring case;
//! 3. drop names that are not registered or whose type cannot be ordered;
//! 4. keep one key per surviving field, in request order.
//!
//! Dropped names are not errors. They are recorded in `dropped()` and, with
//! the `tracing` feature, logged at debug level.

use std::cmp::Ordering;
use std::fmt;

use colext_core::config::ExtConfig;
use colext_core::error::{Error, Result};
use colext_core::record::{Accessor, FieldTable, Record};
use colext_core::schema::{DataType, Field};
use colext_core::spec::{SortDirection, SortSpec};
use colext_core::types::Value;

/// Why a requested sort field was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Unknown,
    NotOrderable(DataType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedField {
    pub name: String,
    pub reason: DropReason,
}

impl DroppedField {
    fn into_error(self) -> Error {
        match self.reason {
            DropReason::Unknown => Error::UnknownField(self.name),
            DropReason::NotOrderable(data_type) => Error::NotOrderable {
                field: self.name,
                data_type,
            },
        }
    }
}

struct SortKey<T> {
    field: Field,
    accessor: Accessor<T>,
}

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

pub struct DynamicOrder<T> {
    keys: Vec<SortKey<T>>,
    dropped: Vec<DroppedField>,
    direction: SortDirection,
    stable: bool,
}

impl<T: 'static> DynamicOrder<T> {
    /// Resolve `spec` against `T`'s own fields.
    pub fn new(spec: &SortSpec) -> Self
    where
        T: Record,
    {
        Self::from_table(&T::field_table(), spec)
    }

    /// Resolve `spec` against the fields of `N`, reached from each element
    /// through `nav`.
    pub fn navigate<N, F>(nav: F, spec: &SortSpec) -> Self
    where
        N: Record,
        F: Fn(&T) -> &N + Send + Sync + 'static,
    {
        Self::from_table(&N::field_table().navigate(nav), spec)
    }

    /// Like `new`, but any name that would be dropped is an error.
    pub fn strict(spec: &SortSpec) -> Result<Self>
    where
        T: Record,
    {
        Self::strict_from_table(&T::field_table(), spec)
    }

    pub fn strict_from_table(table: &FieldTable<T>, spec: &SortSpec) -> Result<Self> {
        let mut order = Self::from_table(table, spec);
        if order.dropped.is_empty() {
            Ok(order)
        } else {
            Err(order.dropped.swap_remove(0).into_error())
        }
    }

    pub fn from_table(table: &FieldTable<T>, spec: &SortSpec) -> Self {
        let mut keys = Vec::new();
        let mut dropped = Vec::new();

        for name in spec.distinct_fields() {
            let reason = match table.resolve(name) {
                None => DropReason::Unknown,
                Some(entry) if !entry.field.data_type.is_orderable() => {
                    DropReason::NotOrderable(entry.field.data_type)
                }
                Some(entry) => match entry.accessor() {
                    Some(accessor) => {
                        keys.push(SortKey {
                            field: entry.field.clone(),
                            accessor: accessor.clone(),
                        });
                        continue;
                    }
                    None => DropReason::NotOrderable(entry.field.data_type),
                },
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(field = %name, reason = ?reason, "dropping sort field");

            dropped.push(DroppedField {
                name: name.to_string(),
                reason,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            keys = keys.len(),
            dropped = dropped.len(),
            direction = %spec.direction,
            "resolved dynamic order"
        );

        Self {
            keys,
            dropped,
            direction: spec.direction,
            stable: true,
        }
    }
}

impl<T> DynamicOrder<T> {
    /// Pick stable or unstable sorting from `cfg`.
    pub fn with_config(mut self, cfg: &ExtConfig) -> Self {
        self.stable = cfg.stable_sort;
        self
    }

    pub fn stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Fields actually used, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &Field> {
        self.keys.iter().map(|k| &k.field)
    }

    pub fn dropped(&self) -> &[DroppedField] {
        &self.dropped
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// No usable keys; sorting leaves the input as it is.
    pub fn is_identity(&self) -> bool {
        self.keys.is_empty()
    }

    /// Read every key of `item`, in key order.
    pub fn extract(&self, item: &T) -> Vec<Value> {
        self.keys.iter().map(|k| (*k.accessor)(item)).collect()
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for key in &self.keys {
            let ord = (*key.accessor)(a).cmp(&(*key.accessor)(b));
            if ord != Ordering::Equal {
                return self.direction.apply(ord);
            }
        }
        Ordering::Equal
    }

    fn compare_keys(&self, a: &[Value], b: &[Value]) -> Ordering {
        for (x, y) in a.iter().zip(b) {
            let ord = x.cmp(y);
            if ord != Ordering::Equal {
                return self.direction.apply(ord);
            }
        }
        Ordering::Equal
    }

    /// Sort `items` in place. Each element's keys are read once.
    pub fn sort(&self, items: &mut [T]) {
        if self.is_identity() {
            return;
        }

        let mut keyed: Vec<(Vec<Value>, usize)> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (self.extract(item), idx))
            .collect();

        let by_keys = |a: &(Vec<Value>, usize), b: &(Vec<Value>, usize)| self.compare_keys(&a.0, &b.0);
        if self.stable {
            keyed.sort_by(by_keys);
        } else {
            keyed.sort_unstable_by(by_keys);
        }

        apply_permutation(items, keyed.into_iter().map(|(_, idx)| idx).collect());
    }
}

impl<T> Clone for DynamicOrder<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            dropped: self.dropped.clone(),
            direction: self.direction,
            stable: self.stable,
        }
    }
}

impl<T> fmt::Debug for DynamicOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicOrder")
            .field("keys", &self.keys().map(|k| &k.name).collect::<Vec<_>>())
            .field("dropped", &self.dropped)
            .field("direction", &self.direction)
            .field("stable", &self.stable)
            .finish()
    }
}

/// Reorder `items` so that position `i` holds the element previously at
/// `order[i]`. Walks each cycle once with swaps.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut pos = start;
        loop {
            let from = order[pos];
            order[pos] = pos;
            if from == start {
                break;
            }
            items.swap(pos, from);
            pos = from;
        }
    }
}
