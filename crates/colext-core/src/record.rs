//! Per-type field tables.
//!
//! A `FieldTable<T>` lists the fields of `T` that may be addressed by name at
//! runtime. Each entry pairs a `Field` descriptor with an accessor producing
//! the field's `Value`. A field that is not registered does not exist as far
//! as name resolution is concerned.
//!
//! ```
//! use colext_core::record::{FieldTable, Record};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Record for Person {
//!     fn field_table() -> FieldTable<Self> {
//!         FieldTable::new()
//!             .with("Name", |p: &Person| p.name.clone())
//!             .with("Age", |p: &Person| p.age)
//!     }
//! }
//!
//! let table = Person::field_table();
//! assert!(table.resolve("name").is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::schema::{DataType, Field, Schema};
use crate::types::{IntoValue, Value};

/// Reads one field of `T` as a sort-key value.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Implemented by element types that can be ordered by field name.
pub trait Record: Sized + 'static {
    fn field_table() -> FieldTable<Self>;
}

pub struct FieldEntry<T> {
    pub field: Field,
    accessor: Option<Accessor<T>>,
}

impl<T> FieldEntry<T> {
    /// `None` for opaque fields, which have no sortable value.
    pub fn accessor(&self) -> Option<&Accessor<T>> {
        self.accessor.as_ref()
    }

    /// Read this field from `item`; opaque fields read as `Null`.
    pub fn read(&self, item: &T) -> Value {
        match &self.accessor {
            Some(get) => (*get)(item),
            None => Value::Null,
        }
    }
}

impl<T> Clone for FieldEntry<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("field", &self.field)
            .field("opaque", &self.accessor.is_none())
            .finish()
    }
}

pub struct FieldTable<T> {
    entries: Vec<FieldEntry<T>>,
}

impl<T: 'static> FieldTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a readable field. Type and nullability come from `V`.
    pub fn with<V, F>(mut self, name: impl Into<String>, get: F) -> Self
    where
        V: IntoValue,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.entries.push(FieldEntry {
            field: Field::new(name, V::DATA_TYPE, V::NULLABLE),
            accessor: Some(Arc::new(move |item: &T| get(item).into_value())),
        });
        self
    }

    /// Register a readable field that has no sortable value, such as a
    /// nested collection.
    pub fn with_opaque(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.entries.push(FieldEntry {
            field: Field::new(name, data_type, true),
            accessor: None,
        });
        self
    }

    /// Case-insensitive lookup; the first registered match wins.
    pub fn resolve(&self, name: &str) -> Option<&FieldEntry<T>> {
        self.entries.iter().find(|e| e.field.is_named(name))
    }

    pub fn schema(&self) -> Schema {
        Schema::new(self.entries.iter().map(|e| e.field.clone()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-root this table onto an outer type `S` that reaches `T` through
    /// `nav`. Every accessor dereferences the navigation first.
    pub fn navigate<S, F>(self, nav: F) -> FieldTable<S>
    where
        S: 'static,
        F: Fn(&S) -> &T + Send + Sync + 'static,
    {
        let nav = Arc::new(nav);
        let entries = self
            .entries
            .into_iter()
            .map(|entry| FieldEntry {
                field: entry.field,
                accessor: entry.accessor.map(|get| {
                    let nav = Arc::clone(&nav);
                    Arc::new(move |outer: &S| (*get)((*nav)(outer))) as Accessor<S>
                }),
            })
            .collect();
        FieldTable { entries }
    }
}

impl<T: 'static> Default for FieldTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldTable<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
