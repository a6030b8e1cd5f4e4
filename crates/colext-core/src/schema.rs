//! Field descriptors. Pure data; the accessors themselves live in `record`.
//!
//! Names are matched case-insensitively everywhere a caller supplies them,
//! so `"name"` and `"Name"` resolve to the same descriptor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Int32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Char,
    Utf8,
    Binary,
    List,
    Struct,
}

impl DataType {
    /// Whether values of this type can act as a sort key.
    ///
    /// Byte strings and nested values are readable but never ordered.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, DataType::Binary | DataType::List | DataType::Struct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        fold_case(&self.name) == fold_case(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Case-insensitive lookup; the first registered match wins.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.is_named(name))
    }
}

/// Fold a field name for case-insensitive comparison.
pub fn fold_case(name: &str) -> String {
    name.to_lowercase()
}
