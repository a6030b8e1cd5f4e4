//! Convenient re-exports for downstream crates.

pub use crate::config::ExtConfig;
pub use crate::error::{Error, Result};
pub use crate::record::{Accessor, FieldEntry, FieldTable, Record};
pub use crate::schema::{DataType, Field, Schema};
pub use crate::spec::{SortDirection, SortSpec};
pub use crate::types::{IntoValue, Value};
