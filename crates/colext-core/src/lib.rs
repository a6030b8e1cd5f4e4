#![forbid(unsafe_code)]
//! colext-core: the pieces the operators share.
//!
//! - `types`: runtime sort-key values (`Value`) and the `IntoValue` bridge
//!   from plain Rust field types.
//! - `schema`: field descriptors (`Field`, `Schema`, `DataType`).
//! - `record`: per-type accessor tables (`FieldTable`, `Record`) that stand
//!   in for runtime reflection.
//! - `spec`: sort specifications, parseable from JSON or YAML.
//! - `config`: environment-driven defaults.
//!
//! Nothing here iterates user sequences; that lives in `colext-operators`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod record;
pub mod schema;
pub mod spec;
pub mod types;
