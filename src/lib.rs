#![forbid(unsafe_code)]
//! colext: extension operators for in-memory collections.
//!
//! - outer joins (`left_join`, `right_join`, `full_join`);
//! - best-effort mapping (`try_select`);
//! - ordering by field names resolved at runtime (`order_by`,
//!   `order_by_navigation`, `DynamicOrder`);
//! - `exists`.
//!
//! Bring the iterator methods into scope with `use colext::prelude::*;`.

pub use colext_core;
pub use colext_operators;

pub use colext_operators::{
    exists, full_join, left_join, order_by, order_by_navigation, order_by_spec, right_join,
    try_select,
};

pub mod prelude {
    pub use colext_operators::prelude::*;
}
