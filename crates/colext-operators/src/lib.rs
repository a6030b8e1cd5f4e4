#![forbid(unsafe_code)]
//! colext-operators: join / try-select / dynamic order / exists over plain
//! Rust iterators.
//!
//! Design intent:
//! - Operators are pure, synchronous, and lazy wherever the algorithm allows.
//!   `full_join` and the dynamic orderings buffer their input.
//! - Panics inside caller closures propagate; only `try_select` swallows
//!   failures, and only those reported through its `Attempt` return value.
//! - Field names for dynamic ordering resolve against a `FieldTable`
//!   (see `colext-core::record`); names that do not resolve are dropped.

pub mod exists;
pub mod join;
pub mod order;
pub mod select;
pub mod traits;

pub use exists::exists;
pub use join::{full_join, left_join, right_join, FullJoin, LeftJoin, RightJoin};
pub use order::{
    order_by, order_by_navigation, order_by_spec, DropReason, DroppedField, DynamicOrder, OrderBy,
};
pub use select::{try_select, Attempt, TrySelect};
pub use traits::{ExistsExt, JoinExt, OrderByFieldsExt, TrySelectExt};

pub mod prelude {
    //! Extension traits plus the core types callers usually need with them.

    pub use crate::traits::{ExistsExt, JoinExt, OrderByFieldsExt, TrySelectExt};
    pub use crate::{DynamicOrder, OrderBy};
    pub use colext_core::prelude::*;
}
