//! Grouping [`Strategy`]s that fold records into multi-valued maps.
//!
//! [`Strategy`]: crate::strategy::Strategy

mod group_by_item;

pub use group_by_item::*;
