//! String-producing [`Strategy`]s.
//!
//! [`Strategy`]: crate::strategy::Strategy

mod csv_join;

pub use csv_join::*;
