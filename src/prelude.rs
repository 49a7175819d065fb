//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use fold_merge::prelude::*;
//! ```

pub use crate::collector::{Collector, FoldWith, Merge};
pub use crate::strategy::{Characteristics, Strategy};
