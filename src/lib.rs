//! Reductions described as *supply, accumulate, combine, finish*, evaluated
//! sequentially or fork-join style.
//!
//! A [`Strategy`] says how to start an empty accumulation, how to fold one item
//! into it, how to merge two accumulations built from disjoint parts of the input,
//! and how to turn the final accumulation into the result. Its
//! [`Characteristics`] say whether the input may be split and folded out of order.
//!
//! The same strategy drives both evaluation modes:
//!
//! ```
//! use fold_merge::{prelude::*, bits::{BitString, parse_tokens}, fork_join::ForkJoin};
//!
//! let tokens = parse_tokens("22-24,9,42-44,11,4").unwrap();
//! let strategy = BitString::new();
//!
//! let sequential = tokens.iter().copied().fold_with(&strategy);
//! let parallel = ForkJoin::new().workers(2).collect(&strategy, tokens).unwrap();
//!
//! assert_eq!(sequential, parallel);
//! ```
//!
//! # Strategies
//!
//! - [`string::CsvJoin`] joins names with a separator. Ordered only.
//! - [`group::GroupByItem`] maps each wanted item to the set of customers wanting it.
//! - [`bits::BitString`] decodes 1-based bit positions and ranges into a binary string.
//! - [`strategy::FnStrategy`] builds a one-off strategy from four closures.
//!
//! ```
//! use fold_merge::{prelude::*, string::CsvJoin, store::{self, Customer}};
//!
//! let roster = store::customers();
//! let names = roster.iter().map(Customer::name).fold_with(&CsvJoin::new());
//!
//! assert_eq!(names, "Joe,Steven,Patrick,Diana,Chris,Kathy,Alice,Andrew,Martin,Amy");
//! ```
//!
//! # Collector
//!
//! [`Strategy::collector()`] starts one running accumulation, a [`Collector`].
//! Roughly:
//!
//! ```
//! # use std::ops::ControlFlow;
//! pub trait Collector {
//!     type Item;
//!     type Output;
//!     fn collect(&mut self, item: Self::Item) -> ControlFlow<()>;
//!     fn finish(self) -> Self::Output;
//! }
//!
//! pub trait Merge: Collector {
//!     fn merge(self, other: Self) -> Self;
//! }
//! ```
//!
//! [`Strategy`]: strategy::Strategy
//! [`Strategy::collector()`]: strategy::Strategy::collector
//! [`Characteristics`]: strategy::Characteristics
//! [`Collector`]: collector::Collector

pub mod bits;
pub mod collector;
pub mod fork_join;
pub mod group;
pub mod prelude;
pub mod store;
pub mod strategy;
pub mod string;

#[cfg(test)]
mod test_utils;
