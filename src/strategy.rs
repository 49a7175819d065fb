//! The collect abstraction: how to start, fold, merge and finish an accumulation.
//!
//! A [`Strategy`] bundles four steps:
//!
//! 1. [`supply`](Strategy::supply) a fresh, empty state.
//! 2. [`accumulate`](Strategy::accumulate) one item into a state.
//! 3. [`combine`](Strategy::combine) two states folded from disjoint parts of the input.
//! 4. [`finish`](Strategy::finish) a state into the output.
//!
//! together with its [`Characteristics`], which tell an evaluator whether the
//! input may be partitioned and folded out of order.
//!
//! Strategies are stateless: the same strategy value may drive any number of
//! accumulations, sequentially or from several threads at once.

use crate::collector::Collector;

mod characteristics;
mod fn_strategy;
mod folding;

pub use characteristics::*;
pub use fn_strategy::*;
pub use folding::*;

/// A reduction described as supply/accumulate/combine/finish.
///
/// # Implementing
///
/// `combine` receives both states by value and returns the merged one. It may
/// reuse either input as the result. If the strategy declares
/// [`Characteristics::UNORDERED`], `combine` must be associative and the output
/// must not depend on how the input was partitioned or in which order partial
/// states are combined.
///
/// # Examples
///
/// ```
/// use fold_merge::prelude::*;
///
/// struct Total;
///
/// impl Strategy for Total {
///     type Item = u32;
///     type State = u64;
///     type Output = u64;
///
///     fn supply(&self) -> u64 {
///         0
///     }
///
///     fn accumulate(&self, state: &mut u64, item: u32) {
///         *state += u64::from(item);
///     }
///
///     fn combine(&self, a: u64, b: u64) -> u64 {
///         a + b
///     }
///
///     fn finish(&self, state: u64) -> u64 {
///         state
///     }
///
///     fn characteristics(&self) -> Characteristics {
///         Characteristics::UNORDERED | Characteristics::IDENTITY_FINISH
///     }
/// }
///
/// assert_eq!(Total.collect_all([1, 2, 3]), 6);
/// ```
pub trait Strategy {
    /// Type of items folded into the state.
    type Item;

    /// The mutable accumulation.
    type State;

    /// The externally visible result.
    type Output;

    /// Creates a new, empty state.
    fn supply(&self) -> Self::State;

    /// Folds one item into `state`.
    fn accumulate(&self, state: &mut Self::State, item: Self::Item);

    /// Combines two states built from disjoint parts of the input.
    ///
    /// For strategies that are not [`UNORDERED`](Characteristics::UNORDERED),
    /// `a` must hold the items that come first.
    fn combine(&self, a: Self::State, b: Self::State) -> Self::State;

    /// Turns the final state into the output.
    fn finish(&self, state: Self::State) -> Self::Output;

    /// Declares how this strategy may be evaluated.
    ///
    /// The default is [`Characteristics::empty()`]: strictly sequential, ordered evaluation.
    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::empty()
    }

    /// Starts a new accumulation driven by this strategy.
    #[inline]
    fn collector(&self) -> Folding<'_, Self>
    where
        Self: Sized,
    {
        Folding::new(self)
    }

    /// Folds every item in order and returns the finished output.
    ///
    /// # Examples
    ///
    /// ```
    /// use fold_merge::{prelude::*, bits::{BitString, BitToken}};
    ///
    /// let bits = BitString::new().collect_all([BitToken::single(3), BitToken::range(1, 2)]);
    /// assert_eq!(bits, "111");
    /// ```
    #[inline]
    fn collect_all(&self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output
    where
        Self: Sized,
    {
        self.collector().collect_then_finish(items)
    }
}

#[inline(always)]
pub(crate) const fn assert_strategy<S: Strategy>(strategy: S) -> S {
    strategy
}
