//! The streaming side of a collection: [`Collector`] and [`Merge`].
//!
//! A [`Strategy`](crate::strategy::Strategy) only *describes* how to fold items.
//! A [`Collector`] is one running accumulation created from it: items are fed
//! one by one (or in bulk), then [`finish()`](Collector::finish) turns the
//! accumulated state into the final output.

use std::ops::ControlFlow;

use crate::strategy::Strategy;

/// Collects items and produces a final output.
///
/// This trait requires two core methods:
///
/// - [`collect`](Collector::collect): consumes an item and returns whether the collector continues
///   accumulating further items *after* this operation.
/// - [`finish`](Collector::finish): consumes the collector and returns the accumulated result.
///
/// Every collector in this crate accepts items indefinitely, so [`collect`](Collector::collect)
/// always returns [`Continue(())`]. The [`ControlFlow`] is kept so that hand-written collectors
/// with a quota can still signal that further feeding is meaningless.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use fold_merge::prelude::*;
///
/// #[derive(Default)]
/// struct Longest(Option<String>);
///
/// impl Collector for Longest {
///     type Item = String;
///     type Output = Option<String>;
///
///     fn collect(&mut self, word: String) -> ControlFlow<()> {
///         if self.0.as_ref().is_none_or(|longest| longest.len() < word.len()) {
///             self.0 = Some(word);
///         }
///
///         ControlFlow::Continue(())
///     }
///
///     fn finish(self) -> Self::Output {
///         self.0
///     }
/// }
///
/// let longest = Longest::default()
///     .collect_then_finish(["a", "abc", "ab"].map(String::from));
///
/// assert_eq!(longest.as_deref(), Some("abc"));
/// ```
///
/// [`Continue(())`]: ControlFlow::Continue
pub trait Collector: Sized {
    /// Type of items this collector accepts.
    type Item;

    /// The result this collector yields, via the [`finish`](Collector::finish) method.
    type Output;

    /// Collects an item and returns a [`ControlFlow`] indicating whether the collector is “closed”,
    /// meaning it will no longer accumulate items **right after** this operation.
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()>;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating whether
    /// the collector is “closed” after the last item it took.
    ///
    /// # Examples
    ///
    /// ```
    /// use fold_merge::{prelude::*, string::CsvJoin};
    ///
    /// let strategy = CsvJoin::new();
    /// let mut collector = strategy.collector();
    ///
    /// assert!(collector.collect_many(["a", "b"]).is_continue());
    /// assert!(collector.collect_many(["c"]).is_continue());
    ///
    /// assert_eq!(collector.finish(), "a,b,c");
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()> {
        // `try_for_each` rather than `for`, some iterators (`chain`, `skip`...) fold faster.
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator, consumes the collector, and produces the accumulated result.
    ///
    /// This is equivalent to calling [`collect_many`](Collector::collect_many)
    /// followed by [`finish`](Collector::finish).
    fn collect_then_finish(self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output {
        let mut this = self;

        // Whether it breaks or not, the iterator is either depleted or no longer wanted.
        let _ = this.collect_many(items);
        this.finish()
    }
}

/// A [`Collector`] whose accumulation can be combined with another one
/// built from a disjoint part of the input.
///
/// `a.merge(b)` must behave as if `a` had also collected every item `b` collected.
/// Whether the relative order of `a` and `b` matters is declared by the strategy's
/// [`Characteristics`](crate::strategy::Characteristics).
pub trait Merge: Collector {
    /// Combines two accumulations into one. `other` is consumed.
    fn merge(self, other: Self) -> Self;
}

/// Extends [`Iterator`] with sequential evaluation of a [`Strategy`].
pub trait FoldWith: Iterator {
    /// Feeds every item of this iterator, in order, into a fresh accumulation
    /// of `strategy` and returns the finished output.
    ///
    /// # Examples
    ///
    /// ```
    /// use fold_merge::{prelude::*, string::CsvJoin};
    ///
    /// let csv = ["Joe", "Steven", "Patrick"].into_iter().fold_with(&CsvJoin::new());
    /// assert_eq!(csv, "Joe,Steven,Patrick");
    /// ```
    #[inline]
    fn fold_with<S>(self, strategy: &S) -> S::Output
    where
        Self: Sized,
        S: Strategy<Item = Self::Item>,
    {
        strategy.collector().collect_then_finish(self)
    }
}

impl<I: Iterator> FoldWith for I {}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::{Collector, FoldWith};
    use crate::string::CsvJoin;

    /// Stops after `quota` items, like a bounded buffer.
    struct Quota {
        quota: usize,
        seen: Vec<i32>,
    }

    impl Collector for Quota {
        type Item = i32;
        type Output = Vec<i32>;

        fn collect(&mut self, item: i32) -> ControlFlow<()> {
            self.seen.push(item);
            if self.seen.len() >= self.quota {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }

        fn finish(self) -> Self::Output {
            self.seen
        }
    }

    #[test]
    fn collect_many_stops_at_break() {
        let mut collector = Quota {
            quota: 2,
            seen: vec![],
        };
        let mut items = [1, 2, 3, 4].into_iter();

        assert!(collector.collect_many(&mut items).is_break());
        assert_eq!(items.next(), Some(3));
        assert_eq!(collector.finish(), [1, 2]);
    }

    #[test]
    fn collect_then_finish_ignores_break() {
        let collector = Quota {
            quota: 1,
            seen: vec![],
        };

        assert_eq!(collector.collect_then_finish([7, 8]), [7]);
    }

    #[test]
    fn fold_with_is_repeatable() {
        let strategy = CsvJoin::new();
        let names = ["Alice", "Andrew"];

        let first = names.into_iter().fold_with(&strategy);
        let second = names.into_iter().fold_with(&strategy);

        assert_eq!(first, "Alice,Andrew");
        assert_eq!(first, second);
    }
}
