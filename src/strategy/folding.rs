use std::{
    fmt::{self, Debug},
    ops::ControlFlow,
};

use crate::{
    collector::{Collector, Merge},
    strategy::Strategy,
};

/// One running accumulation of a [`Strategy`].
///
/// This struct is created by [`Strategy::collector()`].
///
/// # Examples
///
/// ```
/// use fold_merge::{prelude::*, bits::{BitString, BitToken}};
///
/// let strategy = BitString::new();
///
/// let mut left = strategy.collector();
/// let _ = left.collect(BitToken::single(5));
///
/// let mut right = strategy.collector();
/// let _ = right.collect(BitToken::range(1, 2));
///
/// assert_eq!(left.merge(right).finish(), "11001");
/// ```
pub struct Folding<'s, S: Strategy> {
    strategy: &'s S,
    state: S::State,
}

impl<'s, S: Strategy> Folding<'s, S> {
    /// Starts from a freshly supplied state.
    #[inline]
    pub fn new(strategy: &'s S) -> Self {
        Self::with_state(strategy, strategy.supply())
    }

    /// Resumes from an existing state.
    #[inline]
    pub fn with_state(strategy: &'s S, state: S::State) -> Self {
        Self { strategy, state }
    }

    #[inline]
    pub fn state(&self) -> &S::State {
        &self.state
    }

    /// Gives the state back without finishing it.
    #[inline]
    pub fn into_state(self) -> S::State {
        self.state
    }
}

impl<S: Strategy> Collector for Folding<'_, S> {
    type Item = S::Item;
    type Output = S::Output;

    #[inline]
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()> {
        self.strategy.accumulate(&mut self.state, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.strategy.finish(self.state)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()> {
        let strategy = self.strategy;
        let state = &mut self.state;
        items
            .into_iter()
            .for_each(|item| strategy.accumulate(state, item));
        ControlFlow::Continue(())
    }
}

impl<S: Strategy> Merge for Folding<'_, S> {
    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            strategy: self.strategy,
            state: self.strategy.combine(self.state, other.state),
        }
    }
}

impl<S> Clone for Folding<'_, S>
where
    S: Strategy,
    S::State: Clone,
{
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy,
            state: self.state.clone(),
        }
    }
}

impl<S> Debug for Folding<'_, S>
where
    S: Strategy,
    S::State: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Folding")
            .field("state", &self.state)
            .finish()
    }
}
