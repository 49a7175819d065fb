use std::{
    borrow::Borrow,
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::strategy::{Strategy, assert_strategy};

/// A [`Strategy`] that joins strings with a separator, in traversal order.
/// Its [`Output`](Strategy::Output) is [`String`].
///
/// Every item is pushed followed by the separator, and [`finish`](Strategy::finish)
/// drops the trailing one. An empty input yields an empty string.
///
/// [`combine`](Strategy::combine) appends the second buffer to the first, so the
/// result is only meaningful when partial states are combined in input order.
/// This strategy declares no [`Characteristics`](crate::strategy::Characteristics) and is refused by
/// [`ForkJoin`](crate::fork_join::ForkJoin).
///
/// # Examples
///
/// ```
/// use fold_merge::{prelude::*, string::CsvJoin};
///
/// let names = ["Joe", "Steven", "Patrick"];
///
/// assert_eq!(CsvJoin::new().collect_all(names), "Joe,Steven,Patrick");
/// assert_eq!(CsvJoin::with_separator(';').collect_all(names), "Joe;Steven;Patrick");
/// assert_eq!(CsvJoin::<&str>::new().collect_all([]), "");
/// ```
pub struct CsvJoin<S> {
    separator: char,
    _marker: PhantomData<fn(S)>,
}

impl<S> CsvJoin<S>
where
    S: Borrow<str>,
{
    /// Creates a joiner using `,` as the separator.
    #[inline]
    pub const fn new() -> Self {
        Self::with_separator(',')
    }

    #[inline]
    pub const fn with_separator(separator: char) -> Self {
        assert_strategy(Self {
            separator,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub const fn separator(&self) -> char {
        self.separator
    }
}

impl<S> Strategy for CsvJoin<S>
where
    S: Borrow<str>,
{
    type Item = S;
    type State = String;
    type Output = String;

    #[inline]
    fn supply(&self) -> Self::State {
        String::new()
    }

    #[inline]
    fn accumulate(&self, buf: &mut Self::State, item: Self::Item) {
        buf.push_str(item.borrow());
        buf.push(self.separator);
    }

    #[inline]
    fn combine(&self, mut a: Self::State, b: Self::State) -> Self::State {
        a.push_str(&b);
        a
    }

    #[inline]
    fn finish(&self, mut buf: Self::State) -> Self::Output {
        // Empty input never pushed a separator.
        if !buf.is_empty() {
            buf.pop();
        }
        buf
    }
}

impl<S> Default for CsvJoin<S>
where
    S: Borrow<str>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for CsvJoin<S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for CsvJoin<S> {}

impl<S> Debug for CsvJoin<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvJoin")
            .field("separator", &self.separator)
            .finish()
    }
}
