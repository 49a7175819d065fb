use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::{
    store::Customer,
    strategy::{Characteristics, Strategy, assert_strategy},
};

/// Item name to the names of every customer wanting it.
pub type ItemGroups = HashMap<String, HashSet<String>>;

/// A [`Strategy`] that groups customers by the items they want.
/// Its [`Output`](Strategy::Output) is [`ItemGroups`].
///
/// Each key is an item name and its value the set of customer names wanting that item.
/// Items nobody wants never appear, and a customer with an empty wish list contributes nothing.
///
/// The result does not depend on traversal order nor on how the input is partitioned,
/// so this strategy is accepted by [`ForkJoin`](crate::fork_join::ForkJoin).
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use fold_merge::{prelude::*, group::GroupByItem, store::Customer};
///
/// let customers = [
///     Customer::new("Joe", ["plate", "fork"]),
///     Customer::new("Martin", ["fork"]),
/// ];
///
/// let groups = GroupByItem::new().collect_all(&customers);
///
/// assert_eq!(groups["plate"], HashSet::from(["Joe".to_owned()]));
/// assert_eq!(groups["fork"], HashSet::from(["Joe".to_owned(), "Martin".to_owned()]));
/// ```
pub struct GroupByItem<C> {
    _marker: PhantomData<fn(C)>,
}

impl<C> GroupByItem<C>
where
    C: Borrow<Customer>,
{
    #[inline]
    pub const fn new() -> Self {
        assert_strategy(Self {
            _marker: PhantomData,
        })
    }
}

impl<C> Strategy for GroupByItem<C>
where
    C: Borrow<Customer>,
{
    type Item = C;
    type State = ItemGroups;
    type Output = ItemGroups;

    #[inline]
    fn supply(&self) -> Self::State {
        ItemGroups::new()
    }

    fn accumulate(&self, groups: &mut Self::State, customer: Self::Item) {
        let customer = customer.borrow();
        for item in customer.wanted() {
            groups
                .entry(item.name().to_owned())
                .or_default()
                .insert(customer.name().to_owned());
        }
    }

    fn combine(&self, mut a: Self::State, b: Self::State) -> Self::State {
        for (item, names) in b {
            a.entry(item).or_default().extend(names);
        }
        a
    }

    #[inline]
    fn finish(&self, groups: Self::State) -> Self::Output {
        groups
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::CONCURRENT | Characteristics::UNORDERED | Characteristics::IDENTITY_FINISH
    }
}

impl<C> Default for GroupByItem<C>
where
    C: Borrow<Customer>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for GroupByItem<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for GroupByItem<C> {}

impl<C> Debug for GroupByItem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupByItem").finish()
    }
}
