use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use super::{Characteristics, Strategy, assert_strategy};

/// A [`Strategy`] assembled from four closures and a set of [`Characteristics`].
///
/// Useful for one-off reductions that do not deserve their own type.
///
/// # Examples
///
/// ```
/// use fold_merge::{prelude::*, strategy::{Characteristics, FnStrategy}};
///
/// // Counts the words that start with an uppercase letter.
/// let capitalized = FnStrategy::new(
///     || 0_usize,
///     |count: &mut usize, word: &str| {
///         if word.starts_with(char::is_uppercase) {
///             *count += 1;
///         }
///     },
///     |a: usize, b: usize| a + b,
///     |count| count,
///     Characteristics::UNORDERED | Characteristics::IDENTITY_FINISH,
/// );
///
/// assert_eq!(capitalized.collect_all("The Noble and the Singer".split(' ')), 3);
/// ```
pub struct FnStrategy<T, Sup, Acc, Comb, Fin> {
    supplier: Sup,
    accumulator: Acc,
    combiner: Comb,
    finisher: Fin,
    characteristics: Characteristics,
    _marker: PhantomData<fn(T)>,
}

impl<T, St, O, Sup, Acc, Comb, Fin> FnStrategy<T, Sup, Acc, Comb, Fin>
where
    Sup: Fn() -> St,
    Acc: Fn(&mut St, T),
    Comb: Fn(St, St) -> St,
    Fin: Fn(St) -> O,
{
    /// Bundles the four steps of a reduction.
    #[inline]
    pub fn new(
        supplier: Sup,
        accumulator: Acc,
        combiner: Comb,
        finisher: Fin,
        characteristics: Characteristics,
    ) -> Self {
        assert_strategy(Self {
            supplier,
            accumulator,
            combiner,
            finisher,
            characteristics,
            _marker: PhantomData,
        })
    }
}

impl<T, St, O, Sup, Acc, Comb, Fin> Strategy for FnStrategy<T, Sup, Acc, Comb, Fin>
where
    Sup: Fn() -> St,
    Acc: Fn(&mut St, T),
    Comb: Fn(St, St) -> St,
    Fin: Fn(St) -> O,
{
    type Item = T;
    type State = St;
    type Output = O;

    #[inline]
    fn supply(&self) -> Self::State {
        (self.supplier)()
    }

    #[inline]
    fn accumulate(&self, state: &mut Self::State, item: Self::Item) {
        (self.accumulator)(state, item)
    }

    #[inline]
    fn combine(&self, a: Self::State, b: Self::State) -> Self::State {
        (self.combiner)(a, b)
    }

    #[inline]
    fn finish(&self, state: Self::State) -> Self::Output {
        (self.finisher)(state)
    }

    #[inline]
    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

impl<T, Sup, Acc, Comb, Fin> Debug for FnStrategy<T, Sup, Acc, Comb, Fin> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("characteristics", &self.characteristics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::FnStrategy;
    use crate::{
        fork_join::ForkJoin,
        store::{self, Customer},
        strategy::{Characteristics, Strategy},
    };

    // The three reductions spelled out as bare closures must agree with the named strategies.

    #[test]
    fn closures_join_names() {
        let roster = store::customers();
        let to_csv = FnStrategy::new(
            String::new,
            |buf: &mut String, name: &str| {
                buf.push_str(name);
                buf.push(',');
            },
            |mut a: String, b: String| {
                a.push_str(&b);
                a
            },
            |mut buf: String| {
                buf.pop();
                buf
            },
            Characteristics::empty(),
        );

        assert_eq!(
            to_csv.collect_all(roster.iter().map(Customer::name)),
            "Joe,Steven,Patrick,Diana,Chris,Kathy,Alice,Andrew,Martin,Amy"
        );
    }

    #[test]
    fn closures_group_by_item() {
        type Groups = HashMap<String, HashSet<String>>;

        let roster = store::customers();
        let to_item_as_key = FnStrategy::new(
            Groups::new,
            |groups: &mut Groups, customer: &Customer| {
                for item in customer.wanted() {
                    groups
                        .entry(item.name().to_owned())
                        .or_default()
                        .insert(customer.name().to_owned());
                }
            },
            |mut a: Groups, b: Groups| {
                for (key, names) in b {
                    a.entry(key).or_default().extend(names);
                }
                a
            },
            |groups| groups,
            Characteristics::CONCURRENT
                | Characteristics::UNORDERED
                | Characteristics::IDENTITY_FINISH,
        );

        let parallel = ForkJoin::new()
            .workers(4)
            .chunk_size(2)
            .collect(&to_item_as_key, roster.iter().collect())
            .expect("closure strategy is merge-safe");

        assert_eq!(parallel, to_item_as_key.collect_all(&roster));
        assert_eq!(parallel["plane"], HashSet::from(["Chris".to_owned()]));
    }

    #[test]
    fn unordered_is_required_for_fork_join() {
        let ordered = FnStrategy::new(
            Vec::new,
            |v: &mut Vec<i32>, x: i32| v.push(x),
            |mut a: Vec<i32>, mut b: Vec<i32>| {
                a.append(&mut b);
                a
            },
            |v| v,
            Characteristics::IDENTITY_FINISH,
        );

        assert!(ForkJoin::new().collect(&ordered, vec![1, 2, 3]).is_err());
        assert_eq!(ordered.collect_all([1, 2, 3]), [1, 2, 3]);
    }
}
