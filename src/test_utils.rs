use std::fmt::Debug;

use itertools::Itertools;
use proptest::{collection::vec as propvec, prelude::*, test_runner::TestCaseResult};

use crate::{
    collector::{Collector, Merge},
    fork_join::ForkJoin,
    strategy::{Folding, Strategy as FoldStrategy},
};

/// Cut points for [`PartitionTester`]. Unsorted, possibly repeated or past the end.
pub fn any_cuts() -> impl Strategy<Value = Vec<usize>> {
    propvec(0..32_usize, ..5)
}

/// Checks that a merge-safe strategy yields the same output however the
/// input is partitioned and however partial states are combined.
pub struct PartitionTester<S>
where
    S: FoldStrategy,
{
    pub strategy: S,
    pub items: Vec<S::Item>,
    /// Indices the input is split at. Clamped to the input length.
    pub cuts: Vec<usize>,
}

impl<S> PartitionTester<S>
where
    S: FoldStrategy + Sync,
    S::Item: Clone + Send,
    S::State: Send,
    S::Output: PartialEq + Debug,
{
    pub fn test_partitions(self) -> TestCaseResult {
        let Self {
            strategy,
            items,
            cuts,
        } = self;

        prop_assert!(
            strategy.characteristics().is_merge_safe(),
            "only merge-safe strategies can be partitioned"
        );

        let expected = strategy.collect_all(items.iter().cloned());
        prop_assert_eq!(
            &strategy.collect_all(items.iter().cloned()),
            &expected,
            "sequential evaluation is not repeatable"
        );

        let partitions = split_at(&items, &cuts);
        let fold = |partition: &Vec<S::Item>| {
            let mut folding = strategy.collector();
            let _ = folding.collect_many(partition.iter().cloned());
            folding
        };
        let finish = |merged: Option<Folding<'_, S>>| {
            merged.unwrap_or_else(|| strategy.collector()).finish()
        };

        let forward = partitions.iter().map(fold).reduce(Merge::merge);
        prop_assert_eq!(&finish(forward), &expected, "left-to-right merge mismatched");

        let backward = partitions.iter().rev().map(fold).reduce(Merge::merge);
        prop_assert_eq!(&finish(backward), &expected, "right-to-left merge mismatched");

        let tree = partitions.iter().map(fold).tree_reduce(Merge::merge);
        prop_assert_eq!(&finish(tree), &expected, "tree merge mismatched");

        let forked = ForkJoin::new()
            .workers(3)
            .collect_partitioned(&strategy, partitions)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&forked, &expected, "fork-join mismatched");

        Ok(())
    }
}

fn split_at<T: Clone>(items: &[T], cuts: &[usize]) -> Vec<Vec<T>> {
    let cuts = cuts
        .iter()
        .map(|&cut| cut.min(items.len()))
        .sorted_unstable()
        .chain([items.len()]);

    let mut start = 0;
    cuts.map(|cut| {
        let partition = items[start..cut].to_vec();
        start = cut;
        partition
    })
    .collect()
}

#[test]
fn split_at_keeps_empty_partitions() {
    let parts = split_at(&[1, 2, 3, 4], &[9, 2, 2]);
    assert_eq!(parts, [vec![1, 2], vec![], vec![3, 4], vec![]]);
}
