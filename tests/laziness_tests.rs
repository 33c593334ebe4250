//! Pull-accounting tests for the lazy operators.
//!
//! Every lazy stage pulls at most one upstream element per element it
//! produces, so composing stages over an infinite source terminates as soon
//! as a bounded stage stops asking.

#![cfg(feature = "sequence")]

use std::cell::Cell;

use itertricks::compose::{add, gt, lt};
use itertricks::pipe;
use itertricks::sequence::{
    WindowOptions, as_array, chunked_with, count, cycle, drop_with, filter_indexed_with,
    filter_not_with, filter_with, generator_from, map_not_null_with, map_with,
    repeat, scan_fold_with, scan_with, take_while_with, take_with, windowed_with, zip_map_with,
    zip_with,
};
use rstest::rstest;

/// Counts how many elements were pulled from an infinite source.
#[derive(Default)]
struct PullCounter {
    pulls: Cell<usize>,
}

impl PullCounter {
    fn naturals(&self) -> impl Iterator<Item = u64> + Clone + '_ {
        count::<u64>().inspect(|_| self.pulls.set(self.pulls.get() + 1))
    }

    fn pulls(&self) -> usize {
        self.pulls.get()
    }
}

#[rstest]
fn constructing_a_pipeline_pulls_nothing() {
    let counter = PullCounter::default();
    let _pipeline = pipe!(
        counter.naturals(),
        filter_with(gt(10)),
        map_with(add(1)),
        scan_with(|total: u64, value: u64| total + value)
    );
    assert_eq!(counter.pulls(), 0);
}

#[rstest]
fn element_wise_stages_pull_one_per_output() {
    let counter = PullCounter::default();
    let result = pipe!(
        counter.naturals(),
        map_with(add(3)),
        scan_fold_with(0, |total: u64, value: u64| total.max(value)),
        zip_with(count::<usize>()),
        take_with(4),
        as_array
    );
    assert_eq!(result, vec![(0, 0), (3, 1), (4, 2), (5, 3)]);
    assert_eq!(counter.pulls(), 3);
}

#[rstest]
fn filtering_stages_pull_until_a_match() {
    let counter = PullCounter::default();
    let result = pipe!(
        counter.naturals(),
        filter_not_with(|value: &u64| value % 5 != 0),
        filter_indexed_with(|index: usize, _: &u64| index > 0),
        map_not_null_with(|value: u64| value.checked_sub(5)),
        take_with(2),
        as_array
    );
    assert_eq!(result, vec![0, 5]);
    assert_eq!(counter.pulls(), 11);
}

#[rstest]
fn slicing_stages_stop_at_their_bound() {
    let counter = PullCounter::default();
    let result = pipe!(counter.naturals(), drop_with(2), take_while_with(lt(5)), as_array);
    assert_eq!(result, vec![2, 3, 4]);
    assert_eq!(counter.pulls(), 6);
}

#[rstest]
fn chunks_and_windows_pull_only_what_they_emit() {
    let counter = PullCounter::default();
    let chunks = chunked_with(3).map(|chunks| pipe!(counter.naturals(), chunks, take_with(2), as_array));
    assert_eq!(chunks, Ok(vec![vec![0, 1, 2], vec![3, 4, 5]]));
    assert_eq!(counter.pulls(), 6);

    let counter = PullCounter::default();
    let windows = windowed_with(2, WindowOptions::default())
        .map(|windows| pipe!(counter.naturals(), windows, take_with(3), as_array));
    assert_eq!(windows, Ok(vec![vec![0, 1], vec![1, 2], vec![2, 3]]));
    assert_eq!(counter.pulls(), 4);
}

#[rstest]
fn zips_pull_both_sides_in_step() {
    let left = PullCounter::default();
    let right = PullCounter::default();
    let pairs = pipe!(left.naturals(), zip_with(repeat('x')), take_with(3), as_array);
    assert_eq!(pairs, vec![(0, 'x'), (1, 'x'), (2, 'x')]);
    assert_eq!(left.pulls(), 3);

    let sums = zip_map_with(right.naturals(), |left: u64, right: u64| left * right);
    assert_eq!(as_array(take_with(3)(sums(count::<u64>()))), vec![0, 1, 4]);
    assert_eq!(right.pulls(), 3);
}

#[rstest]
fn generator_and_cycle_are_on_demand() {
    let steps = Cell::new(0);
    let powers = generator_from(Some(1_u64), |value| {
        steps.set(steps.get() + 1);
        value.checked_mul(2)
    });
    assert_eq!(as_array(take_with(5)(powers)), vec![1, 2, 4, 8, 16]);
    assert_eq!(steps.get(), 4);

    let counter = PullCounter::default();
    let replayed = pipe!(counter.naturals(), take_with(2), cycle, take_with(7), as_array);
    assert_eq!(replayed, vec![0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(counter.pulls(), 2);
}
