//! Integration tests for mapping, zipping and slicing operators.

#![cfg(feature = "sequence")]

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use itertricks::compose::{add, lt};
use itertricks::error::SequenceError;
use itertricks::pipe;
use itertricks::sequence::{
    WindowOptions, as_array, chunked, chunked_with, count, drop, drop_while, drop_while_with,
    drop_with, map, map_indexed, map_indexed_not_null, map_indexed_with, map_not_null,
    map_not_null_with, map_with, pairs, repeat, take, take_while, take_while_with, take_with,
    unzip, windowed, windowed_with, zip, zip_map, zip_with,
};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// map family
// =============================================================================

#[rstest]
fn map_and_map_not_null() {
    assert_eq!(as_array(map(vec![1, 2, 3], add(10))), vec![11, 12, 13]);

    let parsed = map_not_null(vec!["1", "x", "3"], |text| text.parse::<i32>().ok());
    assert_eq!(as_array(parsed), vec![1, 3]);
}

#[rstest]
fn map_with_is_reusable_across_sources() {
    let lengths = map_with(|word: &str| word.len());
    assert_eq!(as_array(lengths(vec!["a", "abc"])), vec![1, 3]);
    assert_eq!(as_array(lengths(vec!["ab"])), vec![2]);

    let evens = map_not_null_with(|value: u8| (value % 2 == 0).then_some(value));
    assert_eq!(as_array(evens(0..6)), vec![0, 2, 4]);
}

#[rstest]
fn map_indexed_over_lists_passes_positions() {
    let labelled = map_indexed(vec!["x", "y"], |index, name| format!("{index}:{name}"));
    assert_eq!(as_array(labelled), vec!["0:x", "1:y"]);
}

#[rstest]
fn map_indexed_over_maps_passes_keys() {
    let prices = BTreeMap::from([("tea", 3), ("cake", 5)]);
    let lines = map_indexed_with(|item: &str, price: i32| format!("{item}={price}"));
    assert_eq!(as_array(lines(prices)), vec!["cake=5", "tea=3"]);

    let stock = HashMap::from([("nails", 0), ("screws", 12)]);
    let available = map_indexed_not_null(stock, |name, amount| (amount > 0).then_some(name));
    assert_eq!(as_array(available), vec!["screws"]);
}

#[rstest]
fn map_indexed_accepts_explicit_pairs() {
    let entries = pairs(vec![('a', 1), ('b', 2)]);
    assert_eq!(as_array(map_indexed(entries, |key, value| (value, key))), vec![(1, 'a'), (2, 'b')]);
}

// =============================================================================
// zip family
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec!['a'], vec![(1, 'a')])]
#[case(vec![1], vec!['a', 'b'], vec![(1, 'a')])]
#[case(vec![], vec!['a'], vec![])]
fn zip_stops_at_shorter_side(
    #[case] left: Vec<i32>,
    #[case] right: Vec<char>,
    #[case] expected: Vec<(i32, char)>,
) {
    assert_eq!(as_array(zip(left.clone(), right.clone())), expected);
    assert_eq!(as_array(zip_with(right)(left)), expected);
}

#[rstest]
fn zip_does_not_pull_right_after_left_ends() {
    let pulls = Cell::new(0);
    let right = count::<u32>().inspect(|_| pulls.set(pulls.get() + 1));
    assert_eq!(as_array(zip(vec!['a', 'b'], right)), vec![('a', 0), ('b', 1)]);
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn zip_map_combines_infinite_sources() {
    let sums = zip_map(count::<u64>(), repeat(100_u64), |left, right| left + right);
    assert_eq!(as_array(take(sums, 3)), vec![100, 101, 102]);
}

#[rstest]
fn unzip_reverses_zip() {
    let (numbers, letters) = unzip(zip(1..=3, "abc".chars()));
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(letters, vec!['a', 'b', 'c']);
}

// =============================================================================
// take / drop
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(2, vec![5, 6])]
#[case(9, vec![5, 6, 7])]
fn take_caps_length(#[case] amount: usize, #[case] expected: Vec<i32>) {
    assert_eq!(as_array(take(vec![5, 6, 7], amount)), expected);
    assert_eq!(as_array(take_with(amount)(vec![5, 6, 7])), expected);
}

#[rstest]
#[case(0, vec![5, 6, 7])]
#[case(2, vec![7])]
#[case(9, vec![])]
fn drop_skips_prefix(#[case] amount: usize, #[case] expected: Vec<i32>) {
    assert_eq!(as_array(drop(vec![5, 6, 7], amount)), expected);
    assert_eq!(as_array(drop_with(amount)(vec![5, 6, 7])), expected);
}

#[rstest]
fn take_while_and_drop_while_split_at_first_failure() {
    let source = vec![1, 2, 5, 1, 2];
    assert_eq!(as_array(take_while(source.clone(), lt(3))), vec![1, 2]);
    assert_eq!(as_array(drop_while(source.clone(), lt(3))), vec![5, 1, 2]);
    assert_eq!(as_array(take_while_with(lt(3))(source.clone())), vec![1, 2]);
    assert_eq!(as_array(drop_while_with(lt(3))(source)), vec![5, 1, 2]);
}

#[rstest]
fn take_while_ends_infinite_source() {
    assert_eq!(as_array(take_while(count::<i32>(), lt(4))), vec![0, 1, 2, 3]);
}

#[rstest]
fn take_pulls_exactly_the_requested_amount() {
    let pulls = Cell::new(0);
    let source = count::<u8>().inspect(|_| pulls.set(pulls.get() + 1));
    assert_eq!(take(source, 4).count(), 4);
    assert_eq!(pulls.get(), 4);
}

// =============================================================================
// chunked / windowed
// =============================================================================

#[rstest]
#[case(1, vec![vec![1], vec![2], vec![3]])]
#[case(2, vec![vec![1, 2], vec![3]])]
#[case(5, vec![vec![1, 2, 3]])]
fn chunked_groups_with_short_tail(#[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
    assert_eq!(chunked(vec![1, 2, 3], size).map(as_array), Ok(expected.clone()));
    assert_eq!(chunked_with(size).map(|chunks| as_array(chunks(vec![1, 2, 3]))), Ok(expected));
}

#[rstest]
fn chunked_rejects_zero_size_before_any_source() {
    assert_eq!(
        chunked_with::<Vec<u8>>(0).err(),
        Some(SequenceError::InvalidSize { operator: "chunked", size: 0 })
    );
    assert!(chunked(count::<u8>(), 0).is_err());
}

#[rstest]
fn chunked_over_infinite_source() {
    let chunks = chunked(count::<u32>(), 3).map(|chunks| as_array(take(chunks, 2)));
    assert_eq!(chunks, Ok(vec![vec![0, 1, 2], vec![3, 4, 5]]));
}

#[rstest]
#[case(2, 1, false, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]])]
#[case(2, 2, false, vec![vec![1, 2], vec![3, 4]])]
#[case(2, 2, true, vec![vec![1, 2], vec![3, 4], vec![5]])]
#[case(2, 3, false, vec![vec![1, 2], vec![4, 5]])]
#[case(6, 1, false, vec![])]
#[case(6, 1, true, vec![vec![1, 2, 3, 4, 5]])]
fn windowed_honours_step_and_partial(
    #[case] size: usize,
    #[case] step: usize,
    #[case] partial_window: bool,
    #[case] expected: Vec<Vec<i32>>,
) {
    let options = WindowOptions::default()
        .with_step(step)
        .with_partial_window(partial_window);
    assert_eq!(windowed(1..=5, size, options).map(as_array), Ok(expected.clone()));
    assert_eq!(
        windowed_with(size, options).map(|windows| as_array(windows(1..=5))),
        Ok(expected)
    );
}

#[rstest]
fn windowed_rejects_zero_step() {
    let options = WindowOptions::default().with_step(0);
    assert_eq!(
        windowed(vec![1], 1, options).err(),
        Some(SequenceError::InvalidStep { operator: "windowed", step: 0 })
    );
}

#[rstest]
fn windowed_over_infinite_source_is_lazy() {
    let windows = windowed(count::<u16>(), 3, WindowOptions::default().with_step(2))
        .map(|windows| as_array(take(windows, 2)));
    assert_eq!(windows, Ok(vec![vec![0, 1, 2], vec![2, 3, 4]]));
}

#[rstest]
fn slicing_composes_in_a_pipe() {
    let result = pipe!(
        count::<i32>(),
        drop_with(3),
        take_with(6),
        map_with(add(1)),
        as_array
    );
    assert_eq!(result, vec![4, 5, 6, 7, 8, 9]);
}

// =============================================================================
// Property-based tests
// =============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_take_then_drop_restores_source(source in prop::collection::vec(any::<i16>(), 0..40), split in 0_usize..50) {
            let mut rebuilt = as_array(take(source.clone(), split));
            rebuilt.extend(drop(source.clone(), split));
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn prop_chunks_flatten_to_source(source in prop::collection::vec(any::<u8>(), 0..40), size in 1_usize..8) {
            let chunks = as_array(chunked(source.clone(), size).unwrap());
            prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
            prop_assert_eq!(chunks.concat(), source);
        }

        #[test]
        fn prop_full_windows_match_slice_windows(source in prop::collection::vec(any::<u8>(), 0..40), size in 1_usize..8) {
            let expected: Vec<Vec<u8>> = source.windows(size).map(<[u8]>::to_vec).collect();
            let actual = as_array(windowed(source, size, WindowOptions::default()).unwrap());
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_zip_length_is_minimum(left in prop::collection::vec(any::<u8>(), 0..20), right in prop::collection::vec(any::<u8>(), 0..20)) {
            prop_assert_eq!(zip(left.clone(), right.clone()).count(), left.len().min(right.len()));
        }
    }
}
