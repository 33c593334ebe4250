//! Lazy sequence operators.
//!
//! A *sequence* is any [`IntoIterator`]. Operators come in two forms that
//! always produce the same output:
//!
//! - **direct**: `op(source, config...)`
//! - **pointfree**: `op_with(config...)` returns a reusable `Fn(source)`
//!
//! Adapters do no work until they are pulled, and pull at most one element
//! from upstream per element they produce, so unending sources such as
//! [`repeat`] can flow through any lazy stage. [`count`] stops when its
//! integer type overflows: `count::<u8>()` yields 256 values and can be
//! collected, while `count::<u64>()` is unending in practice.
//!
//! ```rust
//! use itertricks::sequence::{as_array, count};
//!
//! assert_eq!(as_array(count::<u8>()).len(), 256);
//! ```
//!
//! # Operator Groups
//!
//! | group            | operators                                                                 |
//! |------------------|---------------------------------------------------------------------------|
//! | constructors     | [`generator_from`], [`range`], [`count`], [`cycle`], [`repeat`]           |
//! | filters          | [`filter`], [`filter_not`], [`filter_indexed`], [`partition`]             |
//! | predicates       | [`some`], [`all`], [`none`], [`more_than`], [`less_than`], [`empty`]      |
//! | transformations  | [`map`], [`map_not_null`], [`map_indexed`], [`zip`], [`zip_map`], [`unzip`] |
//! | slicing          | [`take`], [`take_while`], [`drop`], [`drop_while`], [`chunked`], [`windowed`] |
//! | collectors       | [`as_array`], [`as_count`], [`as_counter`], [`group_by`], [`group_by_map`] |
//! | folds            | [`fold`], [`fold_monoid`], [`reduce`], [`scan`], [`scan_fold`] and `_right` variants |
//!
//! # Examples
//!
//! ```rust
//! use itertricks::pipe;
//! use itertricks::sequence::{as_array, chunked_with, filter_with, map_with, range};
//!
//! let pairs = chunked_with(2).map(|pairs| {
//!     range(10_u32).map(|numbers| {
//!         pipe!(numbers, filter_with(|n: &u32| n % 3 != 0), map_with(|n: u32| n * n), pairs, as_array)
//!     })
//! });
//!
//! assert_eq!(pairs, Ok(Ok(vec![vec![1, 4], vec![16, 25], vec![49, 64], vec![100]])));
//! ```

mod collectors;
mod constructors;
mod entries;
mod filters;
mod fold;
mod integer;
mod parts;
mod predicates;
mod transformations;

pub use collectors::{
    Counter, GroupHasher, Groups, as_array, as_count, as_count_with, as_counter, group_by,
    group_by_map, group_by_map_with, group_by_with,
};
pub use constructors::{
    Count, Cycle, GeneratorFrom, Range, count, count_by, count_from, cycle, generator_from, range,
    range_between, range_step, repeat,
};
pub use entries::{Pairs, WithEntries, pairs};
pub use filters::{
    FilterIndexed, FilterNot, Partitioned, filter, filter_indexed, filter_indexed_with,
    filter_not, filter_not_with, filter_with, partition, partition_with,
};
pub use fold::{
    Scan, ScanFold, ScanMonoid, fold, fold_monoid, fold_monoid_with, fold_right,
    fold_right_monoid, fold_right_monoid_with, fold_right_with, fold_with, reduce, reduce_right,
    reduce_right_with, reduce_semigroup, reduce_semigroup_with, reduce_with, scan, scan_fold,
    scan_fold_monoid, scan_fold_monoid_with, scan_fold_right, scan_fold_right_with,
    scan_fold_with, scan_right, scan_right_with, scan_with,
};
pub use integer::Integer;
pub use parts::{
    Chunked, WindowOptions, Windowed, chunked, chunked_with, drop, drop_while, drop_while_with,
    drop_with, take, take_while, take_while_with, take_with, windowed, windowed_with,
};
pub use predicates::{
    all, all_with, empty, less_than, less_than_with, more_than, more_than_with, none, none_with,
    some, some_with,
};
pub use transformations::{
    MapIndexed, MapIndexedNotNull, Zip, ZipMap, map, map_indexed, map_indexed_not_null,
    map_indexed_not_null_with, map_indexed_with, map_not_null, map_not_null_with, map_with, unzip,
    zip, zip_map, zip_map_with, zip_with,
};
