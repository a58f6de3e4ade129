//! Bucketed sorted set with positional access.
//!
//! This crate provides [`SortedSet`], an ordered, deduplicated collection
//! that keeps its items in a vector of bounded buckets, and
//! [`SharedSortedSet`], a lock-guarded handle that makes one set safely
//! shareable across threads. On top of the usual set operations it answers
//! positional questions:
//!
//! - [`get_by_rank`](SortedSet::get_by_rank) - the item at a given sorted
//!   position
//! - [`rank_of`](SortedSet::rank_of) - the sorted position of an item
//! - [`slice`](SortedSet::slice) - a run of items by position
//! - [`index_insert`](SortedSet::index_insert) /
//!   [`index_remove`](SortedSet::index_remove) - mutations that report the
//!   rank they touched
//!
//! # Example
//!
//! ```
//! use bucket_set::{InsertResult, SortedSet};
//!
//! let mut ladder = SortedSet::new();
//! ladder.insert(950);
//! ladder.insert(1480);
//! ladder.insert(1200);
//!
//! // Ranks are zero-based positions in sorted order.
//! assert_eq!(ladder.index_insert(1300), InsertResult::Added(2));
//! assert_eq!(ladder.rank_of(&1480), Some(3));
//! assert_eq!(ladder.slice(0, 3), vec![950, 1200, 1300]);
//! ```
//!
//! # Layout
//!
//! Items live in buckets of at most `max_bucket_size` (default 500), kept
//! globally sorted: the last item of each bucket is smaller than the first
//! item of the next. Lookups scan bucket tails linearly and binary-search
//! inside the owning bucket; positional reads walk the same vector
//! accumulating bucket lengths. A bucket that overflows is split in half;
//! a bucket emptied by a removal is dropped (never merged). The bucket
//! table for realistic sizes is a few hundred entries, which a linear scan
//! traverses faster than a pointer-chasing tree.
//!
//! # Dynamically typed items
//!
//! Hosts that deal in dynamic values use [`Item`], an admitted, totally
//! ordered value kind, with [`Value`] as the candidate domain; conversion
//! rejects unorderable kinds (floats, references, pids, ports, funs)
//! before they can reach a set.

#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod bucket;
mod error;
mod options;
mod rank;
mod shared;
mod term;

pub mod sorted_set;

pub use error::Error;
pub use options::{
    LockPolicy, Options, DEFAULT_INITIAL_ITEM_CAPACITY, DEFAULT_MAX_BUCKET_SIZE,
};
pub use rank::Rank;
pub use shared::SharedSortedSet;
pub use sorted_set::{InsertResult, RemoveResult, SortedSet};
pub use term::{Item, Value};
