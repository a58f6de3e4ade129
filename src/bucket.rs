//! A bounded, strictly increasing run of items.
//!
//! Buckets only know about their own contents. The engine owns the split
//! policy: an insert may leave a bucket one item over `max_bucket_size`,
//! and the engine restores the bound by calling
//! [`split_off_upper_half`](Bucket::split_off_upper_half) before the
//! operation returns.

use core::borrow::Borrow;

/// Result of a binary search within one bucket.
pub(crate) enum SearchResult {
    /// The item is at the given local index.
    Found(usize),
    /// The item is absent; the index is where it would be inserted to keep
    /// the run strictly increasing.
    NotFound(usize),
}

/// Result of an intra-bucket insert.
///
/// Both arms carry the local index so the engine can report a global rank
/// for duplicates without a second search.
pub(crate) enum BucketInsert {
    Inserted(usize),
    Duplicate(usize),
}

#[derive(Clone)]
pub(crate) struct Bucket<T> {
    items: Vec<T>,
}

impl<T> Bucket<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Bucket {
            items: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_items(items: Vec<T>) -> Self {
        Bucket { items }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn get(&self, local: usize) -> Option<&T> {
        self.items.get(local)
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Moves the upper half out into a new bucket, splitting at `⌊len/2⌋`.
    ///
    /// The two halves stay contiguous in sorted order, so a split never
    /// disturbs the cross-bucket ordering invariant. Items are moved, not
    /// cloned.
    pub(crate) fn split_off_upper_half(&mut self) -> Bucket<T> {
        let upper = self.items.split_off(self.items.len() / 2);
        Bucket { items: upper }
    }
}

impl<T: Ord> Bucket<T> {
    /// Binary search over the strictly increasing run.
    pub(crate) fn find<Q>(&self, value: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.items.binary_search_by(|probe| probe.borrow().cmp(value)) {
            Ok(local) => SearchResult::Found(local),
            Err(local) => SearchResult::NotFound(local),
        }
    }

    /// Inserts in order; an equal item is reported as a duplicate and the
    /// bucket is left unchanged.
    pub(crate) fn insert(&mut self, value: T) -> BucketInsert {
        match self.find(&value) {
            SearchResult::Found(local) => BucketInsert::Duplicate(local),
            SearchResult::NotFound(local) => {
                self.items.insert(local, value);
                BucketInsert::Inserted(local)
            }
        }
    }

    /// Removes the item if present, returning its former local index.
    pub(crate) fn remove<Q>(&mut self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.find(value) {
            SearchResult::Found(local) => {
                self.items.remove(local);
                Some(local)
            }
            SearchResult::NotFound(_) => None,
        }
    }
}
