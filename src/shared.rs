//! A shared, lock-guarded handle over one set.

use core::borrow::Borrow;
use core::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::error::Error;
use crate::options::{LockPolicy, Options};
use crate::sorted_set::{InsertResult, RemoveResult, SortedSet};

/// A cloneable handle to a [`SortedSet`] behind a mutex.
///
/// Every operation acquires the lock, runs the engine call to completion,
/// and releases; any two operations on the same set occur in a total order
/// consistent with the order their acquisitions succeeded. The engine never
/// suspends or performs I/O while the lock is held, so hold times are
/// bounded by the operation cost itself.
///
/// The lock guards the whole engine. Splits and bucket drops cross bucket
/// boundaries, so there is no finer-grained locking to be had without
/// ordered multi-lock acquisition, and at the default bucket size the
/// critical sections are short.
///
/// Acquisition follows the handle's [`LockPolicy`]:
///
/// - [`Blocking`](LockPolicy::Blocking) (the default) waits for the lock;
///   no operation ever reports contention.
/// - [`TryAcquire`](LockPolicy::TryAcquire) fails fast with
///   [`Error::Contended`], for callers that bring their own backoff or run
///   inside an event loop that must not park.
///
/// There is no cancellation or timeout at this layer; under `TryAcquire` a
/// caller builds deadlines out of retries.
///
/// # Examples
///
/// ```
/// use bucket_set::SharedSortedSet;
///
/// let scores = SharedSortedSet::new();
/// let writer = scores.clone();
///
/// std::thread::spawn(move || {
///     writer.insert(1480).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// scores.insert(950)?;
/// assert_eq!(scores.to_vec()?, vec![950, 1480]);
/// # Ok::<(), bucket_set::Error>(())
/// ```
pub struct SharedSortedSet<T> {
    set: Arc<Mutex<SortedSet<T>>>,
    policy: LockPolicy,
}

impl<T> Clone for SharedSortedSet<T> {
    fn clone(&self) -> Self {
        SharedSortedSet {
            set: Arc::clone(&self.set),
            policy: self.policy,
        }
    }
}

impl<T> SharedSortedSet<T> {
    /// Wraps a new, empty set with default options (blocking lock).
    #[must_use]
    pub fn new() -> Self {
        SharedSortedSet {
            set: Arc::new(Mutex::new(SortedSet::new())),
            policy: LockPolicy::Blocking,
        }
    }

    /// Wraps a new, empty set configured by `options`, including the lock
    /// policy.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the options are invalid.
    pub fn with_options(options: Options) -> Result<Self, Error> {
        Ok(SharedSortedSet {
            policy: options.lock_policy,
            set: Arc::new(Mutex::new(SortedSet::with_options(options)?)),
        })
    }

    /// Wraps an existing set, sharing it under the given policy.
    #[must_use]
    pub fn from_set(set: SortedSet<T>, policy: LockPolicy) -> Self {
        SharedSortedSet {
            set: Arc::new(Mutex::new(set)),
            policy,
        }
    }

    /// The lock policy this handle acquires with.
    #[must_use]
    pub fn lock_policy(&self) -> LockPolicy {
        self.policy
    }

    fn acquire(&self) -> Result<MutexGuard<'_, SortedSet<T>>, Error> {
        match self.policy {
            LockPolicy::Blocking => Ok(self.set.lock()),
            LockPolicy::TryAcquire => self.set.try_lock().ok_or_else(|| {
                tracing::trace!(target: "bucket_set::shared", "lock contended");
                Error::Contended
            }),
        }
    }
}

impl<T: Ord> SharedSortedSet<T> {
    /// Adds an item, returning whether it was newly inserted.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`]; the set is
    /// unchanged.
    pub fn insert(&self, value: T) -> Result<bool, Error> {
        Ok(self.acquire()?.insert(value))
    }

    /// Adds an item, reporting the rank it landed at (or the rank of the
    /// equal item already there).
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn index_insert(&self, value: T) -> Result<InsertResult, Error> {
        Ok(self.acquire()?.index_insert(value))
    }

    /// Removes an item, returning whether it was present.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn remove<Q>(&self, value: &Q) -> Result<bool, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Ok(self.acquire()?.remove(value))
    }

    /// Removes an item and reports the rank it held.
    ///
    /// # Errors
    ///
    /// [`Error::NotPresent`] if the item was not in the set;
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn index_remove<Q>(&self, value: &Q) -> Result<usize, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.acquire()?.index_remove(value) {
            RemoveResult::Removed(rank) => Ok(rank),
            RemoveResult::Absent => Err(Error::NotPresent),
        }
    }

    /// Returns the number of items in the set.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.acquire()?.len())
    }

    /// Returns `true` if the set contains no items.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.acquire()?.is_empty())
    }

    /// Returns `true` if the set contains an item equal to `value`.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn contains<Q>(&self, value: &Q) -> Result<bool, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Ok(self.acquire()?.contains(value))
    }

    /// Returns a copy of the item at position `rank` in sorted order.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `rank >= len`;
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn get_by_rank(&self, rank: usize) -> Result<T, Error>
    where
        T: Clone,
    {
        let set = self.acquire()?;
        set.get_by_rank(rank)
            .cloned()
            .ok_or(Error::OutOfBounds { rank, len: set.len() })
    }

    /// Returns the zero-based rank of `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotPresent`] if the value is not in the set;
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn rank_of<Q>(&self, value: &Q) -> Result<usize, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.acquire()?.rank_of(value).ok_or(Error::NotPresent)
    }

    /// Copies up to `count` items starting at rank `start`, clamped to the
    /// end of the set.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn slice(&self, start: usize, count: usize) -> Result<Vec<T>, Error>
    where
        T: Clone,
    {
        Ok(self.acquire()?.slice(start, count))
    }

    /// Copies the full sorted contents into a `Vec`.
    ///
    /// # Errors
    ///
    /// [`Error::Contended`] under [`LockPolicy::TryAcquire`].
    pub fn to_vec(&self) -> Result<Vec<T>, Error>
    where
        T: Clone,
    {
        Ok(self.acquire()?.to_vec())
    }
}

impl<T> Default for SharedSortedSet<T> {
    fn default() -> Self {
        SharedSortedSet::new()
    }
}

impl<T> fmt::Debug for SharedSortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSortedSet")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_set() {
        let a = SharedSortedSet::new();
        let b = a.clone();
        a.insert(1).unwrap();
        b.insert(2).unwrap();
        assert_eq!(a.to_vec().unwrap(), vec![1, 2]);
        assert_eq!(b.len().unwrap(), 2);
    }

    #[test]
    fn error_surface_matches_engine_outcomes() {
        let set = SharedSortedSet::new();
        set.insert(10).unwrap();

        assert_eq!(set.index_remove(&99), Err(Error::NotPresent));
        assert_eq!(set.rank_of(&99), Err(Error::NotPresent));
        assert_eq!(
            set.get_by_rank(1),
            Err(Error::OutOfBounds { rank: 1, len: 1 })
        );
        assert_eq!(set.get_by_rank(0), Ok(10));
    }

    #[test]
    fn try_acquire_succeeds_when_uncontended() {
        let options = Options {
            lock_policy: LockPolicy::TryAcquire,
            ..Options::default()
        };
        let set = SharedSortedSet::with_options(options).unwrap();
        assert_eq!(set.lock_policy(), LockPolicy::TryAcquire);
        assert_eq!(set.insert(3), Ok(true));
        assert_eq!(set.len(), Ok(1));
    }
}
