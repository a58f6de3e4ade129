use crate::error::Error;

/// Default per-bucket capacity.
///
/// With buckets of 500 items a set of 100k items has a 200-entry bucket
/// table; scanning it is cache-friendly and cheap next to the intra-bucket
/// binary search.
pub const DEFAULT_MAX_BUCKET_SIZE: usize = 500;

/// Default advisory pre-allocation, in items.
pub const DEFAULT_INITIAL_ITEM_CAPACITY: usize = 500;

/// How a [`SharedSortedSet`](crate::SharedSortedSet) acquires its lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LockPolicy {
    /// Wait until the lock is free. Operations never report contention.
    #[default]
    Blocking,
    /// Fail fast with [`Error::Contended`](crate::Error::Contended) when the
    /// lock is held, leaving backoff and deadlines to the caller.
    TryAcquire,
}

/// Construction-time configuration for a set.
///
/// # Examples
///
/// ```
/// use bucket_set::{Options, SortedSet};
///
/// let options = Options {
///     max_bucket_size: 64,
///     ..Options::default()
/// };
/// let set: SortedSet<i64> = SortedSet::with_options(options)?;
/// assert!(set.is_empty());
/// # Ok::<(), bucket_set::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Advisory hint for how many items the set should make room for up
    /// front. Only affects pre-allocation, never behavior. Must be at
    /// least 1.
    pub initial_item_capacity: usize,
    /// Hard upper bound on the number of items per bucket. A bucket that
    /// exceeds it after an insert is immediately split. Must be at least 1.
    pub max_bucket_size: usize,
    /// Lock acquisition policy for shared handles. Ignored by unshared
    /// [`SortedSet`](crate::SortedSet) instances.
    pub lock_policy: LockPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            initial_item_capacity: DEFAULT_INITIAL_ITEM_CAPACITY,
            max_bucket_size: DEFAULT_MAX_BUCKET_SIZE,
            lock_policy: LockPolicy::Blocking,
        }
    }
}

impl Options {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.initial_item_capacity == 0 {
            return Err(Error::InvalidInput {
                reason: "initial_item_capacity must be at least 1",
            });
        }
        if self.max_bucket_size == 0 {
            return Err(Error::InvalidInput {
                reason: "max_bucket_size must be at least 1",
            });
        }
        Ok(())
    }
}
