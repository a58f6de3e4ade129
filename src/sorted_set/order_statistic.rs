use core::borrow::Borrow;
use core::ops::Index;

use crate::bucket::SearchResult;
use crate::rank::Rank;

use super::SortedSet;

impl<T: Ord> SortedSet<T> {
    /// Returns the item at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_set::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30]);
    /// assert_eq!(set.get_by_rank(1), Some(&20));
    /// assert!(set.get_by_rank(3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(N/B)
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len {
            return None;
        }
        let mut remaining = rank;
        for bucket in &self.buckets {
            if remaining < bucket.len() {
                return bucket.get(remaining);
            }
            remaining -= bucket.len();
        }
        debug_assert!(
            false,
            "size invariant violated: rank {rank} unreachable in a set of {} items",
            self.len
        );
        None
    }

    /// Returns the zero-based rank of `value`, or `None` if the value is
    /// not present.
    ///
    /// The rank is the sum of the lengths of every bucket before the
    /// owning one plus the local position inside it, so it always agrees
    /// with what [`index_insert`](SortedSet::index_insert) reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_set::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20]);
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(N/B + log B)
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let at = self.locate(value);
        match self.buckets[at].find(value) {
            SearchResult::Found(local) => Some(self.prefix_len(at) + local),
            SearchResult::NotFound(_) => None,
        }
    }

    /// Copies up to `count` items starting at rank `start`.
    ///
    /// A `start` at or past the end yields an empty vector; a `count`
    /// reaching past the end is clamped. The walk skips whole buckets to
    /// reach `start`, then copies runs out of consecutive buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.slice(1, 3), vec![2, 3, 4]);
    /// assert_eq!(set.slice(3, 10), vec![4, 5]);
    /// assert!(set.slice(5, 1).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(N/B + count)
    #[must_use]
    pub fn slice(&self, start: usize, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        if start >= self.len {
            return Vec::new();
        }
        let take = count.min(self.len - start);
        let mut out = Vec::with_capacity(take);
        let mut skip = start;
        for bucket in &self.buckets {
            let items = bucket.items();
            if skip >= items.len() {
                skip -= items.len();
                continue;
            }
            let available = &items[skip..];
            skip = 0;
            let want = take - out.len();
            if want <= available.len() {
                out.extend_from_slice(&available[..want]);
                break;
            }
            out.extend_from_slice(available);
        }
        out
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use bucket_set::{Rank, SortedSet};
///
/// let set = SortedSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(2)], 30);
/// ```
impl<T: Ord> Index<Rank> for SortedSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &T {
        self.get_by_rank(rank.0).expect("rank out of bounds")
    }
}
