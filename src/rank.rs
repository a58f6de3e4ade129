/// A zero-based position in the globally sorted order of a set.
///
/// Wrapping the position in a newtype keeps positional indexing distinct
/// from any value-typed indexing a caller might layer on top.
///
/// # Examples
///
/// ```
/// use bucket_set::{Rank, SortedSet};
///
/// let set = SortedSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

impl From<usize> for Rank {
    fn from(rank: usize) -> Self {
        Rank(rank)
    }
}
