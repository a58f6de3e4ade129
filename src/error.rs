/// Errors reported by set construction, the item boundary, and the shared
/// handle.
///
/// Plain membership outcomes (a duplicate insert, a remove of an absent
/// item) are not errors; they are reported through [`InsertResult`] and
/// [`RemoveResult`]. This enum covers the cases where an operation could
/// not be carried out at all.
///
/// [`InsertResult`]: crate::InsertResult
/// [`RemoveResult`]: crate::RemoveResult
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value (or one of its elements) is of a kind the set does not
    /// admit. See [`Item`](crate::Item) for the admitted kinds.
    #[error("unsupported item kind: {kind}")]
    UnsupportedType {
        /// The kind of the offending value, e.g. `"float"` or `"fun"`.
        kind: &'static str,
    },

    /// A positional read past the end of the set.
    #[error("rank {rank} out of bounds for a set of {len} items")]
    OutOfBounds {
        /// The requested zero-based rank.
        rank: usize,
        /// The number of items in the set at the time of the call.
        len: usize,
    },

    /// The item is not in the set.
    #[error("item not present in the set")]
    NotPresent,

    /// A constructor precondition was violated.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Which precondition failed.
        reason: &'static str,
    },

    /// The lock was held by another caller. Only reported under
    /// [`LockPolicy::TryAcquire`](crate::LockPolicy::TryAcquire); the caller
    /// decides whether and when to retry.
    #[error("set lock contended")]
    Contended,
}
