//! Error types shared by the fallible collection operations.

use alloc::string::String;

use thiserror::Error;

/// The error type reported by fallible operations on this crate's
/// collections.
///
/// Every fallible operation returns its outcome directly to the caller as a
/// `Result`; the collections never retry, log, or recover internally. Each
/// variant carries the context a caller needs to diagnose the failure
/// without re-querying the collection.
///
/// # Examples
///
/// ```
/// use lanyard::Error;
/// use lanyard::List;
///
/// let mut list = List::from(vec![1, 2, 3]);
/// assert_eq!(
///     list.remove(9),
///     Err(Error::IndexOutOfRange { index: 9, len: 3 })
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index argument was outside `[0, len)`.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The collection's length at the time of the call.
        len: usize,
    },

    /// A value-based lookup or removal found no matching element.
    #[error("value not found in collection")]
    ValueNotFound,

    /// A key-based lookup on a map found no entry.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The offending key, rendered with its `Debug` implementation.
        key: String,
    },

    /// An operation requiring at least one element was invoked on an empty
    /// collection.
    #[error("collection is empty")]
    CollectionEmpty,
}
