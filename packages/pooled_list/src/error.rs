use thiserror::Error;

/// Errors that can occur when operating on a [`PooledList`][crate::PooledList].
///
/// Every failing operation reports its error synchronously to the caller and
/// leaves the list in its prior state - per-operation errors are recoverable
/// and the list remains fully usable afterward.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided an index outside the currently valid bound.
    ///
    /// For reads and removals the valid bound is `len`, exclusive. `set()` is
    /// the one operation that also permits `index == len`, in which case it
    /// appends instead of overwriting.
    #[error("index {index} is out of bounds of a list of length {len}")]
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,

        /// The number of elements the list held at the time of the call.
        len: usize,
    },

    /// A removal was requested from a list that holds no elements.
    #[error("cannot remove an element from an empty list")]
    Empty,
}

/// A specialized `Result` type for pooled list operations, returning the
/// crate's [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn index_out_of_range_names_both_bounds() {
        let error = Error::IndexOutOfRange { index: 7, len: 3 };

        assert_eq!(
            error.to_string(),
            "index 7 is out of bounds of a list of length 3"
        );
    }

    #[test]
    fn empty_is_error() {
        let result: Result<()> = Err(Error::Empty);
        assert!(result.is_err());
    }
}
