use core::fmt::{Display, Formatter};

/// MultiVecError
///
/// Every variant is a violated precondition. The public API panics with
/// the rendered error, the `try_*` functions hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiVecError {
    /// Range was built with begin after end
    InvalidRange {
        /// First position
        begin: usize,
        /// One past the last position
        end: usize,
    },
    /// Dimension does not exist in container or view
    DimensionOutOfBounds {
        /// Requested dimension
        dimension: usize,
        /// Number of dimensions available
        rank: usize,
    },
    /// Offset computation needs exactly one index per dimension
    IndexCountMismatch {
        /// Number of passed indices
        count: usize,
        /// Container rank
        rank: usize,
    },
    /// Index out of bounds
    IndexOutOfBounds {
        /// Dimension of the index
        dimension: usize,
        /// Passed index
        index: usize,
        /// Size of the dimension
        size: usize,
    },
    /// Offset out of bounds
    OffsetOutOfBounds {
        /// Passed offset
        offset: usize,
        /// Buffer size
        size: usize,
    },
    /// Indexing with no indices, with more indices than open ranges,
    /// or scalar access on a view that still has open ranges
    IndexCountInvalid {
        /// Number of passed indices
        count: usize,
        /// Number of open ranges left
        available: usize,
    },
    /// View state does not fit the container it points into
    RangeExceedsContainer(ViewConstraint),
}

/// Constraint checked when a view is constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewConstraint {
    /// Fixed indices and open ranges together must cover the rank
    Rank {
        /// Number of fixed indices
        fixed: usize,
        /// Number of open ranges
        open: usize,
        /// Container rank
        rank: usize,
    },
    /// Fixed index is past the end of its dimension
    FixedIndex {
        /// Dimension of the index
        dimension: usize,
        /// Fixed index
        index: usize,
        /// Size of the dimension
        size: usize,
    },
    /// Open range ends past the end of its dimension
    OpenRange {
        /// Dimension of the range
        dimension: usize,
        /// End of the range
        end: usize,
        /// Size of the dimension
        size: usize,
    },
}

impl Display for MultiVecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MultiVecError::InvalidRange { begin, end } => f.write_fmt(format_args!(
                "InvalidRange: begin {begin} is bigger than end {end}"
            )),
            MultiVecError::DimensionOutOfBounds { dimension, rank } => f.write_fmt(format_args!(
                "DimensionOutOfBounds: dimension is {dimension}, but there are only {rank} dimensions"
            )),
            MultiVecError::IndexCountMismatch { count, rank } => f.write_fmt(format_args!(
                "IndexCountMismatch: got {count} indices for rank {rank}"
            )),
            MultiVecError::IndexOutOfBounds { dimension, index, size } => f.write_fmt(format_args!(
                "IndexOutOfBounds: index {index} in dimension {dimension}, but the size is {size}"
            )),
            MultiVecError::OffsetOutOfBounds { offset, size } => f.write_fmt(format_args!(
                "OffsetOutOfBounds: offset is {offset}, but the buffer size is {size}"
            )),
            MultiVecError::IndexCountInvalid { count, available } => f.write_fmt(format_args!(
                "IndexCountInvalid: got {count} indices, but {available} open ranges are left"
            )),
            MultiVecError::RangeExceedsContainer(constraint) => {
                f.write_fmt(format_args!("RangeExceedsContainer: {constraint}"))
            }
        }
    }
}

impl Display for ViewConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewConstraint::Rank { fixed, open, rank } => f.write_fmt(format_args!(
                "{fixed} fixed indices and {open} open ranges do not add up to rank {rank}"
            )),
            ViewConstraint::FixedIndex { dimension, index, size } => f.write_fmt(format_args!(
                "fixed index {index} in dimension {dimension} is past size {size}"
            )),
            ViewConstraint::OpenRange { dimension, end, size } => f.write_fmt(format_args!(
                "open range ending at {end} in dimension {dimension} is past size {size}"
            )),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MultiVecError {}

impl From<ViewConstraint> for MultiVecError {
    fn from(value: ViewConstraint) -> Self {
        MultiVecError::RangeExceedsContainer(value)
    }
}

/// Aborts the current operation. Every precondition failure ends here.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: MultiVecError) -> ! {
    log::error!("{err}");
    panic!("{err}")
}

/// Unwraps result of a precondition check or fails with its error.
#[track_caller]
pub(crate) fn ensure<T>(res: Result<T, MultiVecError>) -> T {
    match res {
        Ok(x) => x,
        Err(err) => fail(err),
    }
}

#[test]
fn error_display() {
    use alloc::string::ToString;
    let err = MultiVecError::IndexOutOfBounds { dimension: 0, index: 3, size: 3 };
    assert_eq!(
        err.to_string(),
        "IndexOutOfBounds: index 3 in dimension 0, but the size is 3"
    );
    let err: MultiVecError = ViewConstraint::Rank { fixed: 1, open: 1, rank: 3 }.into();
    assert_eq!(
        err.to_string(),
        "RangeExceedsContainer: 1 fixed indices and 1 open ranges do not add up to rank 3"
    );
}
