use crate::error::{ensure, MultiVecError};

/// Half-open interval `[begin, end)` of positions in one dimension
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// First position
    pub begin: usize,
    /// One past the last position
    pub end: usize,
}

impl Range {
    /// Range spanning `begin..end`.
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::InvalidRange`] if `begin > end`.
    #[must_use]
    #[track_caller]
    pub fn new(begin: usize, end: usize) -> Self {
        ensure(Self::try_new(begin, end))
    }

    /// Same as [`Range::new`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::InvalidRange`] if `begin > end`.
    pub const fn try_new(begin: usize, end: usize) -> Result<Self, MultiVecError> {
        if begin > end {
            return Err(MultiVecError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Range holding the single position `p`
    #[must_use]
    pub const fn at(p: usize) -> Self {
        Self { begin: p, end: p + 1 }
    }

    /// Number of positions
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// True if range holds no positions
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// True if `p` lies inside the range
    #[must_use]
    pub const fn contains(&self, p: usize) -> bool {
        self.begin <= p && p < self.end
    }
}

impl From<core::ops::Range<usize>> for Range {
    #[track_caller]
    fn from(value: core::ops::Range<usize>) -> Self {
        Range::new(value.start, value.end)
    }
}

#[test]
fn range_at() {
    let r = Range::at(42);
    assert_eq!(r, Range { begin: 42, end: 43 });
    assert_eq!(r.len(), 1);
    assert!(r.contains(42));
    assert!(!r.contains(43));
}

#[test]
fn range_empty() {
    assert!(Range::default().is_empty());
    assert!(Range::new(42, 42).is_empty());
    assert_eq!(Range::from(23..42).len(), 19);
}

#[test]
fn range_try_new() {
    assert_eq!(
        Range::try_new(42, 23),
        Err(MultiVecError::InvalidRange { begin: 42, end: 23 })
    );
}
