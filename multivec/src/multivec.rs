//! MultiVec owns dimensions and the row-major buffer.

use crate::error::{ensure, MultiVecError};
use crate::range::Range;
use crate::view::{View, ViewMut};
use alloc::vec;
use alloc::vec::Vec;

/// Multi-dimensional vector stored as one flat row-major buffer.
///
/// Dimensions are fixed at construction and the buffer always holds
/// exactly `dimensions.iter().product()` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiVec<T> {
    dimensions: Vec<usize>,
    buffer: Vec<T>,
}

impl<T: Default + Clone> MultiVec<T> {
    /// Create new multivec with given dimensions, filled with `T::default()`
    #[must_use]
    pub fn new(dimensions: impl Into<Vec<usize>>) -> Self {
        Self::filled(T::default(), dimensions)
    }
}

impl<T: Clone> MultiVec<T> {
    /// Create new multivec with given dimensions, filled with `default_value`
    #[must_use]
    pub fn filled(default_value: T, dimensions: impl Into<Vec<usize>>) -> Self {
        let dimensions = dimensions.into();
        let size = dimensions.iter().product();
        log::debug!("Allocating multivec {dimensions:?} with {size} values");
        Self {
            dimensions,
            buffer: vec![default_value; size],
        }
    }
}

impl<T: Default + Clone> Default for MultiVec<T> {
    /// Rank 0 multivec with a single default value
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> MultiVec<T> {
    /// Number of dimensions
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// All dimension sizes
    #[must_use]
    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// Size of dimension `dimension`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::DimensionOutOfBounds`] if `dimension >= rank`.
    #[must_use]
    #[track_caller]
    pub fn dimension_size(&self, dimension: usize) -> usize {
        ensure(self.try_dimension_size(dimension))
    }

    /// Same as [`MultiVec::dimension_size`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::DimensionOutOfBounds`] if `dimension >= rank`.
    pub fn try_dimension_size(&self, dimension: usize) -> Result<usize, MultiVecError> {
        self.check_dimension(dimension)?;
        Ok(self.dimensions[dimension])
    }

    /// Number of values, product of all dimensions (1 for rank 0)
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.dimensions.iter().product()
    }

    /// Row-major offset of the value at `indices`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountMismatch`] if there is not exactly
    /// one index per dimension and with [`MultiVecError::IndexOutOfBounds`]
    /// if some index is not smaller than its dimension.
    #[must_use]
    #[track_caller]
    pub fn offset_of(&self, indices: &[usize]) -> usize {
        ensure(self.try_offset_of(indices))
    }

    /// Same as [`MultiVec::offset_of`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::IndexCountMismatch`] or [`MultiVecError::IndexOutOfBounds`].
    pub fn try_offset_of(&self, indices: &[usize]) -> Result<usize, MultiVecError> {
        self.check_as_many_indices_as_dimensions(indices)?;
        let mut offset = 0;
        let mut stride = 1;
        for dimension in (0..indices.len()).rev() {
            self.check_index(indices, dimension)?;
            offset += stride * indices[dimension];
            stride *= self.dimensions[dimension];
        }
        Ok(offset)
    }

    /// Value at flat `offset`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::OffsetOutOfBounds`] if `offset >= buffer_size`.
    #[must_use]
    #[track_caller]
    pub fn value_at(&self, offset: usize) -> &T {
        ensure(self.try_value_at(offset))
    }

    /// Same as [`MultiVec::value_at`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::OffsetOutOfBounds`] if `offset >= buffer_size`.
    pub fn try_value_at(&self, offset: usize) -> Result<&T, MultiVecError> {
        self.check_offset(offset)?;
        Ok(&self.buffer[offset])
    }

    /// Mutable value at flat `offset`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::OffsetOutOfBounds`] if `offset >= buffer_size`.
    #[must_use]
    #[track_caller]
    pub fn value_at_mut(&mut self, offset: usize) -> &mut T {
        ensure(self.check_offset(offset));
        &mut self.buffer[offset]
    }

    /// Flat buffer in row-major order
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Mutable flat buffer in row-major order
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// View with `indices` fixed and full ranges over the remaining dimensions.
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountInvalid`] if `indices` is empty
    /// or longer than rank, and with [`MultiVecError::RangeExceedsContainer`]
    /// if some index is past its dimension.
    #[must_use]
    #[track_caller]
    pub fn index(&self, indices: &[usize]) -> View<'_, T> {
        ensure(self.try_index(indices))
    }

    /// Same as [`MultiVec::index`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::IndexCountInvalid`] or [`MultiVecError::RangeExceedsContainer`].
    pub fn try_index(&self, indices: &[usize]) -> Result<View<'_, T>, MultiVecError> {
        self.check_num_indices(indices)?;
        let ranges = self.full_ranges(indices.len());
        View::try_new(self, indices.to_vec(), ranges)
    }

    /// Mutable view with `indices` fixed, see [`MultiVec::index`].
    ///
    /// # Panics
    ///
    /// Same as [`MultiVec::index`].
    #[must_use]
    #[track_caller]
    pub fn index_mut(&mut self, indices: &[usize]) -> ViewMut<'_, T> {
        ensure(self.check_num_indices(indices));
        let ranges = self.full_ranges(indices.len());
        ViewMut::new(self, indices.to_vec(), ranges)
    }

    /// Shorthand for `index(&[index])`
    #[must_use]
    #[track_caller]
    pub fn at(&self, index: usize) -> View<'_, T> {
        self.index(&[index])
    }

    /// Shorthand for `index_mut(&[index])`
    #[must_use]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> ViewMut<'_, T> {
        self.index_mut(&[index])
    }

    /// View over the whole multivec, no fixed indices
    #[must_use]
    pub fn view(&self) -> View<'_, T> {
        View::from_ranges(self, self.full_ranges(0))
    }

    /// Mutable view over the whole multivec, no fixed indices
    #[must_use]
    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        let ranges = self.full_ranges(0);
        ViewMut::from_ranges(self, ranges)
    }

    fn full_ranges(&self, skip: usize) -> Vec<Range> {
        self.dimensions[skip..].iter().map(|&d| Range::new(0, d)).collect()
    }

    fn check_dimension(&self, dimension: usize) -> Result<(), MultiVecError> {
        if dimension >= self.rank() {
            return Err(MultiVecError::DimensionOutOfBounds { dimension, rank: self.rank() });
        }
        Ok(())
    }

    fn check_num_indices(&self, indices: &[usize]) -> Result<(), MultiVecError> {
        if indices.is_empty() || indices.len() > self.rank() {
            return Err(MultiVecError::IndexCountInvalid {
                count: indices.len(),
                available: self.rank(),
            });
        }
        Ok(())
    }

    fn check_as_many_indices_as_dimensions(&self, indices: &[usize]) -> Result<(), MultiVecError> {
        if indices.len() != self.rank() {
            return Err(MultiVecError::IndexCountMismatch {
                count: indices.len(),
                rank: self.rank(),
            });
        }
        Ok(())
    }

    fn check_index(&self, indices: &[usize], dimension: usize) -> Result<(), MultiVecError> {
        let size = self.dimensions[dimension];
        if indices[dimension] >= size {
            return Err(MultiVecError::IndexOutOfBounds {
                dimension,
                index: indices[dimension],
                size,
            });
        }
        Ok(())
    }

    fn check_offset(&self, offset: usize) -> Result<(), MultiVecError> {
        if offset >= self.buffer.len() {
            return Err(MultiVecError::OffsetOutOfBounds { offset, size: self.buffer.len() });
        }
        Ok(())
    }
}

#[test]
fn multivec_dimensions() {
    let cube = MultiVec::<i32>::new([1, 2, 3]);
    assert_eq!(cube.rank(), 3);
    assert_eq!(cube.dimensions(), [1, 2, 3]);
    assert_eq!(cube.buffer_size(), 6);
    assert_eq!(cube.as_slice().len(), 6);
}

#[test]
fn multivec_default_is_scalar() {
    let null = MultiVec::<i32>::default();
    assert_eq!(null.rank(), 0);
    assert_eq!(null.buffer_size(), 1);
    assert_eq!(null.offset_of(&[]), 0);
    assert_eq!(*null.view().resolve(), 0);
}

#[test]
fn multivec_offsets() {
    let cube = MultiVec::<u8>::new([2, 3, 4]);
    assert_eq!(cube.offset_of(&[0, 0, 1]), 1);
    assert_eq!(cube.offset_of(&[0, 1, 0]), 4);
    assert_eq!(cube.offset_of(&[1, 0, 0]), 12);
    assert_eq!(cube.offset_of(&[1, 2, 3]), 23);
}

#[test]
fn multivec_checks() {
    let cube = MultiVec::<u8>::new([3, 3, 3]);
    assert_eq!(
        cube.try_dimension_size(3),
        Err(MultiVecError::DimensionOutOfBounds { dimension: 3, rank: 3 })
    );
    assert_eq!(
        cube.try_offset_of(&[0, 0, 0, 0]),
        Err(MultiVecError::IndexCountMismatch { count: 4, rank: 3 })
    );
    // last dimension is checked first
    assert_eq!(
        cube.try_offset_of(&[3, 0, 5]),
        Err(MultiVecError::IndexOutOfBounds { dimension: 2, index: 5, size: 3 })
    );
    assert_eq!(
        cube.try_value_at(27),
        Err(MultiVecError::OffsetOutOfBounds { offset: 27, size: 27 })
    );
}
