//! Views are cursors into a [`MultiVec`]: a prefix of fixed indices
//! followed by one open range per remaining dimension.

use crate::error::{ensure, MultiVecError, ViewConstraint};
use crate::multivec::MultiVec;
use crate::odometer::Odometer;
use crate::range::Range;
use alloc::vec::Vec;

// Index state shared by View and ViewMut
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Cursor {
    indices: Vec<usize>,
    ranges: Vec<Range>,
}

impl Cursor {
    fn check_constraints<T>(&self, container: &MultiVec<T>) -> Result<(), MultiVecError> {
        self.check_num_dimensions(container)?;
        self.check_indices(container)?;
        self.check_ranges(container)?;
        log::trace!(
            "View with {} fixed indices and {} open ranges",
            self.indices.len(),
            self.ranges.len()
        );
        Ok(())
    }

    fn check_num_dimensions<T>(&self, container: &MultiVec<T>) -> Result<(), MultiVecError> {
        if self.indices.len() + self.ranges.len() != container.rank() {
            return Err(ViewConstraint::Rank {
                fixed: self.indices.len(),
                open: self.ranges.len(),
                rank: container.rank(),
            }
            .into());
        }
        Ok(())
    }

    // One past the end passes here, offset_of catches it on resolve
    fn check_indices<T>(&self, container: &MultiVec<T>) -> Result<(), MultiVecError> {
        for (dimension, (&index, &size)) in self.indices.iter().zip(container.dimensions()).enumerate() {
            if index > size {
                return Err(ViewConstraint::FixedIndex { dimension, index, size }.into());
            }
        }
        Ok(())
    }

    fn check_ranges<T>(&self, container: &MultiVec<T>) -> Result<(), MultiVecError> {
        let sizes = &container.dimensions()[self.indices.len()..];
        for (i, (range, &size)) in self.ranges.iter().zip(sizes).enumerate() {
            if range.end > size {
                return Err(ViewConstraint::OpenRange {
                    dimension: self.indices.len() + i,
                    end: range.end,
                    size,
                }
                .into());
            }
        }
        Ok(())
    }

    fn check_dimension(&self, dimension: usize) -> Result<(), MultiVecError> {
        if dimension >= self.ranges.len() {
            return Err(MultiVecError::DimensionOutOfBounds { dimension, rank: self.ranges.len() });
        }
        Ok(())
    }

    fn check_num_indices(&self, count: usize) -> Result<(), MultiVecError> {
        if count == 0 || count > self.ranges.len() {
            return Err(MultiVecError::IndexCountInvalid { count, available: self.ranges.len() });
        }
        Ok(())
    }

    fn check_remaining_ranges(&self) -> Result<(), MultiVecError> {
        self.check_num_indices(1)
    }

    fn check_scalar(&self) -> Result<(), MultiVecError> {
        if !self.ranges.is_empty() {
            return Err(MultiVecError::IndexCountInvalid { count: 0, available: self.ranges.len() });
        }
        Ok(())
    }

    // Consumed ranges are dropped without checking that indices fall inside them
    fn narrowed(&self, indices: &[usize]) -> Cursor {
        let mut fixed = Vec::with_capacity(self.indices.len() + indices.len());
        fixed.extend_from_slice(&self.indices);
        fixed.extend_from_slice(indices);
        Cursor {
            indices: fixed,
            ranges: self.ranges[indices.len()..].to_vec(),
        }
    }

    fn narrow_in_place(&mut self, indices: &[usize]) {
        self.indices.extend_from_slice(indices);
        self.ranges.drain(..indices.len());
    }

    fn offset<T>(&self, container: &MultiVec<T>) -> Result<usize, MultiVecError> {
        self.check_scalar()?;
        container.try_offset_of(&self.indices)
    }
}

/// Compares views cell by cell, after their index state matched
fn cells_eq<T: PartialEq>(
    (lhs, lhs_cursor): (&MultiVec<T>, &Cursor),
    (rhs, rhs_cursor): (&MultiVec<T>, &Cursor),
) -> bool {
    if lhs_cursor != rhs_cursor {
        return false;
    }
    let value_eq = |indices: &[usize]| lhs.value_at(lhs.offset_of(indices)) == rhs.value_at(rhs.offset_of(indices));
    if lhs_cursor.ranges.is_empty() {
        return value_eq(lhs_cursor.indices.as_slice());
    }
    let fixed = lhs_cursor.indices.len();
    let mut indices = lhs_cursor.indices.clone();
    Odometer::new(&lhs_cursor.ranges).all(|position| {
        indices.truncate(fixed);
        indices.extend(position);
        value_eq(indices.as_slice())
    })
}

/// Read only view into [`MultiVec`].
///
/// Any number of views can point into the same multivec. A view with no
/// open ranges left denotes one value, see [`View::resolve`].
#[derive(Debug)]
pub struct View<'a, T> {
    container: &'a MultiVec<T>,
    cursor: Cursor,
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> View<'a, T> {
    /// Create view from fixed `indices` followed by open `ranges`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::RangeExceedsContainer`] if indices and
    /// ranges do not add up to the rank, if a fixed index is bigger than
    /// its dimension or if a range ends past its dimension.
    #[must_use]
    #[track_caller]
    pub fn new(container: &'a MultiVec<T>, indices: Vec<usize>, ranges: Vec<Range>) -> Self {
        ensure(Self::try_new(container, indices, ranges))
    }

    /// Same as [`View::new`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::RangeExceedsContainer`]
    pub fn try_new(
        container: &'a MultiVec<T>,
        indices: Vec<usize>,
        ranges: Vec<Range>,
    ) -> Result<Self, MultiVecError> {
        Self::try_from_cursor(container, Cursor { indices, ranges })
    }

    /// Create view with no fixed indices
    ///
    /// # Panics
    ///
    /// Same as [`View::new`].
    #[must_use]
    #[track_caller]
    pub fn from_ranges(container: &'a MultiVec<T>, ranges: Vec<Range>) -> Self {
        Self::new(container, Vec::new(), ranges)
    }

    fn try_from_cursor(container: &'a MultiVec<T>, cursor: Cursor) -> Result<Self, MultiVecError> {
        cursor.check_constraints(container)?;
        Ok(Self { container, cursor })
    }

    /// Multivec this view points into
    #[must_use]
    pub fn container(&self) -> &'a MultiVec<T> {
        self.container
    }

    /// Indices of already collapsed dimensions
    #[must_use]
    pub fn fixed_indices(&self) -> &[usize] {
        &self.cursor.indices
    }

    /// Ranges of dimensions that are still open
    #[must_use]
    pub fn open_ranges(&self) -> &[Range] {
        &self.cursor.ranges
    }

    /// Remaining rank, number of open ranges
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.cursor.ranges.len()
    }

    /// Range of open dimension `dimension`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::DimensionOutOfBounds`] if `dimension >= num_dimensions`.
    #[must_use]
    #[track_caller]
    pub fn dimension_range(&self, dimension: usize) -> Range {
        ensure(self.cursor.check_dimension(dimension));
        self.cursor.ranges[dimension]
    }

    /// New view with `indices` appended to the fixed indices, consuming
    /// as many leading open ranges. This view stays usable.
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountInvalid`] if `indices` is empty or
    /// longer than the number of open ranges, and with
    /// [`MultiVecError::RangeExceedsContainer`] if an index is past its dimension.
    #[must_use]
    #[track_caller]
    pub fn narrow(&self, indices: &[usize]) -> View<'a, T> {
        ensure(self.try_narrow(indices))
    }

    /// Same as [`View::narrow`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::IndexCountInvalid`] or [`MultiVecError::RangeExceedsContainer`].
    pub fn try_narrow(&self, indices: &[usize]) -> Result<View<'a, T>, MultiVecError> {
        self.cursor.check_num_indices(indices.len())?;
        Self::try_from_cursor(self.container, self.cursor.narrowed(indices))
    }

    /// Same as [`View::narrow`], but reuses this view.
    ///
    /// # Panics
    ///
    /// Same as [`View::narrow`].
    #[must_use]
    #[track_caller]
    pub fn narrow_in_place(mut self, indices: &[usize]) -> Self {
        ensure(self.cursor.check_num_indices(indices.len()));
        self.cursor.narrow_in_place(indices);
        ensure(self.cursor.check_constraints(self.container));
        self
    }

    /// Shorthand for `narrow(&[index])`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountInvalid`] if no open range is left.
    #[must_use]
    #[track_caller]
    pub fn at(&self, index: usize) -> View<'a, T> {
        ensure(self.cursor.check_remaining_ranges());
        self.narrow(&[index])
    }

    /// Shorthand for `narrow_in_place(&[index])`
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountInvalid`] if no open range is left.
    #[must_use]
    #[track_caller]
    pub fn at_in_place(self, index: usize) -> Self {
        ensure(self.cursor.check_remaining_ranges());
        self.narrow_in_place(&[index])
    }

    /// Value this view points to
    ///
    /// # Panics
    ///
    /// Panics with [`MultiVecError::IndexCountInvalid`] if some ranges are
    /// still open and with [`MultiVecError::IndexOutOfBounds`] if a fixed
    /// index is one past its dimension.
    #[must_use]
    #[track_caller]
    pub fn resolve(&self) -> &'a T {
        ensure(self.try_resolve())
    }

    /// Same as [`View::resolve`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::IndexCountInvalid`] or [`MultiVecError::IndexOutOfBounds`].
    pub fn try_resolve(&self) -> Result<&'a T, MultiVecError> {
        let offset = self.cursor.offset(self.container)?;
        self.container.try_value_at(offset)
    }

    /// Copy of the value this view points to, see [`View::resolve`]
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.resolve().clone()
    }

    /// Iterate over positions of all values in open ranges
    pub fn positions(&self) -> Odometer<'_> {
        Odometer::new(&self.cursor.ranges)
    }

    fn parts(&self) -> (&MultiVec<T>, &Cursor) {
        (self.container, &self.cursor)
    }
}

/// Mutable view into [`MultiVec`].
///
/// Borrows the multivec exclusively. It is the only way to write values
/// through index paths, see [`ViewMut::set`] and the compound assignment
/// operators.
#[derive(Debug)]
pub struct ViewMut<'a, T> {
    container: &'a mut MultiVec<T>,
    cursor: Cursor,
}

impl<'a, T> ViewMut<'a, T> {
    /// Create mutable view from fixed `indices` followed by open `ranges`
    ///
    /// # Panics
    ///
    /// Same as [`View::new`].
    #[must_use]
    #[track_caller]
    pub fn new(container: &'a mut MultiVec<T>, indices: Vec<usize>, ranges: Vec<Range>) -> Self {
        ensure(Self::try_new(container, indices, ranges))
    }

    /// Same as [`ViewMut::new`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::RangeExceedsContainer`]
    pub fn try_new(
        container: &'a mut MultiVec<T>,
        indices: Vec<usize>,
        ranges: Vec<Range>,
    ) -> Result<Self, MultiVecError> {
        Self::try_from_cursor(container, Cursor { indices, ranges })
    }

    /// Create mutable view with no fixed indices
    ///
    /// # Panics
    ///
    /// Same as [`View::new`].
    #[must_use]
    #[track_caller]
    pub fn from_ranges(container: &'a mut MultiVec<T>, ranges: Vec<Range>) -> Self {
        Self::new(container, Vec::new(), ranges)
    }

    fn try_from_cursor(container: &'a mut MultiVec<T>, cursor: Cursor) -> Result<Self, MultiVecError> {
        cursor.check_constraints(&*container)?;
        Ok(Self { container, cursor })
    }

    /// Multivec this view points into
    #[must_use]
    pub fn container(&self) -> &MultiVec<T> {
        &*self.container
    }

    /// Read only view with the same indices and ranges
    #[must_use]
    pub fn as_view(&self) -> View<'_, T> {
        View {
            container: &*self.container,
            cursor: self.cursor.clone(),
        }
    }

    /// Indices of already collapsed dimensions
    #[must_use]
    pub fn fixed_indices(&self) -> &[usize] {
        &self.cursor.indices
    }

    /// Ranges of dimensions that are still open
    #[must_use]
    pub fn open_ranges(&self) -> &[Range] {
        &self.cursor.ranges
    }

    /// Remaining rank, number of open ranges
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.cursor.ranges.len()
    }

    /// Range of open dimension `dimension`, see [`View::dimension_range`]
    #[must_use]
    #[track_caller]
    pub fn dimension_range(&self, dimension: usize) -> Range {
        ensure(self.cursor.check_dimension(dimension));
        self.cursor.ranges[dimension]
    }

    /// Mutable version of [`View::narrow`], this view stays usable
    /// once the returned one is dropped.
    #[must_use]
    #[track_caller]
    pub fn narrow(&mut self, indices: &[usize]) -> ViewMut<'_, T> {
        ensure(self.cursor.check_num_indices(indices.len()));
        let cursor = self.cursor.narrowed(indices);
        ensure(ViewMut::try_from_cursor(&mut *self.container, cursor))
    }

    /// Mutable version of [`View::narrow_in_place`]
    #[must_use]
    #[track_caller]
    pub fn narrow_in_place(mut self, indices: &[usize]) -> Self {
        ensure(self.cursor.check_num_indices(indices.len()));
        self.cursor.narrow_in_place(indices);
        ensure(self.cursor.check_constraints(&*self.container));
        self
    }

    /// Shorthand for `narrow(&[index])`
    #[must_use]
    #[track_caller]
    pub fn at(&mut self, index: usize) -> ViewMut<'_, T> {
        ensure(self.cursor.check_remaining_ranges());
        self.narrow(&[index])
    }

    /// Shorthand for `narrow_in_place(&[index])`
    #[must_use]
    #[track_caller]
    pub fn at_in_place(self, index: usize) -> Self {
        ensure(self.cursor.check_remaining_ranges());
        self.narrow_in_place(&[index])
    }

    /// Value this view points to, see [`View::resolve`]
    #[must_use]
    #[track_caller]
    pub fn resolve(&self) -> &T {
        ensure(self.try_resolve())
    }

    /// Same as [`ViewMut::resolve`], but returns the error.
    ///
    /// # Errors
    ///
    /// [`MultiVecError::IndexCountInvalid`] or [`MultiVecError::IndexOutOfBounds`].
    pub fn try_resolve(&self) -> Result<&T, MultiVecError> {
        let offset = self.cursor.offset(&*self.container)?;
        self.container.try_value_at(offset)
    }

    /// Mutable value this view points to
    ///
    /// # Panics
    ///
    /// Same as [`View::resolve`].
    #[must_use]
    #[track_caller]
    pub fn resolve_mut(&mut self) -> &mut T {
        let offset = ensure(self.cursor.offset(&*self.container));
        self.container.value_at_mut(offset)
    }

    /// Consume this view, returning the value it points to
    ///
    /// # Panics
    ///
    /// Same as [`View::resolve`].
    #[must_use]
    #[track_caller]
    pub fn into_resolved(self) -> &'a mut T {
        let ViewMut { container, cursor } = self;
        let offset = ensure(cursor.offset(&*container));
        container.value_at_mut(offset)
    }

    /// Copy of the value this view points to
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.resolve().clone()
    }

    /// Overwrite the value this view points to
    ///
    /// # Panics
    ///
    /// Same as [`View::resolve`].
    #[track_caller]
    pub fn set(&mut self, value: T) -> &mut Self {
        *self.resolve_mut() = value;
        self
    }

    /// Iterate over positions of all values in open ranges
    pub fn positions(&self) -> Odometer<'_> {
        Odometer::new(&self.cursor.ranges)
    }

    fn parts(&self) -> (&MultiVec<T>, &Cursor) {
        (&*self.container, &self.cursor)
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $fn:ident) => {
        impl<T: core::ops::$trait> core::ops::$trait<T> for ViewMut<'_, T> {
            #[track_caller]
            fn $fn(&mut self, rhs: T) {
                core::ops::$trait::$fn(self.resolve_mut(), rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign);
impl_assign_op!(SubAssign, sub_assign);
impl_assign_op!(MulAssign, mul_assign);
impl_assign_op!(DivAssign, div_assign);
impl_assign_op!(RemAssign, rem_assign);

macro_rules! impl_view_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<T: PartialEq> PartialEq<$rhs<'_, T>> for $lhs<'_, T> {
            fn eq(&self, other: &$rhs<'_, T>) -> bool {
                cells_eq(self.parts(), other.parts())
            }
        }
    };
}

impl_view_eq!(View, View);
impl_view_eq!(View, ViewMut);
impl_view_eq!(ViewMut, View);
impl_view_eq!(ViewMut, ViewMut);

#[test]
fn view_narrow_keeps_receiver() {
    let cube = MultiVec::<i32>::new([3, 3, 3]);
    let view = cube.view();
    let plane = view.narrow(&[1]);
    assert_eq!(view.num_dimensions(), 3);
    assert_eq!(plane.fixed_indices(), [1]);
    assert_eq!(plane.open_ranges(), [Range::new(0, 3), Range::new(0, 3)]);
    let line = plane.narrow_in_place(&[2]);
    assert_eq!(line.fixed_indices(), [1, 2]);
    assert_eq!(line.open_ranges(), [Range::new(0, 3)]);
}

#[test]
fn view_narrow_in_place_appends() {
    let cube = MultiVec::<i32>::new([2, 3, 4]);
    let view = cube.at(1).narrow_in_place(&[2]);
    assert_eq!(view.fixed_indices(), [1, 2]);
    assert_eq!(cube.offset_of(&[1, 2, 3]), 23);
}

#[test]
fn view_restricted_ranges() {
    let mut cube = MultiVec::<i32>::new([3, 3, 3]);
    for (offset, value) in cube.as_mut_slice().iter_mut().enumerate() {
        *value = offset as i32;
    }
    let view = View::new(&cube, alloc::vec![0], alloc::vec![Range::new(1, 2), Range::new(2, 3)]);
    assert_eq!(view.positions().collect::<Vec<_>>(), [alloc::vec![1, 2]]);
    // narrowing does not check that the index falls inside the consumed range
    assert_eq!(*view.narrow(&[0, 0]).resolve(), 0);
}

#[test]
fn view_one_past_end_fails_on_resolve() {
    let cube = MultiVec::<i32>::new([3, 3, 3]);
    let view = cube.index(&[3, 0, 0]);
    assert_eq!(
        view.try_resolve(),
        Err(MultiVecError::IndexOutOfBounds { dimension: 0, index: 3, size: 3 })
    );
}

#[test]
fn view_mut_compound_assign() {
    let mut cube = MultiVec::filled(10, [2, 2]);
    let mut cell = cube.index_mut(&[1, 0]);
    cell += 5;
    cell -= 3;
    cell *= 4;
    cell /= 6;
    cell %= 5;
    assert_eq!(cell.get(), 3);
    assert_eq!(cube.as_slice(), [10, 10, 3, 10]);
}
