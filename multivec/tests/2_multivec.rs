use multivec::{MultiVec, MultiVecError, Range, View, ViewConstraint};

fn cube() -> MultiVec<i32> {
    MultiVec::new([3, 3, 3])
}

#[test]
fn construct_with_dimensions() {
    let cube = MultiVec::<i32>::new([1, 2, 3]);
    assert_eq!(cube.rank(), 3);
    assert_eq!(cube.dimension_size(0), 1);
    assert_eq!(cube.dimension_size(1), 2);
    assert_eq!(cube.dimension_size(2), 3);
    assert_eq!(cube.buffer_size(), 6);
    assert!(cube.as_slice().iter().all(|&x| x == 0));
}

#[test]
fn construct_with_default_value() {
    let cube = MultiVec::filled(42, vec![1, 2, 3]);
    assert_eq!(cube.rank(), 3);
    assert_eq!(cube.buffer_size(), 6);
    assert!(cube.as_slice().iter().all(|&x| x == 42));
}

#[test]
fn construct_empty_dimension() {
    let empty = MultiVec::<u8>::new([3, 0, 2]);
    assert_eq!(empty.buffer_size(), 0);
    assert_eq!(empty.try_value_at(0), Err(MultiVecError::OffsetOutOfBounds { offset: 0, size: 0 }));
}

#[test]
fn cube_buffer_size() {
    assert_eq!(cube().rank(), 3);
    assert_eq!(cube().buffer_size(), 27);
}

#[test]
#[should_panic(expected = "DimensionOutOfBounds")]
fn dimension_size_out_of_bounds() {
    let _ = cube().dimension_size(3);
}

#[test]
fn equality() {
    let cube = cube();
    assert_eq!(cube, MultiVec::new([3, 3, 3]));
    assert_ne!(cube, MultiVec::new([3, 3]));
    assert_ne!(cube, MultiVec::new([3, 3, 3, 3]));
    let mut another_cube = MultiVec::new([3, 3, 3]);
    another_cube.index_mut(&[0, 0, 0]).set(42);
    assert_ne!(cube, another_cube);
}

#[test]
fn offsets_are_row_major() {
    let cube = cube();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                assert_eq!(cube.offset_of(&[i, j, k]), i * 9 + j * 3 + k);
            }
        }
    }
}

#[test]
#[should_panic(expected = "IndexCountMismatch: got 2 indices for rank 3")]
fn offset_with_fewer_indices() {
    let _ = cube().offset_of(&[0, 0]);
}

#[test]
#[should_panic(expected = "IndexCountMismatch: got 4 indices for rank 3")]
fn offset_with_more_indices() {
    let _ = cube().offset_of(&[0, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "IndexOutOfBounds: index 3 in dimension 0")]
fn offset_index_out_of_bounds() {
    let _ = cube().offset_of(&[3, 0, 0]);
}

#[test]
fn offset_index_out_of_bounds_per_dimension() {
    let cube = cube();
    for dimension in 0..3 {
        let mut indices = [0; 3];
        indices[dimension] = 4;
        assert_eq!(
            cube.try_offset_of(&indices),
            Err(MultiVecError::IndexOutOfBounds { dimension, index: 4, size: 3 })
        );
    }
}

#[test]
fn read_and_write_by_offset() {
    let mut cube = cube();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                let offset = cube.offset_of(&[i, j, k]);
                assert_eq!(*cube.value_at(offset), 0);
                *cube.value_at_mut(offset) = (i * 9 + j * 3 + k) as i32;
                assert_eq!(*cube.value_at(offset), (i * 9 + j * 3 + k) as i32);
            }
        }
    }
    assert_eq!(cube.as_slice(), (0..27).collect::<Vec<i32>>());
}

#[test]
#[should_panic(expected = "OffsetOutOfBounds: offset is 27, but the buffer size is 27")]
fn read_offset_out_of_bounds() {
    let _ = cube().value_at(27);
}

#[test]
#[should_panic(expected = "OffsetOutOfBounds")]
fn write_offset_out_of_bounds() {
    let mut cube = cube();
    *cube.value_at_mut(27) = 42;
}

#[test]
fn index_generates_views() {
    let cube = cube();
    let full = Range::new(0, 3);
    assert_eq!(cube.index(&[0]), View::new(&cube, vec![0], vec![full, full]));
    assert_eq!(cube.index(&[0, 0]), View::new(&cube, vec![0, 0], vec![full]));
    assert_eq!(cube.index(&[0, 0, 0]), View::new(&cube, vec![0, 0, 0], vec![]));
    assert_eq!(cube.at(0), View::new(&cube, vec![0], vec![full, full]));
    assert_eq!(cube.at(0).at(0), View::new(&cube, vec![0, 0], vec![full]));
    assert_eq!(cube.at(0).at(0).at(0), View::new(&cube, vec![0, 0, 0], vec![]));
}

#[test]
#[should_panic(expected = "IndexCountInvalid: got 0 indices")]
fn index_with_no_indices() {
    let _ = cube().index(&[]);
}

#[test]
#[should_panic(expected = "IndexCountInvalid: got 4 indices")]
fn index_with_too_many_indices() {
    let _ = cube().index(&[0, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "IndexCountInvalid: got 1 indices, but 0 open ranges are left")]
fn index_separately_past_rank() {
    let cube = cube();
    let _ = cube.at(0).at(0).at(0).at(0);
}

#[test]
fn index_past_dimension_fails_on_construction() {
    let cube = cube();
    assert_eq!(
        cube.try_index(&[4, 0, 0]).err(),
        Some(ViewConstraint::FixedIndex { dimension: 0, index: 4, size: 3 }.into())
    );
    assert_eq!(
        cube.try_index(&[0, 0, 4]).err(),
        Some(MultiVecError::RangeExceedsContainer(ViewConstraint::FixedIndex {
            dimension: 2,
            index: 4,
            size: 3
        }))
    );
}

#[test]
#[should_panic(expected = "RangeExceedsContainer: fixed index 4 in dimension 1 is past size 3")]
fn write_past_dimension_with_separate_indices() {
    let mut cube = cube();
    cube.at_mut(0).at_in_place(4).at_in_place(0).set(42);
}

#[test]
fn read_and_write_by_joint_indices() {
    let mut cube = cube();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                assert_eq!(cube.index(&[i, j, k]).get(), 0);
                cube.index_mut(&[i, j, k]).set((i * 9 + j * 3 + k) as i32);
                assert_eq!(cube.index(&[i, j, k]).get(), (i * 9 + j * 3 + k) as i32);
            }
        }
    }
}

#[test]
fn read_and_write_by_separate_indices() {
    let mut cube = cube();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                *cube.at_mut(i).at_in_place(j).at_in_place(k).into_resolved() = (i * 9 + j * 3 + k + 1) as i32;
            }
        }
    }
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                assert_ne!(*cube.at(i).at(j).at(k).resolve(), 0);
            }
        }
    }
}

#[test]
fn whole_view() {
    let cube = cube();
    let view = cube.view();
    assert!(view.fixed_indices().is_empty());
    assert_eq!(view.num_dimensions(), 3);
    assert!(core::ptr::eq(view.container(), &cube));
}
