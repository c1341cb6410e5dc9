use itertools::Itertools;
use multivec::{MultiVec, Odometer, Range, View};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SEED: u64 = 69420;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_dimensions(rng: &mut SmallRng) -> Vec<usize> {
    let rank = rng.gen_range(1..5);
    (0..rank).map(|_| rng.gen_range(1..5)).collect()
}

fn all_indices(dimensions: &[usize]) -> Vec<Vec<usize>> {
    dimensions.iter().map(|&d| 0..d).multi_cartesian_product().collect()
}

#[test]
fn offset_is_bijection() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(SEED);
    for _ in 0..50 {
        let dimensions = random_dimensions(&mut rng);
        let x = MultiVec::<u8>::new(dimensions.clone());
        // multi_cartesian_product is row-major too, so offsets come out in order
        let offsets: Vec<usize> = all_indices(&dimensions).iter().map(|indices| x.offset_of(indices)).collect();
        assert_eq!(offsets, (0..x.buffer_size()).collect::<Vec<usize>>(), "{dimensions:?}");
    }
}

#[test]
fn index_round_trip() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(SEED + 1);
    for _ in 0..20 {
        let dimensions = random_dimensions(&mut rng);
        let mut x = MultiVec::new(dimensions.clone());
        for value in x.as_mut_slice() {
            *value = rng.gen::<i64>();
        }
        for indices in all_indices(&dimensions) {
            assert_eq!(x.index(&indices).resolve(), x.value_at(x.offset_of(&indices)));
        }
    }
}

#[test]
fn composition_matches_joint_indexing() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(SEED + 2);
    for _ in 0..20 {
        let dimensions = random_dimensions(&mut rng);
        let mut x = MultiVec::new(dimensions.clone());
        for (offset, value) in x.as_mut_slice().iter_mut().enumerate() {
            *value = offset;
        }
        for indices in all_indices(&dimensions) {
            let split = rng.gen_range(1..=indices.len());
            let (prefix, suffix) = indices.split_at(split);
            let joint = x.index(&indices);
            let mut separate = x.index(prefix);
            for &i in suffix {
                separate = separate.at_in_place(i);
            }
            assert_eq!(separate, joint);
            assert_eq!(separate.get(), x.offset_of(&indices));
        }
    }
}

#[test]
fn odometer_matches_cartesian_product() {
    let mut rng = SmallRng::seed_from_u64(SEED + 3);
    for _ in 0..50 {
        let rank = rng.gen_range(1..5);
        let ranges: Vec<Range> = (0..rank)
            .map(|_| {
                let begin = rng.gen_range(0..4);
                Range::new(begin, begin + rng.gen_range(0..4))
            })
            .collect();
        let expected: Vec<Vec<usize>> = ranges.iter().map(|r| r.begin..r.end).multi_cartesian_product().collect();
        assert_eq!(Odometer::new(&ranges).collect::<Vec<_>>(), expected, "{ranges:?}");
    }
}

#[test]
fn full_views_over_equal_contents_are_equal() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(SEED + 4);
    for _ in 0..20 {
        let dimensions = random_dimensions(&mut rng);
        let mut x = MultiVec::new(dimensions.clone());
        for value in x.as_mut_slice() {
            *value = rng.gen_range(0..3u8);
        }
        let y = x.clone();
        assert_eq!(x.view(), y.view());
        let ranges: Vec<Range> = dimensions.iter().map(|&d| Range::new(0, d)).collect();
        assert_eq!(View::from_ranges(&x, ranges), y.view());

        let offset = rng.gen_range(0..x.buffer_size());
        *x.value_at_mut(offset) += 1;
        assert_ne!(x.view(), y.view());
    }
}

#[test]
fn cube_scenario() {
    init_logger();
    let mut cube = MultiVec::filled(0, [3, 3, 3]);
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                cube.index_mut(&[i]).at_in_place(j).at_in_place(k).set(i * 9 + j * 3 + k);
            }
        }
    }
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                assert_eq!(cube.index(&[i, j, k]).get(), i * 9 + j * 3 + k);
            }
        }
    }
    assert_eq!(cube.buffer_size(), 27);
}
