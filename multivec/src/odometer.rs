use crate::range::Range;
use alloc::vec::Vec;

/// Mixed-radix counter over a list of ranges.
///
/// Yields every index tuple inside the ranges, last position varies
/// fastest (same order as the row-major buffer). Yields a single empty
/// tuple for no ranges and nothing if any range is empty.
#[derive(Debug, Clone)]
pub struct Odometer<'a> {
    ranges: &'a [Range],
    counters: Vec<usize>,
    done: bool,
}

impl<'a> Odometer<'a> {
    /// Odometer starting at the begin of every range
    #[must_use]
    pub fn new(ranges: &'a [Range]) -> Self {
        Self {
            ranges,
            counters: ranges.iter().map(|r| r.begin).collect(),
            done: ranges.iter().any(Range::is_empty),
        }
    }

    fn advance(&mut self) {
        let mut i = self.counters.len();
        loop {
            if i == 0 {
                // carry went past the first dimension
                self.done = true;
                return;
            }
            i -= 1;
            self.counters[i] += 1;
            if self.counters[i] < self.ranges[i].end {
                return;
            }
            self.counters[i] = self.ranges[i].begin;
        }
    }
}

impl Iterator for Odometer<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.counters.clone();
        self.advance();
        Some(current)
    }
}

impl core::iter::FusedIterator for Odometer<'_> {}

#[test]
fn odometer_order() {
    use alloc::vec;
    let ranges = [Range::new(0, 2), Range::new(1, 3)];
    let tuples: Vec<Vec<usize>> = Odometer::new(&ranges).collect();
    assert_eq!(tuples, [vec![0, 1], vec![0, 2], vec![1, 1], vec![1, 2]]);
}

#[test]
fn odometer_degenerate() {
    assert_eq!(Odometer::new(&[]).count(), 1);
    let ranges = [Range::new(0, 3), Range::new(2, 2)];
    assert_eq!(Odometer::new(&ranges).count(), 0);
}
