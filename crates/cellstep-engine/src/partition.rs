//! Static contiguous row partitioning.
//!
//! [`RowPartition`] splits `rows` into at most `workers` contiguous bands.
//! Band sizes differ by at most one row and the first `rows % workers`
//! bands carry the extra row. The split depends only on `(rows, workers)`,
//! never on runtime load.

use std::ops::Range;

use smallvec::SmallVec;

/// Fixed assignment of row ranges to workers.
///
/// Only non-empty bands are stored: with more workers than rows, each of
/// the first `rows` workers gets a single row and the rest get nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPartition {
    rows: usize,
    workers: usize,
    bands: SmallVec<[Range<usize>; 8]>,
}

impl RowPartition {
    /// Partition `rows` rows across `workers` workers.
    ///
    /// `workers` of 0 is treated as 1; [`RunConfig::validate`](crate::RunConfig::validate)
    /// rejects it before a partition is ever built.
    pub fn new(rows: usize, workers: usize) -> Self {
        let workers = workers.max(1);
        let base = rows / workers;
        let extra = rows % workers;
        let active = workers.min(rows);

        let mut bands = SmallVec::with_capacity(active);
        let mut start = 0;
        for worker in 0..active {
            let len = base + usize::from(worker < extra);
            bands.push(start..start + len);
            start += len;
        }
        debug_assert_eq!(start, rows);

        Self {
            rows,
            workers,
            bands,
        }
    }

    /// Total rows covered.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Requested worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Non-empty bands in row order; band `i` belongs to worker `i`.
    pub fn bands(&self) -> &[Range<usize>] {
        &self.bands
    }

    /// Number of workers that receive at least one row.
    pub fn active_workers(&self) -> usize {
        self.bands.len()
    }

    /// Worker owning `row`, or `None` if out of range.
    pub fn worker_of(&self, row: usize) -> Option<usize> {
        self.bands.iter().position(|band| band.contains(&row))
    }

    /// Split a row-major `rows x side` buffer into one disjoint mutable
    /// slice per band.
    pub fn split_mut<'a>(&self, buffer: &'a mut [u8], side: usize) -> SmallVec<[&'a mut [u8]; 8]> {
        debug_assert_eq!(buffer.len(), self.rows * side);
        let mut out = SmallVec::with_capacity(self.bands.len());
        let mut rest = buffer;
        for band in &self.bands {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * side);
            out.push(head);
            rest = tail;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_split() {
        let p = RowPartition::new(8, 4);
        assert_eq!(p.bands(), &[0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn remainder_goes_to_leading_workers() {
        let p = RowPartition::new(10, 4);
        assert_eq!(p.bands(), &[0..3, 3..6, 6..8, 8..10]);
    }

    #[test]
    fn single_worker_takes_everything() {
        let p = RowPartition::new(7, 1);
        assert_eq!(p.bands(), &[0..7]);
        assert_eq!(p.active_workers(), 1);
    }

    #[test]
    fn more_workers_than_rows() {
        let p = RowPartition::new(3, 8);
        assert_eq!(p.bands(), &[0..1, 1..2, 2..3]);
        assert_eq!(p.workers(), 8);
        assert_eq!(p.active_workers(), 3);
    }

    #[test]
    fn zero_workers_treated_as_one() {
        let p = RowPartition::new(4, 0);
        assert_eq!(p.bands(), &[0..4]);
    }

    #[test]
    fn worker_of_finds_owner() {
        let p = RowPartition::new(10, 4);
        assert_eq!(p.worker_of(0), Some(0));
        assert_eq!(p.worker_of(5), Some(1));
        assert_eq!(p.worker_of(6), Some(2));
        assert_eq!(p.worker_of(9), Some(3));
        assert_eq!(p.worker_of(10), None);
    }

    #[test]
    fn split_mut_matches_bands() {
        let p = RowPartition::new(5, 2);
        let mut buf: Vec<u8> = (0..15).collect();
        let slices = p.split_mut(&mut buf, 3);
        assert_eq!(slices.len(), 2);
        assert_eq!(&*slices[0], &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&*slices[1], &[9, 10, 11, 12, 13, 14]);
    }

    proptest! {
        #[test]
        fn bands_tile_rows_exactly(rows in 1usize..200, workers in 1usize..40) {
            let p = RowPartition::new(rows, workers);
            prop_assert_eq!(p.active_workers(), workers.min(rows));

            let mut next = 0;
            for band in p.bands() {
                prop_assert_eq!(band.start, next);
                prop_assert!(!band.is_empty());
                next = band.end;
            }
            prop_assert_eq!(next, rows);

            let min = p.bands().iter().map(|b| b.len()).min().unwrap();
            let max = p.bands().iter().map(|b| b.len()).max().unwrap();
            prop_assert!(max - min <= 1);
        }

        #[test]
        fn partition_is_deterministic(rows in 1usize..200, workers in 1usize..40) {
            prop_assert_eq!(RowPartition::new(rows, workers), RowPartition::new(rows, workers));
        }
    }
}
