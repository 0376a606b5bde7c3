//! Result classifier
//!
//! Partitions service records into three disjoint groups by comparing each
//! value against a symmetric, inclusive bound.

use super::number::WholeNumber;

/// Which side of the bound a value falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `num < -bound`
    Below,
    /// `-bound <= num <= bound`
    InRange,
    /// `num > bound`
    Above,
}

impl Bucket {
    /// Place a single value relative to `bound`.
    ///
    /// Both ends of the range are inclusive. Comparison happens in `i128` so
    /// no `i64` value or `u64` bound can overflow.
    #[must_use]
    pub fn of(num: i64, bound: u64) -> Self {
        let num = i128::from(num);
        let bound = i128::from(bound);
        if num < -bound {
            Self::Below
        } else if num > bound {
            Self::Above
        } else {
            Self::InRange
        }
    }
}

/// The three partitions of one batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Number of records below `-bound`
    pub below_count: usize,
    /// Records within the bound, in input order
    pub in_range: Vec<WholeNumber>,
    /// Number of records above `bound`
    pub above_count: usize,
}

impl Classification {
    /// Total number of classified records
    #[must_use]
    pub fn total(&self) -> usize {
        self.below_count + self.in_range.len() + self.above_count
    }

    /// True when nothing was classified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition `records` against `bound`.
///
/// Every record lands in exactly one group. The in-range subsequence keeps
/// the input order; ordering for display is the formatter's job.
#[must_use]
pub fn classify(records: &[WholeNumber], bound: u64) -> Classification {
    records
        .iter()
        .fold(Classification::default(), |mut acc, record| {
            match Bucket::of(record.num, bound) {
                Bucket::Below => acc.below_count += 1,
                Bucket::Above => acc.above_count += 1,
                Bucket::InRange => acc.in_range.push(record.clone()),
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::number::BOUND;
    use crate::testutil::{make_record, make_records};
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        let result = classify(&[], BOUND);
        assert_eq!(result, Classification::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let records = make_records(&[(-9000, "minus nine thousand"), (9000, "nine thousand")]);
        let result = classify(&records, BOUND);

        assert_eq!(result.below_count, 0);
        assert_eq!(result.above_count, 0);
        assert_eq!(result.in_range, records);
    }

    #[test]
    fn test_just_outside_bounds() {
        let records = make_records(&[(-9001, "a"), (9001, "b")]);
        let result = classify(&records, BOUND);

        assert_eq!(result.below_count, 1);
        assert_eq!(result.above_count, 1);
        assert!(result.in_range.is_empty());
    }

    #[test]
    fn test_end_to_end_batch_counts() {
        let records = make_records(&[
            (-9500, "minus nine thousand five hundred"),
            (0, "zero"),
            (9000, "nine thousand"),
            (12000, "twelve thousand"),
        ]);
        let result = classify(&records, BOUND);

        assert_eq!(result.below_count, 1);
        assert_eq!(result.above_count, 1);
        assert_eq!(
            result.in_range,
            vec![make_record(0, "zero"), make_record(9000, "nine thousand")]
        );
    }

    #[test]
    fn test_in_range_preserves_input_order() {
        let records = make_records(&[(3, "three"), (1, "one"), (2, "two")]);
        let result = classify(&records, BOUND);
        let nums: Vec<i64> = result.in_range.iter().map(|r| r.num).collect();
        assert_eq!(nums, vec![3, 1, 2]);
    }

    #[test]
    fn test_zero_bound() {
        let records = make_records(&[(-1, "minus one"), (0, "zero"), (1, "one")]);
        let result = classify(&records, 0);

        assert_eq!(result.below_count, 1);
        assert_eq!(result.in_range, vec![make_record(0, "zero")]);
        assert_eq!(result.above_count, 1);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(Bucket::of(i64::MIN, u64::MAX), Bucket::InRange);
        assert_eq!(Bucket::of(i64::MAX, u64::MAX), Bucket::InRange);
        assert_eq!(Bucket::of(i64::MIN, 0), Bucket::Below);
        assert_eq!(Bucket::of(i64::MAX, 0), Bucket::Above);
    }

    proptest! {
        /// Property: every record lands in exactly one bucket.
        #[test]
        fn partition_is_total(nums in proptest::collection::vec(any::<i64>(), 0..64), bound in 0u64..20_000) {
            let records: Vec<WholeNumber> = nums.iter().map(|n| make_record(*n, "x")).collect();
            let result = classify(&records, bound);
            prop_assert_eq!(result.total(), records.len());
        }

        /// Property: the in-range group contains only values within the bound.
        #[test]
        fn in_range_respects_bound(nums in proptest::collection::vec(-20_000i64..20_000, 0..64)) {
            let records: Vec<WholeNumber> = nums.iter().map(|n| make_record(*n, "x")).collect();
            let result = classify(&records, BOUND);
            let limit = i64::try_from(BOUND).unwrap();
            prop_assert!(result.in_range.iter().all(|r| (-limit..=limit).contains(&r.num)));
            let below = nums.iter().filter(|n| **n < -limit).count();
            prop_assert_eq!(result.below_count, below);
        }
    }
}
