//! Sorts that exploit the structure of non-negative integers instead of
//! comparing elements pairwise.
//!
//! Input is validated before anything is written, so a rejected sequence is
//! left exactly as it was passed in.

use crate::error::{InvalidInput, SortError};

/// Returns the maximum of `seq`, rejecting empty input and negative values.
fn checked_max(seq: &[i64]) -> Result<i64, InvalidInput> {
    let mut max = None;
    for (index, &value) in seq.iter().enumerate() {
        if value < 0 {
            return Err(InvalidInput::Negative { index, value });
        }
        max = Some(max.map_or(value, |m: i64| m.max(value)));
    }
    max.ok_or(InvalidInput::Empty)
}

/// One counter per value in `0..=max`. Memory grows with `max`, not with the
/// length of the sequence.
fn table(max: i64) -> Vec<usize> {
    vec![0; max as usize + 1]
}

/// Tallies every value into `counts` and rewrites `seq` in index order.
fn tally_and_rewrite(seq: &mut [i64], counts: &mut [usize]) {
    for &value in seq.iter() {
        counts[value as usize] += 1;
    }
    let mut slots = seq.iter_mut();
    for (value, &count) in counts.iter().enumerate() {
        for slot in slots.by_ref().take(count) {
            *slot = value as i64;
        }
    }
}

/// Counting sort. Costs O(n + max) time and O(max) memory.
pub fn counting_sort(seq: &mut [i64]) -> Result<&mut [i64], SortError> {
    let max = checked_max(seq)?;
    let mut counts = table(max);
    tally_and_rewrite(seq, &mut counts);
    Ok(seq)
}

/// Least-significant-digit radix sort in base 10.
///
/// Each pass distributes values into ten buckets keyed by one decimal digit and
/// concatenates them back. Buckets keep insertion order, which is what lets the
/// next pass build on this one.
pub fn radix_sort(seq: &mut [i64]) -> Result<&mut [i64], SortError> {
    let max = checked_max(seq)?;
    let mut buckets: [Vec<i64>; 10] = Default::default();
    let mut divisor = 1i64;
    for _ in 0..decimal_digits(max) {
        for &value in seq.iter() {
            buckets[((value / divisor) % 10) as usize].push(value);
        }
        let mut i = 0;
        for bucket in buckets.iter_mut() {
            for value in bucket.drain(..) {
                seq[i] = value;
                i += 1;
            }
        }
        divisor = divisor.saturating_mul(10);
    }
    Ok(seq)
}

/// Number of decimal digits in `value`; zero has one digit.
fn decimal_digits(mut value: i64) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// "Bucket" sort with one bucket per value in `0..=max`.
///
/// With unit-width buckets nothing is left to sort inside a bucket, so this
/// behaves exactly like [`counting_sort`]. It is kept that way so timings stay
/// comparable with earlier runs of the catalogue.
pub fn bucket_sort(seq: &mut [i64]) -> Result<&mut [i64], SortError> {
    let max = checked_max(seq)?;
    let mut buckets = table(max);
    tally_and_rewrite(seq, &mut buckets);
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(802), 3);
        assert_eq!(decimal_digits(i64::MAX), 19);
    }

    #[test]
    fn checked_max_reports_first_negative() {
        assert_eq!(
            checked_max(&[3, -1, 4, -5]),
            Err(InvalidInput::Negative {
                index: 1,
                value: -1
            })
        );
        assert_eq!(checked_max(&[]), Err(InvalidInput::Empty));
        assert_eq!(checked_max(&[0, 7, 2]), Ok(7));
    }

    #[test]
    fn large_max_is_sorted_by_table_sorts() {
        let mut data = vec![3, 1 << 24, 0];
        assert_eq!(counting_sort(&mut data).unwrap(), &[0, 3, 1 << 24]);
        let mut data = vec![1 << 24, 7, 1 << 24, 0];
        assert_eq!(bucket_sort(&mut data).unwrap(), &[0, 7, 1 << 24, 1 << 24]);
    }

    #[test]
    fn radix_handles_huge_values() {
        let mut data = vec![i64::MAX, 0, 1_000_000_000_000, 42];
        radix_sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 42, 1_000_000_000_000, i64::MAX]);
    }

    #[test]
    fn all_zeros() {
        let mut data = vec![0; 16];
        assert_eq!(counting_sort(&mut data).unwrap(), &[0; 16]);
        assert_eq!(radix_sort(&mut data).unwrap(), &[0; 16]);
        assert_eq!(bucket_sort(&mut data).unwrap(), &[0; 16]);
    }
}
