//! Least-significant-digit radix sort, base 10.
//!
//! Radix sort never compares elements. Each pass reads every position into
//! one of ten buckets by the current digit, then writes the buckets back in
//! order. [`radix_annotated`] marks each written position with the
//! [`Role::Bucket`] it came from.

use sortscope_core::{Annotate, Sequence, Tracked};

use crate::{
    Error, Role,
    paint::{Painter, Roles},
};

const BASE: u64 = 10;

/// A payload that radix sort can split into decimal digits.
pub trait RadixKey {
    /// Returns the key as an unsigned integer, or `None` if it is negative.
    fn radix_key(&self) -> Option<u64>;
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                fn radix_key(&self) -> Option<u64> {
                    u64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_radix_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Sorts with LSD radix sort.
///
/// # Errors
///
/// Returns [`Error::NegativeKey`] before writing anything if any key is
/// negative, or an error if the sequence rejects an operation.
pub fn radix<S, T>(seq: &mut S) -> Result<(), Error>
where
    S: Sequence<Item = Tracked<T>>,
    T: RadixKey,
{
    radix_sort(seq, &mut ())
}

/// Sorts with LSD radix sort, annotating bucket membership.
///
/// # Errors
///
/// Returns [`Error::NegativeKey`] before writing anything if any key is
/// negative, or an error if the sequence rejects an operation.
pub fn radix_annotated<S, T>(seq: &mut S) -> Result<(), Error>
where
    S: Sequence<Item = Tracked<T>> + Annotate,
    S::Annotation: From<Role>,
    T: RadixKey,
{
    radix_sort(seq, &mut Roles)
}

fn radix_sort<S, T, P>(seq: &mut S, painter: &mut P) -> Result<(), Error>
where
    S: Sequence<Item = Tracked<T>>,
    T: RadixKey,
    P: Painter<S>,
{
    let n = seq.len();
    let mut max = 0u64;
    for position in 0..n {
        let key = key_at(seq, position)?;
        max = max.max(key);
    }

    let mut place = 1u64;
    loop {
        let mut buckets: [Vec<Tracked<T>>; BASE as usize] = Default::default();
        for position in 0..n {
            let element = seq.get(position)?;
            let key = key_of(&element, position)?;
            buckets[digit(key, place)].push(element);
        }

        painter.clear(seq)?;
        let mut k = 0;
        for (d, bucket) in (0u8..).zip(buckets) {
            for element in bucket {
                painter.paint(seq, k, Some(Role::Bucket(d)))?;
                seq.set(k, element)?;
                k += 1;
            }
        }

        match place.checked_mul(BASE) {
            Some(next) if next <= max => place = next,
            _ => return Ok(()),
        }
    }
}

fn key_at<S, T>(seq: &mut S, position: usize) -> Result<u64, Error>
where
    S: Sequence<Item = Tracked<T>>,
    T: RadixKey,
{
    let element = seq.get(position)?;
    key_of(&element, position)
}

fn key_of<T: RadixKey>(element: &Tracked<T>, position: usize) -> Result<u64, Error> {
    element
        .value()
        .radix_key()
        .ok_or(Error::NegativeKey { position })
}

fn digit(key: u64, place: u64) -> usize {
    // Always < BASE.
    ((key / place) % BASE) as usize
}

#[cfg(test)]
mod tests {
    use sortscope_core::{Action, Config, TracedArray};

    use crate::test_utils::{assert_sorts, traced};

    use super::*;

    #[test]
    fn keys() {
        assert_eq!(7u8.radix_key(), Some(7));
        assert_eq!(0i32.radix_key(), Some(0));
        assert_eq!((-1i64).radix_key(), None);
        assert_eq!(usize::MAX.radix_key(), Some(u64::MAX));
    }

    #[test]
    fn one_pass_per_digit() {
        let mut arr = traced(&[170, 45, 75, 90, 802, 24, 2, 66]);
        radix(&mut arr).unwrap();

        let writes = arr
            .trace()
            .iter()
            .filter(|snapshot| matches!(snapshot.action, Action::Write { .. }))
            .count();
        assert_eq!(writes, 3 * 8);
        assert_eq!(arr.counters().comparisons, 0);
        assert_eq!(arr.values(), &[2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn single_digit_keys_take_one_pass() {
        let mut arr = traced(&[3, 0, 9]);
        radix(&mut arr).unwrap();
        assert_eq!(arr.trace().len(), 1 + 3);
    }

    #[test]
    fn negative_key_is_rejected_before_writing() {
        let mut arr = traced(&[3, -1, 2]);
        let err = radix(&mut arr).unwrap_err();

        assert_eq!(err, Error::NegativeKey { position: 1 });
        assert_eq!(arr.trace().len(), 1);
    }

    #[test]
    fn annotated_marks_buckets() {
        let mut arr = traced(&[21, 13, 12]);
        radix_annotated(&mut arr).unwrap();

        // First pass writes bucket 1 (21), then bucket 2 (12), then bucket 3 (13).
        assert_eq!(
            arr.trace()[3].annotations,
            Some(vec![
                Some(Role::Bucket(1)),
                Some(Role::Bucket(2)),
                Some(Role::Bucket(3)),
            ])
        );
    }

    #[test]
    fn works_with_unsigned_payloads() {
        let mut arr: TracedArray<u64, Role> =
            TracedArray::new(vec![1_000_000, 7, 42], Config::default());
        radix(&mut arr).unwrap();
        assert_eq!(arr.values(), &[7, 42, 1_000_000]);
    }

    #[test]
    fn sorts_non_negative_cases() {
        assert_sorts(radix);
        assert_sorts(radix_annotated);
    }
}
