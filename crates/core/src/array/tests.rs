use std::cmp::Ordering;

use proptest::prelude::*;

use crate::{Action, Annotate, Compare, Config, Counters, Error, Identity, Phase};

use super::TracedArray;

fn quiet(values: &[i32]) -> TracedArray<i32, &'static str> {
    TracedArray::new(values.to_vec(), Config::default())
}

#[test]
fn records_initial_snapshot() {
    let arr = quiet(&[3, 1, 2]);
    let trace = arr.trace();

    assert_eq!(trace.len(), 1);
    let initial = &trace[0];
    assert_eq!(initial.values, vec![3, 1, 2]);
    assert_eq!(initial.permutation, vec![0, 1, 2]);
    assert_eq!(initial.action, Action::None);
    assert_eq!(initial.counters.accesses, 0);
    assert!(initial.annotations.is_none());
    assert_eq!(arr.phase(), Phase::Recording);
}

#[test]
fn quiet_reads_are_counted_but_not_recorded() {
    let mut arr = quiet(&[3, 1, 2]);
    for position in 0..3 {
        arr.get(position).unwrap();
    }
    assert_eq!(arr.counters().accesses, 3);
    assert_eq!(arr.trace().len(), 1);
}

#[test]
fn verbose_reads_are_recorded() {
    let mut arr: TracedArray<i32> = TracedArray::new(vec![3, 1, 2], Config::verbose());
    let element = arr.get(2).unwrap();

    assert_eq!(*element.value(), 2);
    assert_eq!(element.identity(), Identity(2));
    assert_eq!(arr.trace().len(), 2);
    let last = arr.trace().last().unwrap();
    assert_eq!(last.action, Action::Access { position: 2 });
    assert_eq!(last.counters.accesses, 1);
}

#[test]
fn out_of_range_read_fails_without_recording() {
    let mut arr: TracedArray<i32> = TracedArray::new(vec![3, 1, 2], Config::verbose());
    let err = arr.get(5).unwrap_err();

    assert_eq!(err, Error::IndexOutOfRange { position: 5, len: 3 });
    assert_eq!(arr.trace().len(), 1);
    assert_eq!(arr.counters().accesses, 0);
}

#[test]
fn out_of_range_swap_and_write_fail_without_recording() {
    let mut arr = quiet(&[3, 1, 2]);
    let element = arr.get(0).unwrap();

    assert!(matches!(
        arr.swap(0, 3),
        Err(Error::IndexOutOfRange { position: 3, .. })
    ));
    assert!(matches!(
        arr.swap_silent(7, 0),
        Err(Error::IndexOutOfRange { position: 7, .. })
    ));
    assert!(matches!(
        arr.set(3, element),
        Err(Error::IndexOutOfRange { position: 3, .. })
    ));
    assert_eq!(arr.trace().len(), 1);
    assert_eq!(arr.counters().swaps, 0);
    assert_eq!(arr.values(), &[3, 1, 2]);
}

#[test]
fn swap_moves_values_and_identities() {
    let mut arr = quiet(&[10, 20, 30]);
    arr.swap(0, 2).unwrap();

    assert_eq!(arr.values(), &[30, 20, 10]);
    assert_eq!(arr.permutation(), &[2, 1, 0]);
    assert_eq!(arr.position_of(Identity(0)), Some(2));
    assert_eq!(arr.counters().swaps, 1);
    assert_eq!(arr.counters().accesses, 2);
    assert_eq!(
        arr.trace().last().unwrap().action,
        Action::Swap {
            position_a: 0,
            position_b: 2
        }
    );
}

#[test]
fn silent_swap_skips_access_count() {
    let mut arr = quiet(&[1, 2]);
    arr.swap_silent(0, 1).unwrap();

    assert_eq!(arr.counters().accesses, 0);
    assert_eq!(arr.counters().swaps, 1);
    assert_eq!(arr.trace().len(), 2);
}

#[test]
fn swap_twice_is_an_involution() {
    let mut arr = quiet(&[4, 8, 15, 16]);
    arr.swap(1, 3).unwrap();
    arr.swap(1, 3).unwrap();

    assert_eq!(arr.values(), &[4, 8, 15, 16]);
    assert_eq!(arr.permutation(), &[0, 1, 2, 3]);
    assert_eq!(arr.counters().swaps, 2);
}

#[test]
fn write_moves_identity_and_keeps_bijection() {
    // One insertion sort step on [2, 3, 1]: lift the key at 2, shift, drop it at 0.
    let mut arr = quiet(&[2, 3, 1]);
    let key = arr.get(2).unwrap();

    let shifted = arr.get(1).unwrap();
    arr.set(2, shifted).unwrap();
    assert_eq!(arr.permutation(), &[0, 2, 1]);

    let shifted = arr.get(0).unwrap();
    arr.set(1, shifted).unwrap();
    assert_eq!(arr.permutation(), &[2, 0, 1]);

    arr.set(0, key).unwrap();
    assert_eq!(arr.values(), &[1, 2, 3]);
    assert_eq!(arr.permutation(), &[2, 0, 1]);

    assert!(arr.trace().iter().all(|snapshot| snapshot.is_bijection()));
    assert_eq!(
        arr.trace().last().unwrap().action,
        Action::Write {
            position: 0,
            value: 1
        }
    );
}

#[test]
fn writes_do_not_count_accesses() {
    let mut arr = quiet(&[5, 6]);
    let element = arr.get(0).unwrap();
    arr.set(1, element).unwrap();

    assert_eq!(arr.counters().accesses, 1);
    assert_eq!(arr.values(), &[5, 5]);
}

#[test]
fn foreign_write_is_rejected() {
    let mut big = quiet(&[1, 2, 3, 4]);
    let foreign = big.get(3).unwrap();

    let mut small = quiet(&[9, 8]);
    let err = small.set(0, foreign).unwrap_err();

    assert_eq!(err, Error::ForeignElement { identity: 3, len: 2 });
    assert_eq!(small.trace().len(), 1);
}

#[test]
fn compare_resolves_current_positions() {
    let mut arr = quiet(&[3, 1, 2]);
    let a = arr.get(0).unwrap();
    let b = arr.get(1).unwrap();
    arr.swap(0, 1).unwrap();

    assert!(arr.greater(&a, &b));
    assert_eq!(arr.counters().comparisons, 1);
    assert_eq!(
        arr.trace().last().unwrap().action,
        Action::Compare {
            position_a: Some(1),
            position_b: Some(0)
        }
    );
}

#[test]
fn each_predicate_counts_once() {
    let mut arr = quiet(&[1, 2]);
    let a = arr.get(0).unwrap();
    let b = arr.get(1).unwrap();

    assert!(arr.less(&a, &b));
    assert!(!arr.greater(&a, &b));
    assert!(arr.less_or_equal(&a, &a));
    assert!(!arr.equal(&a, &b));
    assert_eq!(arr.compare(&b, &a), Some(Ordering::Greater));
    assert_eq!(arr.counters().comparisons, 5);
    assert_eq!(arr.trace().len(), 6);
}

#[test]
fn foreign_compare_is_tolerated() {
    let mut big = quiet(&[1, 2, 3, 4]);
    let foreign = big.get(3).unwrap();

    let mut arr = quiet(&[9, 8]);
    let local = arr.get(0).unwrap();

    assert!(arr.greater(&local, &foreign));
    assert_eq!(
        arr.trace().last().unwrap().action,
        Action::Compare {
            position_a: Some(0),
            position_b: None
        }
    );
}

#[test]
fn incomparable_payloads_satisfy_no_predicate() {
    let mut arr: TracedArray<f64> = TracedArray::new(vec![f64::NAN, 1.0], Config::default());
    let a = arr.get(0).unwrap();
    let b = arr.get(1).unwrap();

    assert_eq!(arr.compare(&a, &b), None);
    assert!(!arr.less(&a, &b));
    assert!(!arr.greater(&a, &b));
    assert!(!arr.equal(&a, &a));
    assert_eq!(arr.counters().comparisons, 4);
}

#[test]
fn snapshots_are_independent_of_later_mutation() {
    let mut arr = quiet(&[1, 2, 3]);
    arr.swap(0, 2).unwrap();
    let after_first = arr.trace()[1].clone();

    arr.swap(0, 1).unwrap();
    arr.annotate(0, Some("pivot")).unwrap();
    arr.swap(1, 2).unwrap();

    assert_eq!(arr.trace()[1], after_first);
    assert_eq!(arr.trace()[1].values, vec![3, 2, 1]);
    assert!(arr.trace()[1].annotations.is_none());
}

#[test]
fn annotations_appear_in_next_snapshot() {
    let mut arr = quiet(&[1, 2, 3]);
    arr.annotate(1, Some("pivot")).unwrap();
    assert_eq!(arr.trace().len(), 1);

    arr.swap(0, 2).unwrap();
    let last = arr.trace().last().unwrap();
    assert_eq!(last.annotations, Some(vec![None, Some("pivot"), None]));

    arr.clear_annotations();
    assert!(arr.annotations().is_none());
}

#[test]
fn annotation_length_is_checked() {
    let err = TracedArray::<i32, &str>::with_annotations(vec![1, 2], vec![None], Config::default())
        .unwrap_err();
    assert_eq!(
        err,
        Error::AnnotationLength {
            expected: 2,
            actual: 1
        }
    );

    let mut arr = quiet(&[1, 2]);
    assert!(arr.set_annotations(Some(vec![None; 3])).is_err());
    assert!(arr.set_annotations(Some(vec![Some("lo"), None])).is_ok());
    assert!(matches!(
        arr.annotate(2, None),
        Err(Error::IndexOutOfRange { position: 2, .. })
    ));
}

#[test]
fn initial_annotations_are_recorded() {
    let arr =
        TracedArray::with_annotations(vec![1, 2], vec![Some("a"), None], Config::default())
            .unwrap();
    assert_eq!(arr.trace()[0].annotations, Some(vec![Some("a"), None]));
}

#[test]
fn mark_finished_sweeps_one_position_at_a_time() {
    let mut arr = quiet(&[1, 2, 3]);
    arr.mark_finished("done");

    let trace = arr.trace();
    assert_eq!(trace.len(), 4);
    assert_eq!(trace[1].annotations, Some(vec![Some("done"), None, None]));
    assert_eq!(
        trace[2].annotations,
        Some(vec![Some("done"), Some("done"), None])
    );
    assert_eq!(trace[3].annotations, Some(vec![Some("done"); 3]));
    assert!(trace.iter().skip(1).all(|s| s.action == Action::None));
    assert_eq!(arr.phase(), Phase::Finalized);
}

#[test]
fn empty_array_is_supported() {
    let mut arr = quiet(&[]);
    assert!(arr.is_empty());
    assert!(arr.get(0).is_err());
    arr.mark_finished("done");
    assert_eq!(arr.trace().len(), 1);
}

#[derive(Debug, Clone)]
enum Op {
    Get(usize),
    Swap(usize, usize),
    Copy(usize, usize),
    Compare(usize, usize),
}

fn op_strategy(n: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..n).prop_map(Op::Get),
        (0..n, 0..n).prop_map(|(a, b)| Op::Swap(a, b)),
        (0..n, 0..n).prop_map(|(a, b)| Op::Copy(a, b)),
        (0..n, 0..n).prop_map(|(a, b)| Op::Compare(a, b)),
    ]
}

fn ops_strategy() -> impl Strategy<Value = (Vec<i32>, Vec<Op>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<i32>(), n),
            prop::collection::vec(op_strategy(n), 0..60),
        )
    })
}

proptest! {
    /// Every snapshot holds a bijection and counters never decrease.
    #[test]
    fn random_operations_keep_invariants((values, ops) in ops_strategy(), verbose in any::<bool>()) {
        let n = values.len();
        let mut arr: TracedArray<i32> = TracedArray::new(values, Config::default().with_verbose(verbose));
        let mut expected_snapshots = 1;
        let mut expected = Counters::default();
        let mut last_recorded = true;

        for op in ops {
            match op {
                Op::Get(p) => {
                    arr.get(p).unwrap();
                    expected.accesses += 1;
                    if verbose {
                        expected_snapshots += 1;
                    }
                    last_recorded = verbose;
                }
                Op::Swap(a, b) => {
                    arr.swap(a, b).unwrap();
                    expected.accesses += 2;
                    expected.swaps += 1;
                    expected_snapshots += 1;
                    last_recorded = true;
                }
                Op::Copy(from, to) => {
                    let element = arr.get(from).unwrap();
                    arr.set(to, element).unwrap();
                    expected.accesses += 1;
                    expected_snapshots += if verbose { 2 } else { 1 };
                    last_recorded = true;
                }
                Op::Compare(a, b) => {
                    let a = arr.get(a).unwrap();
                    let b = arr.get(b).unwrap();
                    arr.compare(&a, &b);
                    expected.accesses += 2;
                    expected.comparisons += 1;
                    expected_snapshots += if verbose { 3 } else { 1 };
                    last_recorded = true;
                }
            }
        }

        prop_assert_eq!(arr.counters(), expected);

        let trace = arr.trace();
        prop_assert_eq!(trace.len(), expected_snapshots);
        for snapshot in trace {
            prop_assert_eq!(snapshot.permutation.len(), n);
            prop_assert!(snapshot.is_bijection());
        }
        for pair in trace.as_slice().windows(2) {
            prop_assert!(pair[1].counters.dominates(&pair[0].counters));
            prop_assert!(pair[1].elapsed >= pair[0].elapsed);
        }

        // A quiet read counts but records nothing, so the last snapshot may lag.
        let last = trace.last().unwrap().counters;
        prop_assert!(expected.dominates(&last));
        if last_recorded {
            prop_assert_eq!(last, expected);
        }
    }
}

#[test]
fn quiet_read_after_last_snapshot_is_only_counted() {
    let mut arr: TracedArray<i32> = TracedArray::new(vec![0], Config::default());
    arr.get(0).unwrap();

    assert_eq!(arr.counters().accesses, 1);
    assert_eq!(arr.trace().len(), 1);
    assert_eq!(arr.trace().last().unwrap().counters.accesses, 0);
}
