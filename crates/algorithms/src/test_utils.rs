use sortscope_core::{Config, TracedArray};

use crate::{Error, Role};

pub(crate) fn traced(values: &[i32]) -> TracedArray<i32, Role> {
    TracedArray::new(values.to_vec(), Config::default())
}

const CASES: &[&[i32]] = &[
    &[],
    &[7],
    &[2, 1],
    &[1, 2, 3, 4, 5, 6],
    &[6, 5, 4, 3, 2, 1],
    &[3, 1, 2, 3, 1, 2],
    &[9, 0, 4, 4, 7, 1, 8, 2, 6, 5, 3, 11, 10],
];

/// Runs `sort` over a fixed set of inputs and checks the final values are
/// ascending and every snapshot holds a bijection.
pub(crate) fn assert_sorts<F>(sort: F)
where
    F: Fn(&mut TracedArray<i32, Role>) -> Result<(), Error>,
{
    for case in CASES {
        let mut arr = traced(case);
        sort(&mut arr).unwrap();

        let mut expected = case.to_vec();
        expected.sort_unstable();
        assert_eq!(arr.values(), expected.as_slice(), "input {case:?}");
        assert!(
            arr.trace().iter().all(|snapshot| snapshot.is_bijection()),
            "input {case:?}"
        );
    }
}
