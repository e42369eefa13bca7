use std::{fmt, str::FromStr};

use sortscope_core::{Config, Trace, TracedArray};
use thiserror::Error as ThisError;
use tracing::debug;

use crate::{
    Error, RadixKey, Role, exchange, heap, insertion, merge, pathological, quick, radix,
    selection,
};

/// Every algorithm in the library.
///
/// Quick, heap, merge, and radix run their annotated variants when driven
/// through [`Algorithm::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Cocktail,
    Gnome,
    Comb,
    Shell,
    Quick,
    Heap,
    Merge,
    Radix,
    Slow,
    Stooge,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("unknown algorithm: {0}")]
pub struct ParseAlgorithmError(String);

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Cocktail,
        Algorithm::Gnome,
        Algorithm::Comb,
        Algorithm::Shell,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Radix,
        Algorithm::Slow,
        Algorithm::Stooge,
    ];

    /// Returns the short lowercase identifier, as accepted by [`FromStr`].
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Bubble => "bubble",
            Self::Cocktail => "cocktail",
            Self::Gnome => "gnome",
            Self::Comb => "comb",
            Self::Shell => "shell",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Merge => "merge",
            Self::Radix => "radix",
            Self::Slow => "slow",
            Self::Stooge => "stooge",
        }
    }

    /// Returns a display title such as `"Shell Sort"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Bubble => "Bubble Sort",
            Self::Cocktail => "Cocktail Shaker Sort",
            Self::Gnome => "Gnome Sort",
            Self::Comb => "Comb Sort",
            Self::Shell => "Shell Sort",
            Self::Quick => "Quicksort",
            Self::Heap => "Heapsort",
            Self::Merge => "Merge Sort",
            Self::Radix => "Radix Sort",
            Self::Slow => "Slowsort",
            Self::Stooge => "Stooge Sort",
        }
    }

    /// Returns `true` if the algorithm orders elements by comparing them.
    ///
    /// Only [`Algorithm::Radix`] does not; it needs [`RadixKey`] payloads.
    #[must_use]
    pub fn is_comparison_sort(self) -> bool {
        !matches!(self, Self::Radix)
    }

    /// Runs this algorithm against a traced array.
    ///
    /// Requires [`RadixKey`] payloads so that every algorithm, radix sort
    /// included, can be dispatched. Use [`Algorithm::run_by_comparison`] for
    /// payloads that are only `PartialOrd`, such as floats.
    ///
    /// # Errors
    ///
    /// Returns an error if the array rejects an operation, or if radix sort
    /// meets a negative key.
    pub fn run<T, A>(self, arr: &mut TracedArray<T, A>) -> Result<(), Error>
    where
        T: Clone + PartialOrd + RadixKey,
        A: Clone + From<Role>,
    {
        match self {
            Self::Radix => {
                debug!(algorithm = self.slug(), len = arr.len(), "running");
                radix::radix_annotated(arr)
            }
            _ => self.run_by_comparison(arr),
        }
    }

    /// Runs a comparison sort against a traced array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NeedsRadixKey`] for [`Algorithm::Radix`] without
    /// touching the array, or an error if the array rejects an operation.
    pub fn run_by_comparison<T, A>(self, arr: &mut TracedArray<T, A>) -> Result<(), Error>
    where
        T: Clone + PartialOrd,
        A: Clone + From<Role>,
    {
        debug!(algorithm = self.slug(), len = arr.len(), "running");
        match self {
            Self::Selection => selection::selection(arr),
            Self::Insertion => insertion::insertion(arr),
            Self::Bubble => exchange::bubble(arr),
            Self::Cocktail => exchange::cocktail(arr),
            Self::Gnome => exchange::gnome(arr),
            Self::Comb => exchange::comb(arr),
            Self::Shell => insertion::shell(arr),
            Self::Quick => quick::quick_annotated(arr),
            Self::Heap => heap::heap_annotated(arr),
            Self::Merge => merge::merge_annotated(arr),
            Self::Radix => Err(Error::NeedsRadixKey {
                algorithm: self.name(),
            }),
            Self::Slow => pathological::slow(arr),
            Self::Stooge => pathological::stooge(arr),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| {
                algorithm.slug().eq_ignore_ascii_case(wanted)
                    || algorithm.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Sorts `values` with `algorithm` and returns the recorded trace.
///
/// When `finish` is set, the completion sweep paints every position with
/// [`Role::Finished`] after the sort. Payloads must implement [`RadixKey`];
/// see [`sort_by_comparison`] for other ordered payloads.
///
/// # Errors
///
/// Returns an error if the run fails; the partial trace is discarded. Drive a
/// [`TracedArray`] directly to keep it.
pub fn sort<T, A>(
    algorithm: Algorithm,
    values: Vec<T>,
    config: Config,
    finish: bool,
) -> Result<Trace<T, A>, Error>
where
    T: Clone + PartialOrd + RadixKey,
    A: Clone + From<Role>,
{
    record(values, config, finish, |arr| algorithm.run(arr))
}

/// Sorts `values` with a comparison sort and returns the recorded trace.
///
/// Works for any `PartialOrd` payload. Incomparable pairs such as `NaN`
/// satisfy no predicate, so the final order around them is unspecified.
///
/// # Errors
///
/// Returns [`Error::NeedsRadixKey`] for [`Algorithm::Radix`], or an error if
/// the run fails.
pub fn sort_by_comparison<T, A>(
    algorithm: Algorithm,
    values: Vec<T>,
    config: Config,
    finish: bool,
) -> Result<Trace<T, A>, Error>
where
    T: Clone + PartialOrd,
    A: Clone + From<Role>,
{
    record(values, config, finish, |arr| algorithm.run_by_comparison(arr))
}

fn record<T, A, F>(
    values: Vec<T>,
    config: Config,
    finish: bool,
    run: F,
) -> Result<Trace<T, A>, Error>
where
    T: Clone,
    A: Clone + From<Role>,
    F: FnOnce(&mut TracedArray<T, A>) -> Result<(), Error>,
{
    let mut arr = TracedArray::new(values, config);
    run(&mut arr)?;
    if finish {
        arr.mark_finished(Role::Finished.into());
    }
    Ok(arr.into_trace())
}
