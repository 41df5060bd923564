//! Test Assertions - Panicking Forms of the Counter Checks
//!
//! Each `assert_*` runs the matching check with default options and
//! panics with the failure message, failing only the calling test.
//! Panics are attributed to the caller via `#[track_caller]`.

use prometheus::core::Collector;

use super::counter_checks;
use crate::domain::LabelExpectation;
use crate::error::AssertionError;
use crate::ports::MetricsSource;

/// Panic with the failure message if `result` is an error.
///
/// Use with a `CounterChecker` built from non-default options.
#[track_caller]
pub fn require(result: Result<(), AssertionError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

/// Assert the first metric carries `labels` and `expected_value`.
#[track_caller]
pub fn assert_counter_with_labels<S, C>(
    source: &S,
    counter: &C,
    expected_value: f64,
    labels: &[LabelExpectation],
) where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    require(counter_checks::check_counter_with_labels(
        source,
        counter,
        expected_value,
        labels,
    ));
}

/// Assert the registry holds no labelled metric.
#[track_caller]
pub fn assert_counter_not_called<S, C>(
    source: &S,
    counter: &C,
    not_expected_value: f64,
    labels: &[LabelExpectation],
) where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    require(counter_checks::check_counter_not_called(
        source,
        counter,
        not_expected_value,
        labels,
    ));
}

/// Assert the first metric's value, ignoring labels.
#[track_caller]
pub fn assert_single_counter<S, C>(source: &S, counter: &C, expected_value: f64)
where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    require(counter_checks::check_single_counter(
        source,
        counter,
        expected_value,
    ));
}

/// Assert the series of family `name` matching `labels` has `expected_value`.
#[track_caller]
pub fn assert_named_counter<S>(
    source: &S,
    name: &str,
    expected_value: f64,
    labels: &[LabelExpectation],
) where
    S: MetricsSource + ?Sized,
{
    require(counter_checks::check_named_counter(
        source,
        name,
        expected_value,
        labels,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_passes_ok() {
        require(Ok(()));
    }

    #[test]
    #[should_panic(expected = "Prometheus counter jobs_total not found in the registry.")]
    fn test_require_panics_with_display_text() {
        require(Err(AssertionError::CounterNotFound {
            counter: "jobs_total".to_string(),
        }));
    }
}
