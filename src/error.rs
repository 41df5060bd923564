//! Assertion Errors - Why a Counter Check Failed
//!
//! Every variant renders a message naming what was expected and what
//! the snapshot actually held. The `assert_*` functions panic with
//! exactly this text.

use thiserror::Error;

use crate::ports::GatherError;

/// Counter assertion failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AssertionError {
    /// The registry snapshot could not be gathered.
    #[error("Unable to gather prometheus metrics: {0}")]
    Gather(#[from] GatherError),

    /// No family, no metric, or (for labelled checks) no labels.
    #[error(
        "Unable to gather the metrics from prometheus.\n\tExpected 1 MetricFamilies; got: {families}.\n\tExpected 1 Metric; got: {metrics}"
    )]
    MissingMetric {
        /// Families observed.
        families: usize,
        /// Metrics observed in the first family.
        metrics: usize,
    },

    /// A label with the expected name carried a different value.
    #[error("Prometheus counter {counter} expected {expected}; got [{actual}]")]
    LabelMismatch {
        /// Counter under test.
        counter: String,
        /// Expected pair, rendered.
        expected: String,
        /// Label actually found, rendered.
        actual: String,
    },

    /// None of the expected labels were found on the metric.
    #[error("Prometheus counter {counter} not found in the registry.")]
    CounterNotFound {
        /// Counter under test.
        counter: String,
    },

    /// Labels matched but the counter value differs.
    #[error("Prometheus counter {counter} expected value {expected:.6}; got {actual:.6}")]
    ValueMismatch {
        /// Counter under test.
        counter: String,
        /// Expected value.
        expected: f64,
        /// Observed value.
        actual: f64,
    },

    /// Single-counter check saw a different count.
    #[error("Prometheus counter {counter} expected count {expected:.6}; got {actual:.6}")]
    CountMismatch {
        /// Counter under test.
        counter: String,
        /// Expected value.
        expected: f64,
        /// Observed value.
        actual: f64,
    },

    /// The not-called check found a metric.
    #[error("Expected 0 MetricFamilies; got: {families}.\n\tExpected 0 Metric; got: {metrics}")]
    UnexpectedMetric {
        /// Families observed.
        families: usize,
        /// Metrics observed in the first family.
        metrics: usize,
    },

    /// The not-called check found a series carrying every expected label.
    #[error(
        "Prometheus counter {counter} expected no series with labels {labels}; got one with value {value:.6}"
    )]
    UnexpectedSeries {
        /// Counter under test.
        counter: String,
        /// Expected pairs, rendered.
        labels: String,
        /// Value of the series found.
        value: f64,
    },

    /// No family carries the requested name.
    #[error("Prometheus counter {name} not found in the registry; families present: [{present}]")]
    FamilyNotFound {
        /// Requested family name.
        name: String,
        /// Names that were present, comma separated.
        present: String,
    },

    /// The family exists but no series carries the expected labels.
    #[error(
        "Prometheus counter {name} has no series with labels {expected}; {examined} series examined"
    )]
    SeriesNotFound {
        /// Family name.
        name: String,
        /// Expected pairs, rendered.
        expected: String,
        /// Number of series in the family.
        examined: usize,
    },
}
