//! Counter Checks - Registry Snapshot Assertions
//!
//! Gathers a fresh snapshot on every call and compares it against the
//! caller's expectations. The first three checks only look at the
//! first metric of the first family, except the not-called check under
//! `NotCalledScope::Labels`, which looks up the counter's own family.
//! `check_named_counter` selects the family and series explicitly.

use prometheus::core::Collector;
use prometheus::proto::Metric;
use tracing::{debug, instrument, warn};

use crate::adapters::{counter_identity, counter_names};
use crate::config::{AssertOptions, FoundDetection, NotCalledScope};
use crate::domain::expectation::{self, LabelExpectation};
use crate::domain::snapshot::{self, SnapshotShape};
use crate::error::AssertionError;
use crate::ports::MetricsSource;

/// Runs counter checks under a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterChecker {
    options: AssertOptions,
}

impl CounterChecker {
    /// Create a checker with the given options.
    pub const fn new(options: AssertOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub const fn options(&self) -> AssertOptions {
        self.options
    }

    /// Check that the first metric carries the expected labels and value.
    ///
    /// Expected labels whose name does not appear on the metric are
    /// skipped. Under `FoundDetection::Sentinel` a counter whose value is
    /// exactly 0.0 is reported as not found.
    ///
    /// # Errors
    /// `Gather`, `MissingMetric`, `LabelMismatch`, `CounterNotFound` or
    /// `ValueMismatch`.
    #[allow(clippy::float_cmp)]
    #[instrument(level = "debug", skip_all, fields(expected = expected_value))]
    pub fn check_counter_with_labels<S, C>(
        &self,
        source: &S,
        counter: &C,
        expected_value: f64,
        labels: &[LabelExpectation],
    ) -> Result<(), AssertionError>
    where
        S: MetricsSource + ?Sized,
        C: Collector + ?Sized,
    {
        let families = source.gather().map_err(|e| reject(e.into()))?;
        let shape = SnapshotShape::of(&families);
        let identity = counter_identity(counter);
        debug!(counter = %identity, ?shape, labels = labels.len(), "Checking labelled counter");

        let metric = match snapshot::first_metric(&families) {
            Some(metric) if shape.has_labelled_metric() => metric,
            _ => return Err(reject(missing(shape))),
        };

        let mut seen = None;
        for expected in labels {
            let Some(label) = expected.find_on(metric) else {
                continue;
            };
            seen = Some(counter_value(metric));
            if label.get_value() != expected.value {
                return Err(reject(AssertionError::LabelMismatch {
                    counter: identity,
                    expected: expected.to_string(),
                    actual: expectation::describe_label(label),
                }));
            }
        }

        let seen = match self.options.found_detection {
            FoundDetection::Sentinel => seen.filter(|value| *value != 0.0),
            FoundDetection::Explicit => seen,
        };

        match seen {
            None => Err(reject(AssertionError::CounterNotFound { counter: identity })),
            Some(actual) if actual != expected_value => {
                Err(reject(AssertionError::ValueMismatch {
                    counter: identity,
                    expected: expected_value,
                    actual,
                }))
            }
            Some(_) => Ok(()),
        }
    }

    /// Check that the counter has not been incremented.
    ///
    /// `not_expected_value` is never compared. Under
    /// `NotCalledScope::Registry` the labels are ignored too and the
    /// check passes only when the first family holds no labelled metric.
    /// Under `NotCalledScope::Labels` the counter's own family is looked
    /// up by name, wherever it sits in the snapshot.
    ///
    /// # Errors
    /// `Gather`, `UnexpectedMetric` or `UnexpectedSeries`.
    #[instrument(level = "debug", skip_all, fields(not_expected = not_expected_value))]
    pub fn check_counter_not_called<S, C>(
        &self,
        source: &S,
        counter: &C,
        not_expected_value: f64,
        labels: &[LabelExpectation],
    ) -> Result<(), AssertionError>
    where
        S: MetricsSource + ?Sized,
        C: Collector + ?Sized,
    {
        let families = source.gather().map_err(|e| reject(e.into()))?;
        let shape = SnapshotShape::of(&families);
        let identity = counter_identity(counter);
        debug!(
            counter = %identity,
            ?shape,
            scope = ?self.options.not_called_scope,
            "Checking counter was not called"
        );

        match self.options.not_called_scope {
            NotCalledScope::Registry if shape.has_labelled_metric() => {
                Err(reject(AssertionError::UnexpectedMetric {
                    families: shape.families,
                    metrics: shape.metrics,
                }))
            }
            NotCalledScope::Registry => Ok(()),
            NotCalledScope::Labels => {
                let names = counter_names(counter);
                let found = families
                    .iter()
                    .filter(|family| names.iter().any(|name| name == family.get_name()))
                    .flat_map(|family| family.get_metric().iter())
                    .find(|metric| expectation::all_satisfied(metric, labels));

                match found {
                    Some(metric) => Err(reject(AssertionError::UnexpectedSeries {
                        counter: identity,
                        labels: expectation::describe_all(labels),
                        value: counter_value(metric),
                    })),
                    None => Ok(()),
                }
            }
        }
    }

    /// Check the value of the first metric, ignoring labels.
    ///
    /// # Errors
    /// `Gather`, `MissingMetric` or `CountMismatch`.
    #[allow(clippy::float_cmp)]
    #[instrument(level = "debug", skip_all, fields(expected = expected_value))]
    pub fn check_single_counter<S, C>(
        &self,
        source: &S,
        counter: &C,
        expected_value: f64,
    ) -> Result<(), AssertionError>
    where
        S: MetricsSource + ?Sized,
        C: Collector + ?Sized,
    {
        let families = source.gather().map_err(|e| reject(e.into()))?;
        let shape = SnapshotShape::of(&families);
        let identity = counter_identity(counter);
        debug!(counter = %identity, ?shape, "Checking single counter");

        let Some(metric) = snapshot::first_metric(&families) else {
            return Err(reject(missing(shape)));
        };

        let actual = counter_value(metric);
        if actual != expected_value {
            return Err(reject(AssertionError::CountMismatch {
                counter: identity,
                expected: expected_value,
                actual,
            }));
        }
        Ok(())
    }

    /// Check the series of family `name` that carries every expected label.
    ///
    /// The series may carry extra labels. With no expected labels the
    /// first series of the family is used.
    ///
    /// # Errors
    /// `Gather`, `FamilyNotFound`, `SeriesNotFound` or `ValueMismatch`.
    #[allow(clippy::float_cmp)]
    #[instrument(level = "debug", skip_all, fields(name = name, expected = expected_value))]
    pub fn check_named_counter<S>(
        &self,
        source: &S,
        name: &str,
        expected_value: f64,
        labels: &[LabelExpectation],
    ) -> Result<(), AssertionError>
    where
        S: MetricsSource + ?Sized,
    {
        let families = source.gather().map_err(|e| reject(e.into()))?;
        debug!(families = families.len(), labels = labels.len(), "Checking named counter");

        let Some(family) = snapshot::find_family(&families, name) else {
            return Err(reject(AssertionError::FamilyNotFound {
                name: name.to_string(),
                present: snapshot::family_names(&families).join(", "),
            }));
        };

        let series = family.get_metric();
        let Some(metric) = series
            .iter()
            .find(|metric| expectation::all_satisfied(metric, labels))
        else {
            return Err(reject(AssertionError::SeriesNotFound {
                name: name.to_string(),
                expected: expectation::describe_all(labels),
                examined: series.len(),
            }));
        };

        let actual = counter_value(metric);
        if actual != expected_value {
            return Err(reject(AssertionError::ValueMismatch {
                counter: name.to_string(),
                expected: expected_value,
                actual,
            }));
        }
        Ok(())
    }
}

/// `CounterChecker::check_counter_with_labels` with default options.
///
/// # Errors
/// See `CounterChecker::check_counter_with_labels`.
pub fn check_counter_with_labels<S, C>(
    source: &S,
    counter: &C,
    expected_value: f64,
    labels: &[LabelExpectation],
) -> Result<(), AssertionError>
where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    CounterChecker::default().check_counter_with_labels(source, counter, expected_value, labels)
}

/// `CounterChecker::check_counter_not_called` with default options.
///
/// # Errors
/// See `CounterChecker::check_counter_not_called`.
pub fn check_counter_not_called<S, C>(
    source: &S,
    counter: &C,
    not_expected_value: f64,
    labels: &[LabelExpectation],
) -> Result<(), AssertionError>
where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    CounterChecker::default().check_counter_not_called(source, counter, not_expected_value, labels)
}

/// `CounterChecker::check_single_counter` with default options.
///
/// # Errors
/// See `CounterChecker::check_single_counter`.
pub fn check_single_counter<S, C>(
    source: &S,
    counter: &C,
    expected_value: f64,
) -> Result<(), AssertionError>
where
    S: MetricsSource + ?Sized,
    C: Collector + ?Sized,
{
    CounterChecker::default().check_single_counter(source, counter, expected_value)
}

/// `CounterChecker::check_named_counter` with default options.
///
/// # Errors
/// See `CounterChecker::check_named_counter`.
pub fn check_named_counter<S>(
    source: &S,
    name: &str,
    expected_value: f64,
    labels: &[LabelExpectation],
) -> Result<(), AssertionError>
where
    S: MetricsSource + ?Sized,
{
    CounterChecker::default().check_named_counter(source, name, expected_value, labels)
}

fn counter_value(metric: &Metric) -> f64 {
    metric.get_counter().get_value()
}

const fn missing(shape: SnapshotShape) -> AssertionError {
    AssertionError::MissingMetric {
        families: shape.families,
        metrics: shape.metrics,
    }
}

fn reject(err: AssertionError) -> AssertionError {
    warn!(error = %err, "Counter assertion failed");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GatherError;
    use prometheus::proto::{Counter, LabelPair, MetricFamily};
    use prometheus::{CounterVec, Opts};

    fn requests() -> CounterVec {
        CounterVec::new(Opts::new("http_requests_total", "Requests"), &["method"]).unwrap()
    }

    fn series(labels: &[(&str, &str)], value: f64) -> Metric {
        let pairs: Vec<LabelPair> = labels
            .iter()
            .map(|&(name, value)| {
                let mut pair = LabelPair::default();
                pair.set_name(name.to_string());
                pair.set_value(value.to_string());
                pair
            })
            .collect();
        let mut counter = Counter::default();
        counter.set_value(value);
        let mut metric = Metric::default();
        metric.set_label(pairs.into());
        metric.set_counter(counter);
        metric
    }

    fn family(name: &str, metrics: Vec<Metric>) -> MetricFamily {
        let mut family = MetricFamily::default();
        family.set_name(name.to_string());
        family.set_metric(metrics.into());
        family
    }

    fn get_requests(value: f64) -> Vec<MetricFamily> {
        vec![family("http_requests_total", vec![series(&[("method", "GET")], value)])]
    }

    struct Broken;

    impl MetricsSource for Broken {
        fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
            Err(GatherError::new("collector panicked"))
        }
    }

    #[test]
    fn test_matching_labels_and_value_pass() {
        let labels = LabelExpectation::from_pairs(&[("method", "GET")]);
        check_counter_with_labels(&get_requests(5.0), &requests(), 5.0, &labels).unwrap();
    }

    #[test]
    fn test_unknown_label_names_are_skipped() {
        let labels = LabelExpectation::from_pairs(&[("region", "eu"), ("method", "GET")]);
        check_counter_with_labels(&get_requests(5.0), &requests(), 5.0, &labels).unwrap();
    }

    #[test]
    fn test_no_known_labels_is_not_found() {
        let labels = LabelExpectation::from_pairs(&[("region", "eu")]);
        let err =
            check_counter_with_labels(&get_requests(5.0), &requests(), 5.0, &labels).unwrap_err();
        assert_eq!(
            err,
            AssertionError::CounterNotFound {
                counter: "http_requests_total".to_string()
            }
        );
    }

    #[test]
    fn test_first_mismatching_label_wins() {
        let snapshot = vec![family(
            "http_requests_total",
            vec![series(&[("code", "200"), ("method", "GET")], 1.0)],
        )];
        let labels = LabelExpectation::from_pairs(&[("method", "PUT"), ("code", "500")]);

        let err = check_counter_with_labels(&snapshot, &requests(), 1.0, &labels).unwrap_err();
        assert!(matches!(
            err,
            AssertionError::LabelMismatch { ref expected, .. } if expected.contains("PUT")
        ));
    }

    #[test]
    fn test_unlabelled_metric_is_missing() {
        let snapshot = vec![family("http_requests_total", vec![series(&[], 3.0)])];
        let err = check_counter_with_labels(&snapshot, &requests(), 3.0, &[]).unwrap_err();
        assert_eq!(
            err,
            AssertionError::MissingMetric {
                families: 1,
                metrics: 1
            }
        );
    }

    #[test]
    fn test_zero_value_sentinel_and_explicit() {
        let labels = LabelExpectation::from_pairs(&[("method", "GET")]);

        let err =
            check_counter_with_labels(&get_requests(0.0), &requests(), 0.0, &labels).unwrap_err();
        assert!(matches!(err, AssertionError::CounterNotFound { .. }));

        CounterChecker::new(AssertOptions::explicit())
            .check_counter_with_labels(&get_requests(0.0), &requests(), 0.0, &labels)
            .unwrap();
    }

    #[test]
    fn test_not_called_scopes() {
        let snapshot = get_requests(2.0);
        let post = LabelExpectation::from_pairs(&[("method", "POST")]);

        let err = check_counter_not_called(&snapshot, &requests(), 0.0, &post).unwrap_err();
        assert_eq!(
            err,
            AssertionError::UnexpectedMetric {
                families: 1,
                metrics: 1
            }
        );

        let by_labels = CounterChecker::new(
            AssertOptions::default().with_not_called_scope(NotCalledScope::Labels),
        );
        by_labels
            .check_counter_not_called(&snapshot, &requests(), 0.0, &post)
            .unwrap();
        let get = [LabelExpectation::new("method", "GET")];
        let err = by_labels
            .check_counter_not_called(&snapshot, &requests(), 0.0, &get)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Prometheus counter http_requests_total expected no series with labels [name: "method" value:"GET"]; got one with value 2.000000"#
        );
    }

    #[test]
    fn test_not_called_labels_ignore_other_families() {
        let snapshot = vec![
            family("a_total", vec![series(&[("method", "GET")], 1.0)]),
            family("http_requests_total", vec![series(&[("method", "POST")], 1.0)]),
        ];
        let by_labels = CounterChecker::new(
            AssertOptions::default().with_not_called_scope(NotCalledScope::Labels),
        );

        let get = [LabelExpectation::new("method", "GET")];
        by_labels
            .check_counter_not_called(&snapshot, &requests(), 0.0, &get)
            .unwrap();
    }

    #[test]
    fn test_family_without_metrics_is_missing() {
        let snapshot = vec![family("http_requests_total", vec![])];
        let expected = AssertionError::MissingMetric {
            families: 1,
            metrics: 0,
        };

        assert_eq!(
            check_counter_with_labels(
                &snapshot,
                &requests(),
                1.0,
                &LabelExpectation::from_pairs(&[("method", "GET")])
            ),
            Err(expected.clone())
        );
        assert_eq!(check_single_counter(&snapshot, &requests(), 1.0), Err(expected));
        check_counter_not_called(&snapshot, &requests(), 1.0, &[]).unwrap();
    }

    #[test]
    fn test_not_called_passes_for_unlabelled_metric() {
        let snapshot = vec![family("jobs_total", vec![series(&[], 4.0)])];
        check_counter_not_called(&snapshot, &requests(), 4.0, &[]).unwrap();
    }

    #[test]
    fn test_single_counter_on_empty_snapshot_reports_zeros() {
        let empty: Vec<MetricFamily> = Vec::new();
        let err = check_single_counter(&empty, &requests(), 1.0).unwrap_err();
        assert_eq!(
            err,
            AssertionError::MissingMetric {
                families: 0,
                metrics: 0
            }
        );
    }

    #[test]
    fn test_single_counter_ignores_labels() {
        check_single_counter(&get_requests(7.0), &requests(), 7.0).unwrap();
        let err = check_single_counter(&get_requests(7.0), &requests(), 8.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Prometheus counter http_requests_total expected count 8.000000; got 7.000000"
        );
    }

    #[test]
    fn test_named_counter_selects_series() {
        let snapshot = vec![
            family("a_total", vec![series(&[("k", "v")], 1.0)]),
            family(
                "http_requests_total",
                vec![
                    series(&[("code", "200"), ("method", "GET")], 10.0),
                    series(&[("code", "500"), ("method", "GET")], 2.0),
                ],
            ),
        ];

        check_named_counter(
            &snapshot,
            "http_requests_total",
            2.0,
            &LabelExpectation::from_pairs(&[("code", "500")]),
        )
        .unwrap();
        check_named_counter(&snapshot, "http_requests_total", 10.0, &[]).unwrap();

        let err = check_named_counter(&snapshot, "b_total", 1.0, &[]).unwrap_err();
        assert_eq!(
            err,
            AssertionError::FamilyNotFound {
                name: "b_total".to_string(),
                present: "a_total, http_requests_total".to_string()
            }
        );

        let err = check_named_counter(
            &snapshot,
            "http_requests_total",
            1.0,
            &LabelExpectation::from_pairs(&[("code", "404")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AssertionError::SeriesNotFound { examined: 2, .. }
        ));
    }

    #[test]
    fn test_gather_failure_surfaces_from_every_check() {
        let counter = requests();
        let expected = AssertionError::Gather(GatherError::new("collector panicked"));

        assert_eq!(
            check_counter_with_labels(&Broken, &counter, 1.0, &[]),
            Err(expected.clone())
        );
        assert_eq!(
            check_counter_not_called(&Broken, &counter, 1.0, &[]),
            Err(expected.clone())
        );
        assert_eq!(check_single_counter(&Broken, &counter, 1.0), Err(expected.clone()));
        assert_eq!(
            check_named_counter(&Broken, "http_requests_total", 1.0, &[]),
            Err(expected)
        );
    }
}
