//! Label Expectations - Caller-Owned Label Assertions
//!
//! A test states which `(label name, label value)` pairs the counter
//! under test must carry. Expectations are built once per assertion
//! and never mutated.

use std::fmt;

use prometheus::proto::{LabelPair, Metric};

/// One expected `(name, value)` label pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelExpectation {
    /// Label name, e.g. `method`.
    pub name: String,
    /// Expected label value, e.g. `GET`.
    pub value: String,
}

impl LabelExpectation {
    /// Create an expectation for a single label.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build an ordered list of expectations from string pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Self> {
        pairs.iter().map(|&(name, value)| Self::new(name, value)).collect()
    }

    /// Find the label on `metric` sharing this expectation's name.
    pub fn find_on<'m>(&self, metric: &'m Metric) -> Option<&'m LabelPair> {
        metric
            .get_label()
            .iter()
            .find(|label| label.get_name() == self.name)
    }

    /// Whether `metric` carries this exact name/value pair.
    pub fn is_satisfied_by(&self, metric: &Metric) -> bool {
        self.find_on(metric)
            .is_some_and(|label| label.get_value() == self.value)
    }
}

impl From<(&str, &str)> for LabelExpectation {
    fn from((name, value): (&str, &str)) -> Self {
        Self::new(name, value)
    }
}

impl fmt::Display for LabelExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[name: \"{}\" value:\"{}\"]", self.name, self.value)
    }
}

/// Whether `metric` carries every pair in `expectations`.
///
/// Extra labels on the metric are allowed. An empty expectation list
/// matches any metric.
pub fn all_satisfied(metric: &Metric, expectations: &[LabelExpectation]) -> bool {
    expectations.iter().all(|e| e.is_satisfied_by(metric))
}

/// Render a label the way failure messages quote it.
pub fn describe_label(label: &LabelPair) -> String {
    format!(
        "name: \"{}\" value: \"{}\"",
        label.get_name(),
        label.get_value()
    )
}

/// Render a list of expectations for failure messages.
pub fn describe_all(expectations: &[LabelExpectation]) -> String {
    expectations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
