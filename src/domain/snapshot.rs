//! Snapshot Shape - Counts Observed in a Gathered Registry
//!
//! Every check starts by measuring the snapshot: how many families,
//! how many metrics in the first family, how many labels on the first
//! metric. Counts are computed with guarded lookups so an empty
//! snapshot reports zeros instead of indexing out of range.

use prometheus::proto::{Metric, MetricFamily};

/// Observed counts of a gathered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotShape {
    /// Number of metric families in the snapshot.
    pub families: usize,
    /// Number of metrics in the first family (0 when there is none).
    pub metrics: usize,
    /// Number of labels on the first metric (0 when there is none).
    pub labels: usize,
}

impl SnapshotShape {
    /// Measure a gathered snapshot.
    pub fn of(families: &[MetricFamily]) -> Self {
        let metrics = families.first().map_or(0, |f| f.get_metric().len());
        let labels = first_metric(families).map_or(0, |m| m.get_label().len());
        Self {
            families: families.len(),
            metrics,
            labels,
        }
    }

    /// At least one family holding at least one metric.
    pub const fn has_metric(&self) -> bool {
        self.families > 0 && self.metrics > 0
    }

    /// At least one family holding a metric that carries labels.
    pub const fn has_labelled_metric(&self) -> bool {
        self.has_metric() && self.labels > 0
    }
}

/// First metric of the first family, if any.
pub fn first_metric(families: &[MetricFamily]) -> Option<&Metric> {
    families.first().and_then(|f| f.get_metric().first())
}

/// Family with the given fully qualified name, if any.
pub fn find_family<'s>(families: &'s [MetricFamily], name: &str) -> Option<&'s MetricFamily> {
    families.iter().find(|f| f.get_name() == name)
}

/// Names of every family in the snapshot, in gather order.
pub fn family_names(families: &[MetricFamily]) -> Vec<&str> {
    families.iter().map(MetricFamily::get_name).collect()
}
