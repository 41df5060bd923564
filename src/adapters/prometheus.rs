//! Prometheus Adapters - Registry Snapshots and Counter Identity
//!
//! Implements `MetricsSource` for `prometheus::Registry` and for the
//! process-global default registry, and renders collectors by their
//! fully qualified metric names for failure messages.

use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::Registry;
use tracing::trace;

use crate::ports::{GatherError, MetricsSource};

impl MetricsSource for Registry {
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
        let families = Registry::gather(self);
        trace!(families = families.len(), "Gathered registry snapshot");
        Ok(families)
    }
}

/// The process-global registry behind `prometheus::register_*!` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegistry;

impl MetricsSource for DefaultRegistry {
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
        let families = prometheus::gather();
        trace!(
            families = families.len(),
            "Gathered default registry snapshot"
        );
        Ok(families)
    }
}

/// Fully qualified metric names of every descriptor of `counter`.
pub fn counter_names<C: Collector + ?Sized>(counter: &C) -> Vec<String> {
    counter
        .desc()
        .into_iter()
        .map(|desc| desc.fq_name.clone())
        .collect()
}

/// Human-readable identity of a collector: its metric names.
///
/// A collector exposing several descriptors yields a comma-separated
/// list. An empty collector renders as `<unnamed>`.
pub fn counter_identity<C: Collector + ?Sized>(counter: &C) -> String {
    let names = counter_names(counter);
    if names.is_empty() {
        "<unnamed>".to_string()
    } else {
        names.join(", ")
    }
}
