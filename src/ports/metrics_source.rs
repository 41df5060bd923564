//! Metrics Source Port - Point-in-Time Registry Snapshots
//!
//! Defines the read-only interface the checks need from a metrics
//! registry: gather every registered family right now.

use std::sync::Arc;

use prometheus::proto::MetricFamily;
use thiserror::Error;

/// Failure to produce a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatherError {
    /// Underlying failure, rendered.
    pub message: String,
}

impl GatherError {
    /// Create a gather error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<prometheus::Error> for GatherError {
    fn from(err: prometheus::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Anything that can hand out a snapshot of metric families.
///
/// Implementors must not mutate the registry while gathering. The
/// returned families are an owned copy; later increments on the live
/// registry do not show up in it.
pub trait MetricsSource: Send + Sync {
    /// Gather every registered metric family.
    ///
    /// # Errors
    /// Returns `GatherError` when the snapshot cannot be produced.
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError>;
}

impl<T: MetricsSource + ?Sized> MetricsSource for &T {
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
        (**self).gather()
    }
}

impl<T: MetricsSource + ?Sized> MetricsSource for Arc<T> {
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
        (**self).gather()
    }
}

/// A pre-gathered snapshot acts as its own source.
impl MetricsSource for Vec<MetricFamily> {
    fn gather(&self) -> Result<Vec<MetricFamily>, GatherError> {
        Ok(self.clone())
    }
}
