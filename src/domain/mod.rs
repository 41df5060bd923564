//! Domain layer - Snapshot inspection primitives.
//!
//! Pure functions over gathered `prometheus::proto` values. Nothing
//! here gathers, logs, or fails a test.

pub mod expectation;
pub mod snapshot;

// Re-export core types for convenience
pub use expectation::LabelExpectation;
pub use snapshot::SnapshotShape;
