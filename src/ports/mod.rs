//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the checks require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `MetricsSource`: point-in-time registry snapshots

pub mod metrics_source;

pub use metrics_source::{GatherError, MetricsSource};
