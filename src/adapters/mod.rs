//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! metrics registries.
//!
//! Adapter categories:
//! - `prometheus`: `prometheus::Registry` and the global default registry

pub mod prometheus;

pub use self::prometheus::{counter_identity, counter_names, DefaultRegistry};
