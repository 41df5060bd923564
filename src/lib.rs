//! promcheck — Prometheus Counter Assertions for Tests
//!
//! Gathers a registry snapshot and asserts a counter's value and
//! labels in one call.
//!
//! ```
//! use prometheus::{CounterVec, Opts, Registry};
//! use promcheck::{assert_counter_with_labels, LabelExpectation};
//!
//! let registry = Registry::new();
//! let requests = CounterVec::new(Opts::new("http_requests_total", "Requests"), &["method"]).unwrap();
//! registry.register(Box::new(requests.clone())).unwrap();
//! requests.with_label_values(&["GET"]).inc_by(5.0);
//!
//! assert_counter_with_labels(
//!     &registry,
//!     &requests,
//!     5.0,
//!     &LabelExpectation::from_pairs(&[("method", "GET")]),
//! );
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ports;
pub mod usecases;

pub use adapters::DefaultRegistry;
pub use config::{AssertOptions, FoundDetection, NotCalledScope};
pub use domain::LabelExpectation;
pub use error::AssertionError;
pub use ports::{GatherError, MetricsSource};
pub use usecases::{
    assert_counter_not_called, assert_counter_with_labels, assert_named_counter,
    assert_single_counter, check_counter_not_called, check_counter_with_labels,
    check_named_counter, check_single_counter, require, CounterChecker,
};
