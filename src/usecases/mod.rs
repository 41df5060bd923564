//! Use Cases Layer - Counter Assertions
//!
//! `counter_checks` returns `Result`s; `assertions` turns failures into
//! test panics.

pub mod assertions;
pub mod counter_checks;

pub use assertions::{
    assert_counter_not_called, assert_counter_with_labels, assert_named_counter,
    assert_single_counter, require,
};
pub use counter_checks::{
    check_counter_not_called, check_counter_with_labels, check_named_counter,
    check_single_counter, CounterChecker,
};
