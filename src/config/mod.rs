//! Configuration Module - Assertion Behaviour Options
//!
//! Selects between the compatible check semantics and the tightened
//! ones. Options deserialize from TOML; every field has a default so
//! an empty file yields the compatible behaviour.

pub mod loader;

use serde::Deserialize;

/// Options shared by every counter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertOptions {
    /// How the labelled check decides a counter was seen.
    #[serde(default)]
    pub found_detection: FoundDetection,
    /// What the not-called check compares.
    #[serde(default)]
    pub not_called_scope: NotCalledScope,
}

impl AssertOptions {
    /// Compatible defaults with explicit found detection.
    pub const fn explicit() -> Self {
        Self {
            found_detection: FoundDetection::Explicit,
            not_called_scope: NotCalledScope::Registry,
        }
    }

    /// Override the found detection mode.
    #[must_use]
    pub const fn with_found_detection(mut self, mode: FoundDetection) -> Self {
        self.found_detection = mode;
        self
    }

    /// Override the not-called scope.
    #[must_use]
    pub const fn with_not_called_scope(mut self, scope: NotCalledScope) -> Self {
        self.not_called_scope = scope;
        self
    }
}

/// Found detection for the labelled check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundDetection {
    /// A tracked value of 0.0 means "not found". Zero-valued counters
    /// fail with `CounterNotFound` even when their labels match.
    #[default]
    Sentinel,
    /// Track "seen" separately from the value.
    Explicit,
}

/// Scope of the not-called check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotCalledScope {
    /// Pass only when the first family has no labelled metric; the
    /// label arguments are ignored.
    #[default]
    Registry,
    /// Fail only when a metric of the counter's own family carries
    /// every expected label pair.
    Labels,
}
