//! Detection context configuration

use serde::Deserialize;

/// How `F64` NaN fields compare across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// NaN is identical to NaN, so a NaN field is not dirty on every pass.
    #[default]
    Identical,

    /// IEEE semantics: NaN never equals anything, itself included.
    Distinct,
}

/// Configuration for detection passes.
///
/// Passed to a comparator at construction and consulted on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DetectContext {
    /// Emit a trace event for each dirty field
    pub trace: bool,

    /// NaN comparison policy for float fields
    pub nan_policy: NanPolicy,
}

impl DetectContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with per-field tracing enabled.
    pub fn with_trace() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Create a context with an explicit NaN policy.
    pub fn with_nan_policy(nan_policy: NanPolicy) -> Self {
        Self {
            nan_policy,
            ..Default::default()
        }
    }
}
