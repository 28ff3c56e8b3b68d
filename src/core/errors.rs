//! Validation errors reported by the estimation entry points.

/// Errors detected synchronously at the entry points, before any sampling takes place.
///
/// Invalid inputs are never clamped or replaced by defaults; the offending request is rejected
/// as a whole and no partial work is performed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A shape parameter is not strictly positive or not finite.
    #[error("shape parameter `{name}` must be strictly positive, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, converted to `f64` for reporting.
        value: f64,
    },

    /// A requested sample count is zero.
    #[error("sample count must be strictly positive")]
    InvalidSampleCount,

    /// An empty list of sample counts was passed to the convergence analyzer.
    #[error("at least one sample count is required")]
    EmptySampleCounts,
}
