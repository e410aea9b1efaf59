//! Configuration errors shared by the reflow and placement models.
//!
//! Every variant is a caller mistake (a value outside what the selectors allow).
//! Nothing here is transient; callers validate input instead of retrying.

use std::fmt;

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Circle decompositions need an even number of wedges (two equal halves).
    OddSegmentCount { segments: usize },
    /// Fewer wedges than the minimum for the layout.
    TooFewSegments { segments: usize, min: usize },
    NonPositiveRadius { radius: f64 },
    NonPositiveLength { length: f64 },
    NonPositiveSpacing { spacing: f64 },
    NonPositiveSeparation { separation: f64 },
    /// `length / spacing` is non-finite or exceeds the placement cap.
    TooManyGaps { quotient: f64, max: usize },
    /// A coordinate or scalar was NaN or infinite.
    NonFinite { what: &'static str },
    /// Grouping and merged layout rules do not belong together.
    IncompatibleLayout { reason: String },
    InvalidStagePlan { reason: String },
}

impl ConfigError {
    pub(crate) fn incompatible(reason: impl Into<String>) -> Self {
        Self::IncompatibleLayout {
            reason: reason.into(),
        }
    }

    pub(crate) fn stage_plan(reason: impl Into<String>) -> Self {
        Self::InvalidStagePlan {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddSegmentCount { segments } => {
                write!(f, "segment count must be even, got {segments}")
            }
            Self::TooFewSegments { segments, min } => {
                write!(f, "segment count must be >= {min}, got {segments}")
            }
            Self::NonPositiveRadius { radius } => write!(f, "radius must be > 0, got {radius}"),
            Self::NonPositiveLength { length } => {
                write!(f, "total length must be > 0, got {length}")
            }
            Self::NonPositiveSpacing { spacing } => {
                write!(f, "spacing must be > 0, got {spacing}")
            }
            Self::NonPositiveSeparation { separation } => {
                write!(f, "separation distance must be > 0, got {separation}")
            }
            Self::TooManyGaps { quotient, max } => {
                write!(f, "length / spacing = {quotient} exceeds {max} intervals")
            }
            Self::NonFinite { what } => write!(f, "{what} must be finite"),
            Self::IncompatibleLayout { reason } => write!(f, "incompatible layout: {reason}"),
            Self::InvalidStagePlan { reason } => write!(f, "invalid stage plan: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rejects NaN/inf before any sign check so the error names the real problem.
pub(crate) fn require_positive(
    value: f64,
    what: &'static str,
    err: impl FnOnce(f64) -> ConfigError,
) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { what });
    }
    if value <= 0.0 {
        return Err(err(value));
    }
    Ok(value)
}
