//! Starfield error types.

/// Errors raised while building or reconfiguring a starfield.
///
/// All of these are construction-time failures. Projection itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
    /// A constant that must be strictly positive was zero, negative, or not finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A constant that must be zero or greater was negative or not finite.
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// The field would contain no particles.
    #[error("particle_count must be at least 1")]
    EmptyField,

    /// A `(min, max)` sampling range is inverted or out of bounds.
    #[error("invalid {name} range: [{min}, {max}]")]
    InvalidRange {
        /// Field name.
        name: &'static str,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// The opacity curve breaks the fade-in/fade-out boundary rules.
    #[error("invalid opacity curve: {0}")]
    InvalidOpacityCurve(String),

    /// Viewport dimensions must be positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// No preset is registered under this name.
    #[error("unknown starfield preset: {0}")]
    UnknownPreset(String),

    /// Failed to parse a RON starfield description.
    #[error("failed to parse starfield config: {0}")]
    Parse(#[source] ron::error::SpannedError),
}
