//! Centralized configuration values shared across the grain geometry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for collinearity and zero-length checks inside the dilation step.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default outward dilation applied to every footprint before unioning.
///
/// Axis-aligned rectangles that share an edge exactly leave seam artifacts
/// in the union. Growing each rectangle by this distance makes neighbours
/// overlap so the union closes cleanly. Must stay small relative to the
/// smallest cuboid half-extent.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BUFFER_TOLERANCE;
/// assert_eq!(DEFAULT_BUFFER_TOLERANCE, 1.0e-5);
/// ```
pub const DEFAULT_BUFFER_TOLERANCE: f64 = 1.0e-5;

/// Ratio between the mitre length and the dilation distance above which a
/// corner is bevelled instead of mitred.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MITRE_LIMIT;
/// assert!(DEFAULT_MITRE_LIMIT >= 1.0);
/// ```
pub const DEFAULT_MITRE_LIMIT: f64 = 5.0;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Minimum number of columns of a cuboid row: `x y z dx dy dz`.
///
/// # Examples
/// ```
/// use config::constants::MIN_CUBOID_COLUMNS;
/// let row = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
/// assert!(row.len() >= MIN_CUBOID_COLUMNS);
/// ```
pub const MIN_CUBOID_COLUMNS: usize = 6;

/// Column of a cuboid row holding the grain index.
///
/// # Examples
/// ```
/// use config::constants::GRAIN_ID_COLUMN;
/// let row = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 3.0];
/// assert_eq!(row[GRAIN_ID_COLUMN] as i64, 3);
/// ```
pub const GRAIN_ID_COLUMN: usize = 6;

/// Number of corners of a cuboid footprint.
pub const FOOTPRINT_CORNERS: usize = 4;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunables of the grain assembly step.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.buffer_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Outward dilation applied to each footprint before unioning.
    pub buffer_tolerance: f64,
    /// Mitre limit of the dilation joins.
    pub mitre_limit: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and mitre limit.
    ///
    /// A zero tolerance is accepted and disables dilation.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 2.0).expect("valid config");
    /// assert_eq!(cfg.mitre_limit, 2.0);
    /// ```
    pub fn new(buffer_tolerance: f64, mitre_limit: f64) -> Result<Self, ConfigError> {
        if !buffer_tolerance.is_finite() || buffer_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(buffer_tolerance));
        }
        if !mitre_limit.is_finite() || mitre_limit < 1.0 {
            return Err(ConfigError::InvalidMitreLimit(mitre_limit));
        }
        Ok(Self {
            buffer_tolerance,
            mitre_limit,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            buffer_tolerance: DEFAULT_BUFFER_TOLERANCE,
            mitre_limit: DEFAULT_MITRE_LIMIT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the buffer tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the mitre limit is below one or not finite.
    InvalidMitreLimit(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "buffer tolerance must be finite and >= 0: {value}")
            }
            ConfigError::InvalidMitreLimit(value) => {
                write!(f, "mitre limit must be finite and >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// Used by the dilation step for repeated points and parallel edges.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
