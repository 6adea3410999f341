//! # Error Types
//!
//! Error types for the grain pipeline. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - No partial results: a failing grain fails the whole call
//! - Errors include the grain index or row index for debugging

use crate::cuboid::GrainId;
use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building grain geometries.
///
/// ## Example
///
/// ```rust
/// use grain_geometry::{generate_footprints, GrainError};
///
/// let rows = vec![vec![0.0, 0.0, 0.0]];
/// match generate_footprints(&rows) {
///     Err(GrainError::Shape { message }) => assert!(message.contains("row 0")),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Error)]
pub enum GrainError {
    /// Malformed input shape.
    ///
    /// Raised for rows with too few columns, mismatched input lengths,
    /// duplicated requested grain ids and grain ids that select nothing.
    #[error("Shape error: {message}")]
    Shape {
        /// Description of the offending input
        message: String,
    },

    /// Dilation or union produced an invalid or empty geometry.
    #[error("Geometry error in grain {grain}: {message}")]
    Geometry {
        /// Grain whose geometry failed
        grain: GrainId,
        /// Description of the defect
        message: String,
    },

    /// Invalid tolerance or mitre limit.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GrainError {
    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Creates a geometry error for the given grain.
    pub fn geometry(grain: GrainId, message: impl Into<String>) -> Self {
        Self::Geometry {
            grain,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for grain operations.
pub type Result<T> = std::result::Result<T, GrainError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let shape = GrainError::shape("row 3 has 4 columns");
        assert!(shape.to_string().contains("Shape error"));
        assert!(shape.to_string().contains("row 3"));

        let geom = GrainError::geometry(42, "union is empty");
        assert!(geom.to_string().contains("grain 42"));
        assert!(geom.to_string().contains("union is empty"));
    }

    /// Config errors convert through `?`.
    #[test]
    fn test_config_error_conversion() {
        fn fails() -> Result<()> {
            Err::<(), _>(ConfigError::InvalidTolerance(-1.0))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GrainError::Config(_))));
    }

    /// Test error types are Send + Sync so rayon workers can return them.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrainError>();
    }
}
