//! # Config Crate
//!
//! Centralized configuration constants for the grain geometry pipeline.
//! Tolerances, the column layout of cuboid rows and the mitre limit of the
//! dilation step are defined here so the geometry crate never carries literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_BUFFER_TOLERANCE, EPSILON, GRAIN_ID_COLUMN};
//!
//! // The default dilation is far above numeric noise
//! assert!(DEFAULT_BUFFER_TOLERANCE > EPSILON);
//!
//! // Grain ids live after the six geometric columns
//! let row = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 7.0];
//! assert_eq!(row[GRAIN_ID_COLUMN], 7.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects unusable tolerances
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
