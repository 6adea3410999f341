//! # Polygon Operations
//!
//! Geometry kernels used by the grain assembler: dilation, union and
//! validation of the union result.

pub mod offset;
pub mod union;
pub mod validate;

pub use offset::dilate;
pub use union::cascaded_union;
pub use validate::{validate_coverage, validate_union};
