//! # Grain Geometry
//!
//! Top-down grain outlines from cuboid particle records.
//! Many small axis-aligned cuboids share a grain index; this crate merges
//! their rectangular footprints into one polygon (or several disjoint
//! polygons) per grain.
//!
//! ## Architecture
//!
//! ```text
//! cuboid rows → generate_footprints → assemble_grains → GrainAssembly
//! ```
//!
//! ## Algorithms
//!
//! - **Dilation**: mitred outward offset with square caps for slivers
//! - **Union**: cascaded pairwise boolean union (`geo`)
//! - **Representative point**: scanline interior point (`geo`)
//!
//! ## Usage
//!
//! ```rust
//! use grain_geometry::{assemble_grains, generate_footprints, AssemblyOptions};
//!
//! // x y z dx dy dz grain
//! let cuboids = vec![
//!     [1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 4.0],
//!     [3.0, 1.0, 0.0, 1.0, 1.0, 1.0, 4.0],
//!     [9.0, 9.0, 0.0, 0.5, 0.5, 0.5, 6.0],
//! ];
//! let footprints = generate_footprints(&cuboids)?;
//! let options = AssemblyOptions::default().with_centroids(true);
//! let grains = assemble_grains(&cuboids, &footprints, None, None, &options)?;
//!
//! assert_eq!(grains.grain_ids().collect::<Vec<_>>(), vec![4, 6]);
//! let outline = grains.boundaries.get(4).unwrap();
//! assert_eq!(outline.first(), outline.last());
//! # Ok::<(), grain_geometry::GrainError>(())
//! ```

pub mod assembler;
pub mod cuboid;
pub mod error;
pub mod footprint;
pub mod grain;
pub mod ops;

pub use assembler::{assemble_grains, AssemblyOptions, GrainAssembly};
pub use config::constants::GlobalConfig;
pub use cuboid::{Cuboid, GrainId};
pub use error::{GrainError, Result};
pub use footprint::{generate_footprints, Footprint};
pub use grain::{GrainGeometry, GrainTable};
