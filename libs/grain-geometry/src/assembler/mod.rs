//! # Grain Assembler
//!
//! Groups footprints by grain index and merges each group into one grain
//! outline.
//!
//! ## Pipeline
//!
//! ```text
//! for each requested grain g (in request order):
//!     select footprints with id == g (input order)
//!       ↓
//!     dilate each footprint (mitred joins, square caps)
//!       ↓
//!     cascaded union
//!       ↓
//!     validate, check every footprint lies inside → GrainGeometry
//!
//! then for each grain: representative point (optional), outer rings
//! ```
//!
//! Grains are independent, so the union loop can run on rayon's pool.
//! Results are collected in request order either way, and the first failing
//! grain in that order decides the returned error.


use crate::cuboid::{self, GrainId};
use crate::error::{GrainError, Result};
use crate::footprint::Footprint;
use crate::grain::{GrainGeometry, GrainTable};
use crate::ops::{cascaded_union, dilate, validate_coverage, validate_union};
use config::constants::GlobalConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument, trace};

// =============================================================================
// OPTIONS
// =============================================================================

/// Tunables of [`assemble_grains`].
///
/// ## Example
///
/// ```rust
/// use grain_geometry::AssemblyOptions;
///
/// let options = AssemblyOptions::default()
///     .with_centroids(true)
///     .buffer_tolerance(1e-6);
/// assert!(options.with_centroids);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyOptions {
    /// Outward dilation applied to each footprint before unioning.
    pub buffer_tolerance: f64,
    /// Mitre limit of the dilation joins.
    pub mitre_limit: f64,
    /// Also compute one representative interior point per grain.
    pub with_centroids: bool,
    /// Union grains on rayon's thread pool.
    pub parallel: bool,
}

impl AssemblyOptions {
    /// Options taking their tolerances from a validated configuration.
    #[must_use]
    pub fn from_config(config: GlobalConfig) -> Self {
        Self {
            buffer_tolerance: config.buffer_tolerance,
            mitre_limit: config.mitre_limit,
            with_centroids: false,
            parallel: false,
        }
    }

    /// Sets the dilation distance.
    #[must_use]
    pub fn buffer_tolerance(mut self, tolerance: f64) -> Self {
        self.buffer_tolerance = tolerance;
        self
    }

    /// Sets the mitre limit.
    #[must_use]
    pub fn mitre_limit(mut self, limit: f64) -> Self {
        self.mitre_limit = limit;
        self
    }

    /// Enables or disables representative points.
    #[must_use]
    pub fn with_centroids(mut self, enabled: bool) -> Self {
        self.with_centroids = enabled;
        self
    }

    /// Enables or disables the parallel union loop.
    #[must_use]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    fn config(&self) -> Result<GlobalConfig> {
        Ok(GlobalConfig::new(self.buffer_tolerance, self.mitre_limit)?)
    }
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self::from_config(GlobalConfig::default())
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Output of [`assemble_grains`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrainAssembly {
    /// One geometry per processed grain, in request order.
    pub geometries: GrainTable<GrainGeometry>,
    /// Stacked outer rings per grain.
    pub boundaries: GrainTable<Vec<[f64; 2]>>,
    /// Representative interior point per grain, when requested.
    pub centroids: Option<GrainTable<[f64; 2]>>,
}

impl GrainAssembly {
    /// Geometry of `grain`, if it was processed.
    #[must_use]
    pub fn geometry(&self, grain: GrainId) -> Option<&GrainGeometry> {
        self.geometries.get(grain)
    }

    /// Processed grain ids in order.
    pub fn grain_ids(&self) -> impl Iterator<Item = GrainId> + '_ {
        self.geometries.keys()
    }

    /// Number of processed grains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// True when no grain was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Merges footprints sharing a grain index into grain outlines.
///
/// # Arguments
///
/// * `cuboids` - Cuboid rows, index-aligned with `footprints`
/// * `footprints` - Output of [`generate_footprints`](crate::generate_footprints)
/// * `grain_ids` - Per-row grain ids; read from column 6 of `cuboids` when `None`
/// * `unique_grain_ids` - Grains to process, in order; all grains sorted
///   ascending when `None`
/// * `options` - Dilation, centroid and parallelism settings
///
/// # Errors
///
/// - [`GrainError::Shape`] for mismatched lengths, missing grain columns,
///   duplicated requested ids, or a requested id matching no footprint
/// - [`GrainError::Geometry`] when a union is empty or invalid, or when a
///   footprint does not lie inside its grain
/// - [`GrainError::Config`] for a negative tolerance or a mitre limit below one
///
/// # Example
///
/// ```rust
/// use grain_geometry::{assemble_grains, generate_footprints, AssemblyOptions};
///
/// let cuboids = vec![
///     [1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
///     [3.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
/// ];
/// let footprints = generate_footprints(&cuboids).unwrap();
/// let grains = assemble_grains(&cuboids, &footprints, None, None, &AssemblyOptions::default())
///     .unwrap();
/// assert_eq!(grains.geometry(0).unwrap().component_count(), 1);
/// ```
#[instrument(skip_all, fields(cuboids = cuboids.len(), parallel = options.parallel))]
pub fn assemble_grains<R: AsRef<[f64]>>(
    cuboids: &[R],
    footprints: &[Footprint],
    grain_ids: Option<&[GrainId]>,
    unique_grain_ids: Option<&[GrainId]>,
    options: &AssemblyOptions,
) -> Result<GrainAssembly> {
    let config = options.config()?;

    if cuboids.len() != footprints.len() {
        return Err(GrainError::shape(format!(
            "{} cuboids but {} footprints",
            cuboids.len(),
            footprints.len()
        )));
    }

    let ids: Cow<'_, [GrainId]> = match grain_ids {
        Some(ids) if ids.len() != cuboids.len() => {
            return Err(GrainError::shape(format!(
                "{} cuboids but {} grain ids",
                cuboids.len(),
                ids.len()
            )));
        }
        Some(ids) => Cow::Borrowed(ids),
        None => Cow::Owned(cuboid::grain_ids(cuboids)?),
    };

    let requested: Vec<GrainId> = match unique_grain_ids {
        Some(requested) => {
            check_unique(requested)?;
            requested.to_vec()
        }
        None => ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect(),
    };

    let members = group_members(&ids, &requested);
    debug!(grains = requested.len(), "Assembling grains");

    let union_one = |grain: &GrainId| -> Result<GrainGeometry> {
        let indices = members.get(grain).map(Vec::as_slice).unwrap_or_default();
        union_grain(*grain, indices, footprints, &config)
    };

    let geometries: Vec<GrainGeometry> = if options.parallel {
        requested
            .par_iter()
            .map(union_one)
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<_>>()?
    } else {
        requested.iter().map(union_one).collect::<Result<_>>()?
    };

    let mut table = GrainTable::with_capacity(requested.len());
    let mut boundaries = GrainTable::with_capacity(requested.len());
    let mut centroids = options
        .with_centroids
        .then(|| GrainTable::with_capacity(requested.len()));

    for (grain, geometry) in requested.into_iter().zip(geometries) {
        if let Some(centroids) = centroids.as_mut() {
            centroids.insert(grain, geometry.representative_point(grain)?)?;
        }
        boundaries.insert(grain, geometry.exterior_coords())?;
        table.insert(grain, geometry)?;
    }

    Ok(GrainAssembly {
        geometries: table,
        boundaries,
        centroids,
    })
}

/// Fails when a requested grain id appears twice.
fn check_unique(requested: &[GrainId]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for &grain in requested {
        if !seen.insert(grain) {
            return Err(GrainError::shape(format!("grain {grain} requested twice")));
        }
    }
    Ok(())
}

/// Row indices of every requested grain, in input order.
fn group_members(ids: &[GrainId], requested: &[GrainId]) -> HashMap<GrainId, Vec<usize>> {
    let mut members: HashMap<GrainId, Vec<usize>> =
        requested.iter().map(|&grain| (grain, Vec::new())).collect();
    for (index, grain) in ids.iter().enumerate() {
        if let Some(rows) = members.get_mut(grain) {
            rows.push(index);
        }
    }
    members
}

/// Dilates, unions and validates the footprints of one grain.
fn union_grain(
    grain: GrainId,
    indices: &[usize],
    footprints: &[Footprint],
    config: &GlobalConfig,
) -> Result<GrainGeometry> {
    if indices.is_empty() {
        return Err(GrainError::shape(format!("grain {grain} selects no footprints")));
    }
    trace!(grain, footprints = indices.len(), "Selected footprints");

    let dilated = indices
        .iter()
        .map(|&i| {
            dilate(footprints[i].corners(), config.buffer_tolerance, config.mitre_limit)
                .map_err(|e| GrainError::geometry(grain, format!("footprint {i}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let union = cascaded_union(dilated);
    validate_union(&union).map_err(|e| GrainError::geometry(grain, e))?;

    // A union snapped coarser than the tolerance loses the dilation
    let strict = config.buffer_tolerance > 0.0;
    for &i in indices {
        validate_coverage(&union, &footprints[i], strict).map_err(|e| {
            GrainError::geometry(
                grain,
                format!(
                    "footprint {i} {e} (buffer tolerance {} may be below the union resolution)",
                    config.buffer_tolerance
                ),
            )
        })?;
    }

    let geometry = GrainGeometry::from_multi_polygon(grain, union)?;
    debug!(grain, components = geometry.component_count(), "Grain assembled");
    Ok(geometry)
}
