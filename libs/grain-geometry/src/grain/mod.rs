//! # Grain Geometry
//!
//! The union of all footprints sharing a grain index, as either one polygon
//! or several disjoint polygons.
//!
//! ## Boundary Extraction
//!
//! Boundaries are the closed outer rings of each component, stacked in
//! component order. Holes are kept in the geometry but never appear in the
//! boundary coordinates.

pub mod table;

#[cfg(test)]
mod tests;

pub use table::GrainTable;

use crate::cuboid::GrainId;
use crate::error::{GrainError, Result};
use geo::{Area, Contains, InteriorPoint, LineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Outline of one grain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GrainGeometry {
    /// Footprints form one connected region.
    Single(Polygon<f64>),
    /// Footprints form several disjoint regions.
    Multi(Vec<Polygon<f64>>),
}

impl GrainGeometry {
    /// Wraps a union result.
    ///
    /// Fails with a geometry error when the union has no components.
    pub fn from_multi_polygon(grain: GrainId, union: MultiPolygon<f64>) -> Result<Self> {
        let mut components = union.0;
        match components.len() {
            0 => Err(GrainError::geometry(grain, "union has no components")),
            1 => Ok(Self::Single(components.remove(0))),
            _ => Ok(Self::Multi(components)),
        }
    }

    /// Component polygons in order.
    #[must_use]
    pub fn components(&self) -> &[Polygon<f64>] {
        match self {
            Self::Single(polygon) => std::slice::from_ref(polygon),
            Self::Multi(polygons) => polygons,
        }
    }

    /// Number of disjoint components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components().len()
    }

    /// Total area, holes excluded.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.components().iter().map(|p| p.unsigned_area()).sum()
    }

    /// True when `point` lies strictly inside one of the components.
    #[must_use]
    pub fn contains_point(&self, point: [f64; 2]) -> bool {
        let point = Point::new(point[0], point[1]);
        self.components().iter().any(|polygon| polygon.contains(&point))
    }

    /// Outer ring coordinates of every component, stacked in component order.
    ///
    /// Each ring is closed: its first point is repeated at the end.
    #[must_use]
    pub fn exterior_coords(&self) -> Vec<[f64; 2]> {
        self.components()
            .iter()
            .flat_map(|polygon| polygon.exterior().coords().map(|c| [c.x, c.y]))
            .collect()
    }

    /// Holes of every component, in component order.
    ///
    /// Not part of [`exterior_coords`](Self::exterior_coords).
    #[must_use]
    pub fn interior_rings(&self) -> Vec<&LineString<f64>> {
        self.components()
            .iter()
            .flat_map(|polygon| polygon.interiors())
            .collect()
    }

    /// A point guaranteed to lie inside the grain.
    ///
    /// This is not the area centroid: for concave or multi-component grains
    /// the centroid can fall outside, this point cannot.
    pub fn representative_point(&self, grain: GrainId) -> Result<[f64; 2]> {
        let point = match self {
            Self::Single(polygon) => polygon.interior_point(),
            Self::Multi(polygons) => MultiPolygon::new(polygons.clone()).interior_point(),
        }
        .ok_or_else(|| GrainError::geometry(grain, "no interior point"))?;

        let point = [point.x(), point.y()];
        if !self.contains_point(point) {
            return Err(GrainError::geometry(
                grain,
                format!("representative point {point:?} lies outside the grain"),
            ));
        }
        Ok(point)
    }

    /// Converts back into a multi-polygon.
    #[must_use]
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.components().to_vec())
    }
}
