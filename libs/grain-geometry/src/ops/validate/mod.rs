//! # Union Validation
//!
//! Checks on the output of the union step. A grain geometry is only handed
//! to callers after passing every check:
//!
//! - at least one component
//! - every component has positive area
//! - OGC validity through [`geo::Validation`]: finite coordinates, closed
//!   rings with enough points, no self-intersections, holes inside their
//!   shell, no overlapping components
//! - every footprint of the grain lies inside the union
//!
//! The last check catches unions whose coordinates were snapped to a grid
//! coarser than the dilation distance. The dilation is lost in that case and
//! the union ends up on or inside the raw footprint edges.


use crate::footprint::Footprint;
use geo::{Area, Contains, Intersects, MultiPolygon, Point, Validation};

/// Validates a union result, describing the first defect found.
pub fn validate_union(union: &MultiPolygon<f64>) -> Result<(), String> {
    if union.0.is_empty() {
        return Err("union is empty".to_string());
    }

    for (index, polygon) in union.0.iter().enumerate() {
        let area = polygon.unsigned_area();
        if !(area > 0.0) {
            return Err(format!("component {index} has no area"));
        }
    }

    union
        .check_validation()
        .map_err(|e| format!("invalid union: {e}"))
}

/// Checks that `footprint` lies inside `union`.
///
/// With `strict` set every corner must lie in the interior of the union,
/// which holds whenever the union was built from outward-dilated footprints.
/// Otherwise corners on the boundary are accepted.
pub fn validate_coverage(
    union: &MultiPolygon<f64>,
    footprint: &Footprint,
    strict: bool,
) -> Result<(), String> {
    let corners_inside = footprint.corners().iter().all(|c| {
        let point = Point::new(c[0], c[1]);
        if strict {
            union.contains(&point)
        } else {
            union.intersects(&point)
        }
    });
    if !corners_inside {
        return Err(if strict {
            "not strictly inside the dilated union".to_string()
        } else {
            "not covered by the union".to_string()
        });
    }

    // Corners alone miss a notch cutting across an edge
    if !footprint.is_degenerate() {
        let polygon = footprint.to_polygon();
        if !union.0.iter().any(|component| component.contains(&polygon)) {
            return Err("crosses the union boundary".to_string());
        }
    }
    Ok(())
}
