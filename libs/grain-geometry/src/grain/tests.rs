//! # Grain Geometry Tests

use super::*;
use approx::assert_relative_eq;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]),
        vec![],
    )
}

/// Square frame: 4x4 outer ring with a 2x2 hole.
fn frame() -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
        vec![LineString::from(vec![(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)])],
    )
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_single_component() {
    let union = MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0)]);
    let geometry = GrainGeometry::from_multi_polygon(1, union).unwrap();
    assert!(matches!(geometry, GrainGeometry::Single(_)));
    assert_eq!(geometry.component_count(), 1);
}

#[test]
fn test_multi_component() {
    let union = MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(3.0, 0.0, 4.0, 1.0)]);
    let geometry = GrainGeometry::from_multi_polygon(1, union).unwrap();
    assert!(matches!(geometry, GrainGeometry::Multi(ref parts) if parts.len() == 2));
    assert_relative_eq!(geometry.area(), 2.0);
}

#[test]
fn test_empty_union_is_geometry_error() {
    let err = GrainGeometry::from_multi_polygon(8, MultiPolygon::new(vec![])).unwrap_err();
    assert!(matches!(err, GrainError::Geometry { grain: 8, .. }));
}

// =============================================================================
// BOUNDARY EXTRACTION
// =============================================================================

#[test]
fn test_single_exterior_is_closed_ring() {
    let geometry = GrainGeometry::Single(rect(0.0, 0.0, 2.0, 1.0));
    let coords = geometry.exterior_coords();
    assert_eq!(coords.len(), 5);
    assert_eq!(coords.first(), coords.last());
    assert_eq!(coords[1], [2.0, 0.0]);
}

#[test]
fn test_multi_exteriors_are_stacked() {
    let geometry = GrainGeometry::Multi(vec![rect(0.0, 0.0, 1.0, 1.0), rect(5.0, 5.0, 6.0, 6.0)]);
    let coords = geometry.exterior_coords();
    assert_eq!(coords.len(), 10);
    assert_eq!(coords[0], [0.0, 0.0]);
    assert_eq!(coords[4], [0.0, 0.0]);
    assert_eq!(coords[5], [5.0, 5.0]);
    assert_eq!(coords[9], [5.0, 5.0]);
}

#[test]
fn test_holes_not_in_boundary() {
    let geometry = GrainGeometry::Single(frame());
    let coords = geometry.exterior_coords();
    assert_eq!(coords.len(), 5);
    assert!(!coords.contains(&[1.0, 1.0]));
    assert_eq!(geometry.interior_rings().len(), 1);
    assert_relative_eq!(geometry.area(), 12.0);
}

// =============================================================================
// REPRESENTATIVE POINT
// =============================================================================

#[test]
fn test_representative_point_inside_square() {
    let geometry = GrainGeometry::Single(rect(0.0, 0.0, 2.0, 2.0));
    let point = geometry.representative_point(0).unwrap();
    assert!(geometry.contains_point(point));
}

#[test]
fn test_representative_point_avoids_hole() {
    let geometry = GrainGeometry::Single(frame());
    let point = geometry.representative_point(0).unwrap();
    assert!(geometry.contains_point(point));
    // The area centroid (2, 2) lies in the hole
    assert!(!geometry.contains_point([2.0, 2.0]));
}

#[test]
fn test_representative_point_multi() {
    let geometry = GrainGeometry::Multi(vec![rect(0.0, 0.0, 1.0, 1.0), rect(10.0, 0.0, 13.0, 3.0)]);
    let point = geometry.representative_point(0).unwrap();
    assert!(geometry.contains_point(point));
    // Midpoint between the components is outside both
    assert!(!geometry.contains_point([6.5, 0.5]));
}

#[test]
fn test_to_multi_polygon_round_trip() {
    let parts = vec![rect(0.0, 0.0, 1.0, 1.0), rect(3.0, 0.0, 4.0, 1.0)];
    let geometry = GrainGeometry::Multi(parts.clone());
    assert_eq!(geometry.to_multi_polygon(), MultiPolygon::new(parts));
}
