//! # Union Tests

use super::*;
use crate::ops::offset::dilate;
use approx::assert_relative_eq;
use geo::{Area, LineString};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]),
        vec![],
    )
}

#[test]
fn test_empty_input() {
    assert!(cascaded_union(Vec::new()).0.is_empty());
}

#[test]
fn test_single_polygon_unchanged() {
    let result = cascaded_union(vec![rect(0.0, 0.0, 1.0, 1.0)]);
    assert_eq!(result.0.len(), 1);
    assert_eq!(result.0[0], rect(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_overlapping_merge() {
    let result = cascaded_union(vec![rect(0.0, 0.0, 2.0, 2.0), rect(1.0, 1.0, 3.0, 3.0)]);
    assert_eq!(result.0.len(), 1);
    assert_relative_eq!(result.unsigned_area(), 7.0, epsilon = 1e-9);
}

#[test]
fn test_disjoint_stay_separate() {
    let polygons = vec![
        rect(0.0, 0.0, 1.0, 1.0),
        rect(5.0, 0.0, 6.0, 1.0),
        rect(10.0, 0.0, 11.0, 1.0),
    ];
    let result = cascaded_union(polygons);
    assert_eq!(result.0.len(), 3);
    assert_relative_eq!(result.unsigned_area(), 3.0, epsilon = 1e-9);
}

#[test]
fn test_dilated_strip_merges() {
    // Five edge-sharing unit squares in a row
    let polygons = (0..5)
        .map(|i| {
            let x = i as f64;
            dilate(&[[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 1.0]], 1e-5, 5.0).unwrap()
        })
        .collect();
    let result = cascaded_union(polygons);
    assert_eq!(result.0.len(), 1);
    assert_relative_eq!(result.unsigned_area(), 5.0, epsilon = 1e-3);
}

#[test]
fn test_deterministic() {
    let make = || {
        (0..7)
            .map(|i| rect(i as f64 * 0.5, 0.0, i as f64 * 0.5 + 1.0, 1.0))
            .collect::<Vec<_>>()
    };
    assert_eq!(cascaded_union(make()), cascaded_union(make()));
}
