//! # 2D Polygon Dilation
//!
//! Grows a footprint polygon outward by a small distance before unioning.
//!
//! ## Algorithm Overview
//!
//! 1. Drop repeated points and collinear vertices
//! 2. Orient the ring counter-clockwise
//! 3. Move every vertex to the intersection of its two offset edges (mitre)
//! 4. Bevel convex corners whose mitre exceeds `mitre_limit * distance`
//!
//! Rings with no area collapse to a segment or a point. Those are dilated
//! with square caps: a segment becomes a rectangle of width `2 * distance`
//! extended by `distance` past both ends, a point becomes a square.


use config::constants::{approx_zero, EPSILON};
use geo::{LineString, Polygon};
use glam::DVec2;

/// Dilates a closed ring outward by `distance`.
///
/// A `distance` of zero returns the ring unchanged.
///
/// # Arguments
///
/// * `ring` - Ring vertices, open or closed, any orientation
/// * `distance` - Outward offset, must be >= 0
/// * `mitre_limit` - Maximum mitre length as a multiple of `distance`
///
/// # Example
///
/// ```rust,ignore
/// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// let grown = dilate(&square, 0.5, 5.0)?;
/// // [-0.5, -0.5] .. [1.5, 1.5]
/// ```
pub fn dilate(ring: &[[f64; 2]], distance: f64, mitre_limit: f64) -> Result<Polygon<f64>, String> {
    if ring.is_empty() {
        return Err("cannot dilate an empty ring".to_string());
    }
    if ring.iter().flatten().any(|c| !c.is_finite()) {
        return Err("ring has non-finite coordinates".to_string());
    }

    if distance == 0.0 {
        return Ok(to_polygon(ring.iter().map(|c| DVec2::new(c[0], c[1]))));
    }

    let mut points = dedup_ring(ring);

    let area = signed_area(&points);
    if area.abs() <= EPSILON * extent_squared(&points) {
        return Ok(square_capped(&points, distance));
    }
    if area < 0.0 {
        points.reverse();
    }

    let points = drop_collinear(&points);
    Ok(to_polygon(mitre_offset(&points, distance, mitre_limit)))
}

/// Offsets a counter-clockwise ring with mitred joins.
fn mitre_offset(points: &[DVec2], distance: f64, mitre_limit: f64) -> Vec<DVec2> {
    let n = points.len();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];

        let edge1 = curr - prev;
        let edge2 = next - curr;

        // For CCW polygon, outward normal is (dy, -dx)
        let normal1 = DVec2::new(edge1.y, -edge1.x).normalize();
        let normal2 = DVec2::new(edge2.y, -edge2.x).normalize();

        let dot = normal1.dot(normal2);
        let convex = edge1.perp_dot(edge2) > 0.0;

        // Mitre length relative to distance is sqrt(2 / (1 + dot))
        let denom = 1.0 + dot;
        let too_sharp = approx_zero(denom) || (2.0 / denom).sqrt() > mitre_limit;

        if !too_sharp {
            result.push(curr + (normal1 + normal2) * (distance / denom));
        } else if convex {
            result.push(curr + normal1 * distance);
            result.push(curr + normal2 * distance);
        } else {
            // Reflex spike: keep the corner so the offset edges stay connected
            result.push(curr + normal1 * distance);
            result.push(curr);
            result.push(curr + normal2 * distance);
        }
    }

    result
}

/// Dilates a ring without area using square caps.
fn square_capped(points: &[DVec2], distance: f64) -> Polygon<f64> {
    let origin = points[0];
    let far = points
        .iter()
        .copied()
        .max_by(|a, b| a.distance_squared(origin).total_cmp(&b.distance_squared(origin)))
        .unwrap_or(origin);

    if approx_zero(far.distance(origin)) {
        let d = DVec2::splat(distance);
        let (lo, hi) = (origin - d, origin + d);
        return to_polygon([lo, DVec2::new(hi.x, lo.y), hi, DVec2::new(lo.x, hi.y)]);
    }

    let axis = (far - origin).normalize();
    let (t_min, t_max) = points
        .iter()
        .map(|p| (*p - origin).dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| (lo.min(t), hi.max(t)));

    let start = origin + axis * (t_min - distance);
    let end = origin + axis * (t_max + distance);
    let side = axis.perp() * distance;

    to_polygon([start - side, end - side, end + side, start + side])
}

/// Removes consecutive duplicate points, including the closing point.
fn dedup_ring(ring: &[[f64; 2]]) -> Vec<DVec2> {
    let mut points: Vec<DVec2> = Vec::with_capacity(ring.len());
    for c in ring {
        let p = DVec2::new(c[0], c[1]);
        if points.last().map_or(true, |last| !approx_zero(last.distance(p))) {
            points.push(p);
        }
    }
    while points.len() > 1 && approx_zero(points[0].distance(points[points.len() - 1])) {
        points.pop();
    }
    points
}

/// Removes vertices lying on a straight run between their neighbours.
fn drop_collinear(points: &[DVec2]) -> Vec<DVec2> {
    let n = points.len();
    let kept: Vec<DVec2> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            let edge1 = curr - prev;
            let edge2 = next - curr;
            edge1.perp_dot(edge2).abs() > EPSILON * edge1.length() * edge2.length()
                || edge1.dot(edge2) < 0.0
        })
        .map(|i| points[i])
        .collect();

    if kept.len() < 3 {
        points.to_vec()
    } else {
        kept
    }
}

/// Squared diagonal of the bounding box.
fn extent_squared(points: &[DVec2]) -> f64 {
    let (lo, hi) = points.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    );
    (hi - lo).length_squared()
}

/// Shoelace formula; positive for counter-clockwise rings.
fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

fn to_polygon(points: impl IntoIterator<Item = DVec2>) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = points.into_iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}
