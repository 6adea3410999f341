//! # Cascaded Union
//!
//! Unions a group of polygons by merging them pairwise, level by level,
//! instead of folding them one at a time into a growing accumulator.
//!
//! ```text
//! level 0:  a   b   c   d   e
//! level 1:  a∪b     c∪d     e
//! level 2:  a∪b∪c∪d         e
//! level 3:  a∪b∪c∪d∪e
//! ```
//!
//! Each merge keeps both operands small, and the merge order depends only
//! on the input order, so repeated runs give identical output.

#[cfg(test)]
mod tests;

use geo::{BooleanOps, MultiPolygon, Polygon};

/// Unions all `polygons` into one multi-polygon.
///
/// Returns an empty multi-polygon for empty input. A single input polygon
/// is returned unchanged.
pub fn cascaded_union(polygons: Vec<Polygon<f64>>) -> MultiPolygon<f64> {
    let mut level: Vec<MultiPolygon<f64>> = polygons
        .into_iter()
        .map(|polygon| MultiPolygon::new(vec![polygon]))
        .collect();

    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut operands = level.into_iter();
        while let Some(a) = operands.next() {
            match operands.next() {
                Some(b) => next.push(a.union(&b)),
                None => next.push(a),
            }
        }
        level = next;
    }

    level.pop().unwrap_or_else(|| MultiPolygon::new(vec![]))
}
