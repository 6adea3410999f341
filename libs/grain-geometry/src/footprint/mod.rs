//! # Footprints
//!
//! Top-down projection of cuboids onto the horizontal plane.
//!
//! ## Corner Order
//!
//! ```text
//! [x-dx, y+dy] 3 ──── 2 [x+dx, y+dy]
//!              │      │
//! [x-dx, y-dy] 0 ──── 1 [x+dx, y-dy]
//! ```
//!
//! Degenerate rectangles (`dx == 0` or `dy == 0`) are passed through as-is;
//! the dilation step turns them into thin rectangles.

use crate::cuboid::check_columns;
use crate::error::Result;
use config::constants::FOOTPRINT_CORNERS;
use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};


/// Rectangular footprint of one cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Corner points in the fixed order documented at module level.
    pub corners: [[f64; 2]; FOOTPRINT_CORNERS],
}

impl Footprint {
    /// Creates the footprint of a cuboid centered at `(x, y)` with
    /// half-extents `(dx, dy)`.
    #[must_use]
    pub fn from_center(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            corners: [
                [x - dx, y - dy],
                [x + dx, y - dy],
                [x + dx, y + dy],
                [x - dx, y + dy],
            ],
        }
    }

    /// Returns the corner points.
    #[must_use]
    pub fn corners(&self) -> &[[f64; 2]] {
        &self.corners
    }

    /// Area of the rectangle; zero for degenerate footprints.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [p0, p1, p2, _] = self.corners;
        ((p1[0] - p0[0]) * (p2[1] - p1[1])).abs()
    }

    /// True when the rectangle has zero width or zero height.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Builds a polygon whose outer boundary is the four corners.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring: Vec<(f64, f64)> = self.corners.iter().map(|c| (c[0], c[1])).collect();
        Polygon::new(LineString::from(ring), vec![])
    }
}

/// Computes the footprint of every cuboid row.
///
/// Output is index-aligned with the input: footprint `i` belongs to row `i`.
///
/// ## Errors
///
/// Fails with a shape error when a row has fewer than six columns.
///
/// ## Example
///
/// ```rust
/// use grain_geometry::generate_footprints;
///
/// let rows = vec![[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0]];
/// let footprints = generate_footprints(&rows).unwrap();
/// assert_eq!(
///     footprints[0].corners,
///     [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]
/// );
/// ```
#[instrument(skip_all, fields(cuboids = cuboids.len()))]
pub fn generate_footprints<R: AsRef<[f64]>>(cuboids: &[R]) -> Result<Vec<Footprint>> {
    let footprints = cuboids
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            check_columns(index, row)?;
            Ok(Footprint::from_center(row[0], row[1], row[3], row[4]))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(footprints = footprints.len(), "Generated footprints");
    Ok(footprints)
}
