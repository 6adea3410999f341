//! # Cuboid Records
//!
//! Cuboid rows are read positionally: `x y z dx dy dz [grain ...]`.
//! Only the center `x, y`, the half-extents `dx, dy` and the grain column are
//! used by the pipeline; `z` and `dz` are carried but ignored by the top-down
//! projection.

use crate::error::{GrainError, Result};
use config::constants::{GRAIN_ID_COLUMN, MIN_CUBOID_COLUMNS};
use serde::{Deserialize, Serialize};

/// Integer key grouping cuboids into grains.
pub type GrainId = i64;

/// Axis-aligned box with an optional grain index.
///
/// ## Example
///
/// ```rust
/// use grain_geometry::Cuboid;
///
/// let cuboid = Cuboid::from_row(0, &[1.0, 2.0, 0.0, 0.5, 0.5, 0.5, 3.0]).unwrap();
/// assert_eq!(cuboid.grain, Some(3));
/// assert_eq!(cuboid.center, [1.0, 2.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Center position `[x, y, z]`.
    pub center: [f64; 3],
    /// Half-extents `[dx, dy, dz]`.
    pub half_extents: [f64; 3],
    /// Grain index, if the row carries one.
    pub grain: Option<GrainId>,
}

impl Cuboid {
    /// Creates a cuboid from its center, half-extents and grain index.
    #[must_use]
    pub fn new(center: [f64; 3], half_extents: [f64; 3], grain: GrainId) -> Self {
        Self {
            center,
            half_extents,
            grain: Some(grain),
        }
    }

    /// Parses a positional row.
    ///
    /// `index` is only used for error messages.
    pub fn from_row(index: usize, row: &[f64]) -> Result<Self> {
        check_columns(index, row)?;
        let grain = if row.len() > GRAIN_ID_COLUMN {
            Some(grain_id_from_value(index, row[GRAIN_ID_COLUMN])?)
        } else {
            None
        };
        Ok(Self {
            center: [row[0], row[1], row[2]],
            half_extents: [row[3], row[4], row[5]],
            grain,
        })
    }

    /// Returns the positional row form, with the grain column when present.
    #[must_use]
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(GRAIN_ID_COLUMN + 1);
        row.extend_from_slice(&self.center);
        row.extend_from_slice(&self.half_extents);
        if let Some(grain) = self.grain {
            row.push(grain as f64);
        }
        row
    }
}

/// Fails with a shape error when `row` is too short to describe a cuboid.
pub(crate) fn check_columns(index: usize, row: &[f64]) -> Result<()> {
    if row.len() < MIN_CUBOID_COLUMNS {
        return Err(GrainError::shape(format!(
            "row {} has {} columns, expected at least {}",
            index,
            row.len(),
            MIN_CUBOID_COLUMNS
        )));
    }
    Ok(())
}

/// Truncates a grain column value toward zero.
fn grain_id_from_value(index: usize, value: f64) -> Result<GrainId> {
    if !value.is_finite() {
        return Err(GrainError::shape(format!(
            "row {index} has a non-finite grain index: {value}"
        )));
    }
    Ok(value.trunc() as GrainId)
}

/// Reads the grain column of every row.
///
/// Fails when a row has no grain column.
pub fn grain_ids<R: AsRef<[f64]>>(cuboids: &[R]) -> Result<Vec<GrainId>> {
    cuboids
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            match row.get(GRAIN_ID_COLUMN) {
                Some(&value) => grain_id_from_value(index, value),
                None => Err(GrainError::shape(format!(
                    "row {} has {} columns, no grain index at column {}",
                    index,
                    row.len(),
                    GRAIN_ID_COLUMN
                ))),
            }
        })
        .collect()
}
