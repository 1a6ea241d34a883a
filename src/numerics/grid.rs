// src/numerics/grid.rs
// Factor a work-unit count into a 3D grid shape, and map ranks onto it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::numerics::types::vector::Vec3;

/// Smallest divisor of `x` in `2..=isqrt(x)`, if any.
fn smallest_divisor(x: i32) -> Option<i32> {
    let mut d = 2;
    while d <= x / d {
        if x % d == 0 {
            return Some(d);
        }
        d += 1;
    }
    None
}

/// Split `units` into a grid `(gx, gy, gz)` with `gx * gy * gz == units`.
///
/// Prime factors are taken smallest first and handed out round-robin over
/// the axes x, y, z, x, ... . Whatever is left once no divisor up to the
/// square root remains (1 or a prime) is multiplied into the axis the cursor
/// points at. The shapes are near-cubic for smooth numbers only; a prime
/// yields `(p, 1, 1)`.
///
/// `units` must be at least 1. Other values are not checked and come back
/// as `(units, 1, 1)`; see [`try_compute_grid`] for a checked variant.
pub fn compute_grid(units: i32) -> Vec3<i32> {
    let mut grid = Vec3::splat(1);
    let mut remaining = units;
    let mut axis = 0;
    while let Some(d) = smallest_divisor(remaining) {
        grid[axis] *= d;
        remaining /= d;
        axis = (axis + 1) % 3;
    }
    if remaining != 1 {
        grid[axis] *= remaining;
    }
    grid
}

/// Like [`compute_grid`] but rejects non-positive unit counts.
pub fn try_compute_grid(units: i32) -> Result<Vec3<i32>> {
    if units < 1 {
        return Err(Error::NonPositiveUnits(units));
    }
    Ok(compute_grid(units))
}

/// A grid shape laid over a box-shaped domain anchored at the origin.
///
/// Ranks are numbered with x fastest, then y, then z. Each rank owns one
/// brick of size `domain / grid`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct GridLayout {
    grid: Vec3<i32>,
    domain: Vec3<f32>,
}

/// Unchecked wire form of [`GridLayout`].
#[derive(Deserialize)]
struct RawLayout {
    grid: Vec3<i32>,
    domain: Vec3<f32>,
}

impl TryFrom<RawLayout> for GridLayout {
    type Error = Error;

    /// Accept only grids `compute_grid` could have produced.
    fn try_from(raw: RawLayout) -> Result<Self> {
        let grid = raw.grid;
        let units = grid
            .x
            .checked_mul(grid.y)
            .and_then(|xy| xy.checked_mul(grid.z))
            .filter(|&units| units >= 1)
            .ok_or(Error::InvalidGrid(grid))?;
        if compute_grid(units) != grid {
            return Err(Error::InvalidGrid(grid));
        }
        Ok(Self {
            grid,
            domain: raw.domain,
        })
    }
}

impl GridLayout {
    pub fn new(units: i32, domain: Vec3<f32>) -> Result<Self> {
        let grid = try_compute_grid(units)?;
        debug!(units, %grid, %domain, "computed grid layout");
        Ok(Self { grid, domain })
    }

    pub fn grid(&self) -> Vec3<i32> {
        self.grid
    }

    pub fn domain(&self) -> Vec3<f32> {
        self.domain
    }

    /// Total number of bricks, equal to the unit count the layout was built for.
    pub fn units(&self) -> i32 {
        self.grid.product()
    }

    fn strides(&self) -> Vec3<i32> {
        Vec3::new(1, self.grid.x, self.grid.x * self.grid.y)
    }

    /// Grid cell owned by `rank`.
    pub fn cell_of(&self, rank: i32) -> Result<Vec3<i32>> {
        let units = self.units();
        if rank < 0 || rank >= units {
            return Err(Error::RankOutOfRange { rank, units });
        }
        Ok(Vec3::splat(rank) / self.strides() % self.grid)
    }

    /// Inverse of [`GridLayout::cell_of`].
    pub fn rank_of(&self, cell: Vec3<i32>) -> Result<i32> {
        let inside = (0..3).all(|i| (0..self.grid[i]).contains(&cell[i]));
        if !inside {
            return Err(Error::CellOutOfRange(cell));
        }
        let weighted = cell * self.strides();
        Ok(weighted.x + weighted.y + weighted.z)
    }

    pub fn brick_size(&self) -> Vec3<f32> {
        self.domain / self.grid.cast::<f32>()
    }

    /// Lower and upper corner of the brick owned by `rank`.
    pub fn brick_bounds(&self, rank: i32) -> Result<(Vec3<f32>, Vec3<f32>)> {
        let size = self.brick_size();
        let lo = self.cell_of(rank)?.cast::<f32>() * size;
        Ok((lo, lo + size))
    }
}
