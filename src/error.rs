use thiserror::Error;

use crate::numerics::types::vector::Vec3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid index {0} for vec3, expected 0, 1 or 2")]
    InvalidIndex(usize),

    #[error("Work unit count must be positive, got {0}")]
    NonPositiveUnits(i32),

    #[error("Rank {rank} is outside a grid of {units} units")]
    RankOutOfRange { rank: i32, units: i32 },

    #[error("Cell {0} is outside the grid")]
    CellOutOfRange(Vec3<i32>),

    #[error("Grid {0} is not a shape produced by compute_grid")]
    InvalidGrid(Vec3<i32>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
