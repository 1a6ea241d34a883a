//! # vecgrid
//!
//! A small generic 3-component vector ([`Vec3`]) with elementwise arithmetic,
//! and [`compute_grid`], which splits a count of work units into a
//! near-cubic 3D grid shape for partitioning a renderer or simulation.

pub mod config;
pub mod error;
pub mod numerics;

pub use config::GridConfig;
pub use error::{Error, Result};
pub use numerics::grid::{compute_grid, try_compute_grid, GridLayout};
pub use numerics::types::traits::{Integral, Scalar};
pub use numerics::types::vector::Vec3;
