//! Grid configuration parsed from `key=value` parameter strings.

use tracing::trace;

use crate::error::{Error, Result};
use crate::numerics::grid::GridLayout;
use crate::numerics::types::vector::Vec3;

/// Configuration for building a [`GridLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of work units to partition.
    pub units: i32,

    /// Extent of the domain along x, y and z.
    pub domain: Vec3<f32>,
}

impl Default for GridConfig {
    /// One work unit per logical CPU over a unit cube.
    fn default() -> Self {
        Self {
            units: i32::try_from(num_cpus::get()).unwrap_or(i32::MAX),
            domain: Vec3::one(),
        }
    }
}

impl GridConfig {
    pub fn new(units: i32, domain: Vec3<f32>) -> Self {
        Self { units, domain }
    }

    /// Parse a comma-separated parameter list such as
    /// `"units=12,domain=64x64x32"`.
    ///
    /// Keys not given keep their default. `domain` takes either `XxYxZ` or a
    /// single value applied to all three axes.
    pub fn from_parameters(params: &str) -> Result<Self> {
        let mut config = Self::default();
        for pair in params.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::Config(format!("expected key=value, got '{pair}'")))?;
            let (key, value) = (key.trim(), value.trim());
            trace!(key, value, "grid parameter");
            match key {
                "units" => config.units = parse_units(value)?,
                "domain" => config.domain = parse_domain(value)?,
                other => return Err(Error::Config(format!("unknown parameter '{other}'"))),
            }
        }
        Ok(config)
    }

    pub fn layout(&self) -> Result<GridLayout> {
        GridLayout::new(self.units, self.domain)
    }
}

fn parse_units(value: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|e| Error::Config(format!("invalid units '{value}': {e}")))
}

/// `XxYxZ` or a single broadcast extent.
pub fn parse_domain(value: &str) -> Result<Vec3<f32>> {
    let parts = value
        .split('x')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .map_err(|e| Error::Config(format!("invalid domain '{value}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [s] => Ok(Vec3::splat(*s)),
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(Error::Config(format!(
            "invalid domain '{value}': expected 1 or 3 extents"
        ))),
    }
}
