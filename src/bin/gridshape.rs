use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vecgrid::config::parse_domain;
use vecgrid::{GridConfig, Vec3};

/// Print the 3D grid shape used to partition a number of work units.
#[derive(Parser)]
#[command(name = "gridshape")]
#[command(author, version, about)]
struct Cli {
    /// Number of work units (defaults to the number of logical CPUs)
    units: Option<i32>,

    /// Parameter string, e.g. "units=12,domain=64x64x32"
    #[arg(long, short)]
    params: Option<String>,

    /// Domain extent as XxYxZ or a single value
    #[arg(long, short)]
    domain: Option<String>,

    /// Also report the cell and brick bounds owned by this rank
    #[arg(long, short)]
    rank: Option<i32>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Brick {
    rank: i32,
    cell: Vec3<i32>,
    lower: Vec3<f32>,
    upper: Vec3<f32>,
}

#[derive(Debug, Serialize)]
struct Report {
    units: i32,
    grid: Vec3<i32>,
    domain: Vec3<f32>,
    brick_size: Vec3<f32>,
    brick: Option<Brick>,
}

/// Merge `--params`, then the positional units and `--domain`, and lay out
/// the grid.
fn build_report(cli: &Cli) -> Result<Report> {
    let mut config = match cli.params.as_deref() {
        Some(params) => GridConfig::from_parameters(params)?,
        None => GridConfig::default(),
    };
    if let Some(units) = cli.units {
        config.units = units;
    }
    if let Some(domain) = cli.domain.as_deref() {
        config.domain = parse_domain(domain)?;
    }

    let layout = config.layout()?;
    info!(units = layout.units(), grid = %layout.grid(), "grid ready");

    let brick = match cli.rank {
        Some(rank) => {
            let (lower, upper) = layout.brick_bounds(rank)?;
            Some(Brick {
                rank,
                cell: layout.cell_of(rank)?,
                lower,
                upper,
            })
        }
        None => None,
    };

    Ok(Report {
        units: layout.units(),
        grid: layout.grid(),
        domain: layout.domain(),
        brick_size: layout.brick_size(),
        brick,
    })
}

fn render(report: &Report, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    let mut out = report.grid.to_string();
    if let Some(brick) = &report.brick {
        out.push_str(&format!(
            "\nrank {}: cell {} bounds {} .. {}",
            brick.rank, brick.cell, brick.lower, brick.upper
        ));
    }
    Ok(out)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let report = build_report(&cli)?;
    println!("{}", render(&report, cli.json)?);
    Ok(())
}
