//! The console report: terrain, then one marked route per solver.

use std::error::Error;
use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ridgeway_core::HeightGrid;
use ridgeway_dem::DemGen;
use ridgeway_paths::{Route, Solver, corner_route};

use crate::config::RunConfig;
use crate::render::Renderer;

/// Print the corner-to-corner route and its cost for each solver.
pub fn report_routes<W: Write>(
    out: &mut W,
    grid: &HeightGrid,
    solvers: &[Solver],
    renderer: &Renderer,
) -> Result<Vec<Route>, Box<dyn Error>> {
    let mut routes = Vec::with_capacity(solvers.len());
    for &solver in solvers {
        let route = corner_route(grid, solver)?;
        writeln!(out, "\n\n{solver}:")?;
        renderer.shaded(out, &route.marked)?;
        writeln!(out, "Shortest path energy cost = {}", route.cost)?;
        routes.push(route);
    }
    Ok(routes)
}

/// Generate terrain from `config`, print it, then report every route.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Vec<Route>, Box<dyn Error>> {
    let seed = config.resolve_seed();
    log::info!("terrain seed {seed}");
    let grid = DemGen::new(config.dem, StdRng::seed_from_u64(seed)).generate()?;

    let renderer = Renderer::new(config.color);
    renderer.heights(out, &grid)?;
    writeln!(out)?;
    let routes = report_routes(out, &grid, &config.solvers, &renderer)?;
    out.flush()?;
    Ok(routes)
}
