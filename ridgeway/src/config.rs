use rand::Rng;
use ridgeway_dem::DemConfig;
use ridgeway_paths::Solver;

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Terrain parameters.
    pub dem: DemConfig,
    /// Terrain seed. `None` draws a fresh one from the thread RNG.
    pub seed: Option<u64>,
    /// Colour path cells with terminal escape codes.
    pub color: bool,
    /// Engines to run, in order. Each pairs with its default cost policy.
    pub solvers: Vec<Solver>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dem: DemConfig::default(),
            seed: None,
            color: false,
            solvers: vec![Solver::Dijkstra, Solver::FloydWarshall],
        }
    }
}

impl RunConfig {
    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}
