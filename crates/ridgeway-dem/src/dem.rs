use rand::Rng;
use ridgeway_core::{HeightGrid, MAX_HEIGHT, MIN_HEIGHT};

use crate::error::DemError;

/// Terrain generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemConfig {
    /// Side length; must be `2^k + 1`.
    pub size: usize,
    /// Initial noise amplitude. Larger values give more rugged terrain.
    pub roughness: i32,
}

impl Default for DemConfig {
    fn default() -> Self {
        Self {
            size: 33,
            roughness: 132,
        }
    }
}

impl DemConfig {
    /// Check the parameters without generating anything.
    pub fn validate(&self) -> Result<(), DemError> {
        if self.size < 2 || !(self.size - 1).is_power_of_two() {
            return Err(DemError::InvalidSize(self.size));
        }
        if self.roughness < 1 {
            return Err(DemError::InvalidRoughness(self.roughness));
        }
        Ok(())
    }
}

/// Midpoint-displacement terrain generator.
pub struct DemGen<R: Rng> {
    pub rng: R,
    pub config: DemConfig,
}

impl<R: Rng> DemGen<R> {
    /// Create a generator with the given parameters and random source.
    pub fn new(config: DemConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a height grid.
    pub fn generate(&mut self) -> Result<HeightGrid, DemError> {
        self.config.validate()?;
        let size = self.config.size;
        let mut r = self.config.roughness;
        let mut dem = vec![-1i32; size * size];
        let at = |x: usize, y: usize| x * size + y;
        let last = size - 1;

        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            dem[at(x, y)] = 50 - r / 2 + self.rng.random_range(0..r);
        }

        let mut step = last;
        while step > 0 {
            r = (r / 2).max(1);
            let half = step / 2;
            let cells = last / step;
            for cx in 0..cells {
                for cy in 0..cells {
                    let (x0, y0) = (cx * step, cy * step);
                    let (x1, y1) = (x0 + step, y0 + step);
                    let a = dem[at(x0, y0)];
                    let b = dem[at(x1, y0)];
                    let c = dem[at(x0, y1)];
                    let d = dem[at(x1, y1)];

                    dem[at(x0 + half, y0 + half)] = (a + b + c + d) / 4 + self.noise(r);
                    dem[at(x0 + half, y0)] = (a + b) / 2 + self.noise(r);
                    dem[at(x0, y0 + half)] = (a + c) / 2 + self.noise(r);
                    dem[at(x1, y0 + half)] = (b + d) / 2 + self.noise(r);
                    dem[at(x0 + half, y1)] = (c + d) / 2 + self.noise(r);
                }
            }
            step /= 2;
        }

        log::debug!(
            "generated {size}x{size} dem, roughness {}",
            self.config.roughness
        );
        let grid = HeightGrid::from_fn(size, |p| {
            dem[at(p.x as usize, p.y as usize)].clamp(MIN_HEIGHT, MAX_HEIGHT)
        })?;
        Ok(grid)
    }

    /// Offset in `[-r/2, r - r/2)`.
    fn noise(&mut self, r: i32) -> i32 {
        self.rng.random_range(0..r) - r / 2
    }
}
