use std::time::Instant;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::LifeConfig;
use crate::domain::{Grid, PatternBuilder, Result};

/// Simulation orchestrates successive generations of one grid.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    parallel: bool,
    last_evolution_time_ms: f32,
}

impl Simulation {
    /// Wrap an existing grid as generation 0
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            parallel: false,
            last_evolution_time_ms: 0.0,
        }
    }

    /// Evolve with rayon instead of serially (builder pattern)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create the grid, optionally fill it randomly, then stamp the
    /// configured pattern at its offset
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        let mut grid = Grid::new(config.width, config.height)?;

        if let Some(density) = config.random_density {
            match config.seed {
                Some(seed) => grid.randomize(&mut StdRng::seed_from_u64(seed), density),
                None => grid.randomize(&mut rand::rng(), density),
            }
            debug!("Random fill at density {density} gave {} live cells", grid.population());
        }

        if let Some(name) = &config.pattern {
            let shape = PatternBuilder::new()
                .select_type(name)?
                .rotate(config.orientation)
                .build();
            grid.stamp(&shape, config.row_offset, config.col_offset)?;
            info!(
                "Placed '{}' facing {} at ({}, {})",
                name, config.orientation, config.row_offset, config.col_offset
            );
        }

        Ok(Self::new(grid).with_parallel(config.parallel))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn last_evolution_time_ms(&self) -> f32 {
        self.last_evolution_time_ms
    }

    /// Replace the current grid with its successor.
    /// The successor is fully computed before it becomes current.
    pub fn step(&mut self) {
        let start = Instant::now();

        let next = if self.parallel {
            self.grid.next_generation_parallel()
        } else {
            self.grid.next_generation()
        };
        self.grid = next;

        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }
}
