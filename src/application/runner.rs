use std::thread;

use log::{debug, info, trace};

use super::{LifeConfig, Simulation};
use crate::error::Result;
use crate::rendering::{self, Frontend};

/// Drive the simulation: show the current generation, wait one tick,
/// advance, clear the display, repeat.
///
/// Returns once `config.generations` steps have been shown; with no limit
/// it only returns on an output error.
pub fn run<F: Frontend>(mut sim: Simulation, frontend: &mut F, config: &LifeConfig) -> Result<Simulation> {
    info!(
        "Running {}x{} grid, tick {:?}, {}",
        config.width,
        config.height,
        config.tick,
        match config.generations {
            Some(n) => format!("{n} generations"),
            None => "until interrupted".to_string(),
        }
    );

    loop {
        let frame = rendering::frame(&sim, &config.alive_glyph, &config.dead_glyph, config.show_stats);
        frontend.present(&frame)?;

        if config.generations.is_some_and(|limit| sim.generation() >= limit) {
            break;
        }

        if !config.tick.is_zero() {
            thread::sleep(config.tick);
        }
        sim.step();
        trace!(
            "Generation {} took {:.3} ms",
            sim.generation(),
            sim.last_evolution_time_ms()
        );

        frontend.clear()?;
    }

    debug!(
        "Stopped at generation {} with {} live cells",
        sim.generation(),
        sim.grid().population()
    );
    Ok(sim)
}
