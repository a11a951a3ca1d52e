mod config;
pub mod runner;
mod simulation;

pub use config::LifeConfig;
pub use simulation::Simulation;
