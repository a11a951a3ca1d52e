// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Configuration and the generation loop
pub mod application;

// Infrastructure layer - Terminal output, CLI, logging
pub mod rendering;
pub mod cli;
pub mod logging;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Orientation, Pattern, PatternBuilder, Shape, presets};
pub use application::{LifeConfig, Simulation};
pub use error::AppError;
