mod builder;
mod cell;
mod error;
mod grid;
mod orientation;
mod patterns;
mod rules;
mod shape;

pub use builder::PatternBuilder;
pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use orientation::Orientation;
pub use patterns::{Pattern, presets};
pub use rules::transition_rule;
pub use shape::Shape;
