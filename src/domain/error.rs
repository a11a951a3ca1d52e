use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised by the simulation core.
///
/// Every variant is a caller mistake; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPatternName(String),

    #[error("unknown orientation '{0}' (expected up, right, down or left)")]
    UnknownOrientation(String),
}
