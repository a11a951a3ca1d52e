use super::{presets, LifeError, Orientation, Result, Shape};

/// Staged construction of a seed shape: select, rotate, build.
///
/// ```
/// use terminal_life::{Orientation, PatternBuilder};
///
/// let shape = PatternBuilder::new()
///     .select_type("toad")?
///     .rotate(Orientation::Right)
///     .build();
/// assert_eq!(shape.dimensions(), (2, 4));
/// # Ok::<(), terminal_life::LifeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternBuilder {
    shape: Shape,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current shape with a catalog pattern
    pub fn select_type(mut self, name: &str) -> Result<Self> {
        let pattern =
            presets::find(name).ok_or_else(|| LifeError::UnknownPatternName(name.to_string()))?;
        self.shape = pattern.shape();
        Ok(self)
    }

    /// Start from an arbitrary shape instead of a catalog entry
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Rotate the current shape clockwise to face `orientation`
    pub fn rotate(mut self, orientation: Orientation) -> Self {
        self.shape = self.shape.rotate(orientation);
        self
    }

    pub fn build(self) -> Shape {
        self.shape
    }
}
