use std::fmt;
use std::str::FromStr;

use super::LifeError;

/// Facing of a shape, as a clockwise rotation from its authored layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// Get all orientations in clockwise order
    pub fn all() -> [Orientation; 4] {
        [Orientation::Up, Orientation::Right, Orientation::Down, Orientation::Left]
    }

    /// Number of 90° clockwise turns away from `Up`
    pub const fn quarter_turns(self) -> usize {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }

    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::all()
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeError::UnknownOrientation(s.to_string()))
    }
}
