use super::Shape;

/// A named seed pattern, authored as text rows (`O` alive, `.` dead)
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub art: &'static [&'static str],
}

impl Pattern {
    /// Dense cell matrix for this pattern
    pub fn shape(&self) -> Shape {
        Shape::from_art(self.art)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally down-right
    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "Moves diagonally (period 4)",
        art: &[
            ".O.",
            "..O",
            "OOO",
        ],
    };

    /// Blinker - period 2 oscillator, authored vertically
    pub const BLINKER: Pattern = Pattern {
        name: "blinker",
        description: "Oscillator (period 2)",
        art: &[
            "O",
            "O",
            "O",
        ],
    };

    pub const TOAD: Pattern = Pattern {
        name: "toad",
        description: "Oscillator (period 2)",
        art: &[
            ".OOO",
            "OOO.",
        ],
    };

    pub const BEACON: Pattern = Pattern {
        name: "beacon",
        description: "Oscillator (period 2)",
        art: &[
            "OO..",
            "OO..",
            "..OO",
            "..OO",
        ],
    };

    /// Cross of bars on an 11x11 field
    pub const PULSAR: Pattern = Pattern {
        name: "pulsar",
        description: "Symmetric cross of bars",
        art: &[
            "...O...O...",
            "...O...O...",
            "...O...O...",
            "OOO.OOO.OOO",
            "...O...O...",
            "...O...O...",
            "...O...O...",
            "OOO.OOO.OOO",
            "...O...O...",
            "...O...O...",
            "...O...O...",
        ],
    };

    /// Horizontal blinker
    pub const OSCILLATOR: Pattern = Pattern {
        name: "oscillator",
        description: "Horizontal blinker (period 2)",
        art: &["OOO"],
    };

    pub const SPACESHIP: Pattern = Pattern {
        name: "spaceship",
        description: "Small 4x4 seed",
        art: &[
            ".OO.",
            "O..O",
            ".O.O",
            "..OO",
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "block",
        description: "Still life",
        art: &[
            "OO",
            "OO",
        ],
    };

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Pattern = Pattern {
        name: "lwss",
        description: "Lightweight Spaceship (period 4)",
        art: &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ],
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "r-pentomino",
        description: "Methuselah - stabilizes at gen 1103",
        art: &[
            ".OO",
            "OO.",
            ".O.",
        ],
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern {
        name: "acorn",
        description: "Methuselah - stabilizes at gen 5206",
        art: &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ],
    };

    /// Gosper Glider Gun - produces gliders indefinitely
    pub const GLIDER_GUN: Pattern = Pattern {
        name: "glider-gun",
        description: "Produces gliders (period 30)",
        art: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    };

    const CATALOG: &[Pattern] = &[
        GLIDER,
        BLINKER,
        TOAD,
        BEACON,
        PULSAR,
        OSCILLATOR,
        SPACESHIP,
        BLOCK,
        LWSS,
        R_PENTOMINO,
        ACORN,
        GLIDER_GUN,
    ];

    /// Get all available patterns
    pub fn all_patterns() -> &'static [Pattern] {
        CATALOG
    }

    /// Look up a pattern by name, ignoring case and surrounding whitespace
    pub fn find(name: &str) -> Option<&'static Pattern> {
        let name = name.trim();
        CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names() -> Vec<&'static str> {
        CATALOG.iter().map(|p| p.name).collect()
    }
}
