//! The B3/S23 rule of Conway's Game of Life.
//!
//! There is exactly one rule set; every evolution path in the crate goes
//! through [`transition_rule`].

/// Neighbor count at which a dead cell is born
pub const BIRTH: u8 = 3;

/// Decide whether a cell is alive in the next generation:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn transition_rule(currently_alive: bool, live_neighbors: u8) -> bool {
    match (currently_alive, live_neighbors) {
        (true, 2 | 3) => true,
        (false, BIRTH) => true,
        _ => false,
    }
}
