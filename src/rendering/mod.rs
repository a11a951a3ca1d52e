//! Text output of generations.
//!
//! The simulation loop talks to a [`Frontend`]; [`TerminalFrontend`] is the
//! crossterm-backed one used by the binary.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::application::Simulation;

/// Destination for rendered frames
pub trait Frontend {
    /// Show one complete frame
    fn present(&mut self, frame: &str) -> io::Result<()>;

    /// Wipe the display before the next frame
    fn clear(&mut self) -> io::Result<()>;
}

/// Writes frames to a terminal, clearing with ANSI sequences via crossterm
pub struct TerminalFrontend<W: Write> {
    out: W,
}

impl TerminalFrontend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalFrontend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Frontend for TerminalFrontend<W> {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        // Raw mode is never enabled, so plain newlines are fine here
        queue!(self.out, Print(frame), Print("\n"))?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// One-line summary shown under the grid
pub fn status_line(sim: &Simulation) -> String {
    let (width, height) = sim.grid().dimensions();
    format!(
        "Generation: {} | Population: {} | Grid: {}x{} | Evolve: {:.2} ms",
        sim.generation(),
        format_number(sim.grid().population()),
        width,
        height,
        sim.last_evolution_time_ms()
    )
}

/// Grid text plus, when requested, the status line
pub fn frame(sim: &Simulation, alive_glyph: &str, dead_glyph: &str, show_stats: bool) -> String {
    let mut text = sim.grid().render(alive_glyph, dead_glyph);
    if show_stats {
        text.push_str(&status_line(sim));
        text.push('\n');
    }
    text
}
