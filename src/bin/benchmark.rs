//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use terminal_life::{Grid, LifeError};

fn random_grid(size: usize) -> Result<Grid, LifeError> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    Ok(grid)
}

fn benchmark(mut grid: Grid, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<(), LifeError> {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [50, 150, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let grid = random_grid(size)?;
        let serial_ms = benchmark(grid.clone(), iterations, Grid::next_generation);
        let parallel_ms = benchmark(grid, iterations, Grid::next_generation_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark(random_grid(size)?, iterations, Grid::next_generation_parallel);
    println!("\n=== Throughput at {}x{} ===\n", size, size);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
