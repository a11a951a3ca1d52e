use clap::Parser;
use log::{debug, info};
use terminal_life::{
    application::runner,
    cli::Cli,
    error::Result,
    logging, presets,
    rendering::TerminalFrontend,
    Simulation,
};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if cli.list_patterns {
        for pattern in presets::all_patterns() {
            let shape = pattern.shape();
            println!(
                "{:<12} {:>2}x{:<2} {}",
                pattern.name,
                shape.width(),
                shape.height(),
                pattern.description
            );
        }
        return Ok(());
    }

    if let Some(num_threads) = cli.threads {
        info!("Setting Rayon global thread pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }

    let config = cli.to_config();
    config.validate()?;

    let sim = Simulation::from_config(&config)?;
    let mut frontend = TerminalFrontend::stdout();
    runner::run(sim, &mut frontend, &config)?;
    Ok(())
}
