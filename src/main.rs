use clap::Parser;
use project_explorer::adapters::console;
use project_explorer::utils::{logger, validation::Validate};
use project_explorer::{CliConfig, Dimension, HttpProjectSource, ViewModel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting project-explorer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = HttpProjectSource::from_config(&config);
    let mut view_model = ViewModel::new();

    // A failed load has already been logged inside `load`; the view then
    // renders the same empty state as "no data exists".
    let mut snapshot = match view_model.load(&source).await {
        Ok(snapshot) => snapshot,
        Err(_) => view_model.snapshot(),
    };

    for category in &config.categories {
        snapshot = view_model.toggle(Dimension::Category, category);
    }
    for location in &config.locations {
        snapshot = view_model.toggle(Dimension::Location, location);
    }

    print!("{}", console::render(&snapshot));

    Ok(())
}
