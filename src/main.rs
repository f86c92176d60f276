use artwork_inventory::domain::ports::ConfigProvider;
use artwork_inventory::utils::{logger, validation::Validate};
use artwork_inventory::{CliConfig, InventoryEngine, LocalExport, TerminalSurface};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting artwork-inventory");
    if config.verbose() {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let export = LocalExport::new(config.output_path().to_string());
    let stdin = std::io::stdin();
    let surface = TerminalSurface::new(stdin.lock(), std::io::stdout());

    let mut engine = InventoryEngine::new(surface, export);
    let registered = engine.run()?;

    tracing::info!("✅ Session finished, {} artwork(s) registered", registered);
    println!("✅ Session finished, {} artwork(s) registered", registered);

    Ok(())
}
