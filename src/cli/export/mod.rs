//! Export command - builds the variant registry and runs one export

use std::io::Write;

use tracing::{info, warn};

use super::Cli;
use crate::config::AppConfig;
use crate::domain::{ExportRequest, ExportRunner, ModelRegistry};
use crate::infrastructure::logging;
use crate::infrastructure::PythonModelFactory;

/// Run the export described by the command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    if let Err(e) = &loaded {
        warn!("Falling back to default configuration: {}", e);
    }
    info!(python = %config.exporter.python, module = %config.exporter.module, "Configuration loaded");

    let registry = PythonModelFactory::registry(&config.exporter)?;
    let stdout = std::io::stdout();
    execute(&cli, registry, &mut stdout.lock())?;

    Ok(())
}

/// Run the export against an explicit registry and output sink
pub fn execute<W: Write>(
    cli: &Cli,
    registry: ModelRegistry,
    out: &mut W,
) -> anyhow::Result<ExportRequest> {
    let options = cli.to_options();
    let runner = ExportRunner::new(registry);
    Ok(runner.run(&options, out)?)
}
