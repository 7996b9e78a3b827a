pub mod cli;
pub mod commands;
pub mod console_notifier;
pub mod error;
pub mod executor;
pub mod logger;
pub mod store;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use console_notifier::ConsoleNotifier;
pub use error::{CliError, Result as CliResult};
pub use executor::execute;
pub use store::open_store;

use std::sync::Arc;

use airsig_config::Config;
use airsig_session::{AppContext, Capabilities, ContextSettings, SimulatedCamera};
use log::info;

/// Load configuration, run one command against the persisted state, and
/// return the rendered JSON.
pub async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("airsig v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = open_store(&config)?;
    let capabilities = Capabilities::system(
        Arc::new(SimulatedCamera::new()),
        Arc::new(ConsoleNotifier),
    );
    let mut context = AppContext::initialize(store, capabilities, ContextSettings::from(&config));

    let result = execute(&mut context, cli.command).await;
    context.shutdown();
    let value = result?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}
