//! Command dispatch and handlers.

pub mod categories;
pub mod show;

use crate::cli::{Cli, Command};
use crate::config::DashboardConfig;
use crate::context::TrackerContext;

/// Dispatch a parsed command line to its handler.
///
/// The configuration is loaded once here and passed down; with `--replay`
/// the tracker context serves fixture files instead of the network.
///
/// # Errors
///
/// Returns an error string if configuration loading or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = DashboardConfig::load(&cli.config).map_err(|e| e.to_string())?;

    match &cli.command {
        Command::Categories => categories::run(&config),
        Command::Show { category } => {
            let trackers = match &cli.replay {
                Some(dir) => TrackerContext::replaying(dir)?,
                None => TrackerContext::live(),
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| format!("failed to start async runtime: {e}"))?;
            runtime.block_on(show::run(config, trackers, category))
        }
    }
}
