//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `bugdash`.
#[derive(Debug, Parser)]
#[command(name = "bugdash", version, about = "Render team bug dashboards from saved tracker searches")]
pub struct Cli {
    /// Path to the dashboard configuration file.
    #[arg(long, global = true, default_value = "dashboard.yaml")]
    pub config: PathBuf,

    /// Serve tracker responses from fixture files in this directory
    /// instead of the network.
    #[arg(long, global = true, value_name = "DIR")]
    pub replay: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the configured categories and their bug lists.
    Categories,
    /// Fetch and render every bug list of one category.
    Show {
        /// Category name from the configuration.
        category: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_categories_subcommand() {
        let cli = Cli::parse_from(["bugdash", "categories"]);
        assert!(matches!(cli.command, Command::Categories));
        assert_eq!(cli.config.to_str(), Some("dashboard.yaml"));
    }

    #[test]
    fn parses_show_with_category_and_global_flags() {
        let cli = Cli::parse_from([
            "bugdash",
            "show",
            "active",
            "--config",
            "team.yaml",
            "--replay",
            "fixtures",
        ]);
        let Command::Show { category } = &cli.command else {
            panic!("expected show command");
        };
        assert_eq!(category, "active");
        assert_eq!(cli.config.to_str(), Some("team.yaml"));
        assert_eq!(cli.replay.as_ref().unwrap().to_str(), Some("fixtures"));
    }

    #[test]
    fn show_requires_a_category() {
        assert!(Cli::try_parse_from(["bugdash", "show"]).is_err());
    }
}
