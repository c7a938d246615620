//! Command-line interface.
//!
//! Without a subcommand the TUI starts; every subcommand prints something and
//! exits.

mod common;
pub mod completions;

pub use common::{print_info, print_success};

use crate::config::Config;
use crate::navigation::ScreenId;
use crate::screens::registry;
use crate::services::canned_reply;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Carpooling UCC in the terminal: sign in, find a driver, preview a route and chat
#[derive(Parser, Debug)]
#[command(name = "carpool", version, about, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

/// Subcommands; without one the TUI starts
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every screen, its route pattern and where it leads
    Routes,
    /// Print the scripted driver reply a chat message would get
    Reply {
        /// Message text
        text: String,
    },
    /// Show the configuration file location and effective settings
    Config,
    /// Shows logs location and how to view them
    Logs,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file to load: `--config` or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let config_path = self.config_path();
        match self.command {
            Some(Commands::Routes) => {
                print!("{}", routes_report());
                Ok(())
            }
            Some(Commands::Reply { text }) => {
                println!("{}", canned_reply(&text));
                Ok(())
            }
            Some(Commands::Config) => Self::cmd_config(config_path),
            Some(Commands::Logs) => Self::cmd_logs(),
            Some(Commands::Completions { shell }) => completions::generate(shell),
            None => {
                // No command provided, launch TUI
                Ok(())
            }
        }
    }

    fn cmd_config(config_path: PathBuf) -> Result<()> {
        info!("CLI: config command executed");
        let existed = config_path.exists();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        if !existed {
            print_success("Created a default configuration");
        }
        let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        print_info(&format!("Config file: {}", config_path.display()));
        println!();
        print!("{}", rendered);
        Ok(())
    }

    fn cmd_logs() -> Result<()> {
        let log_file = crate::utils::get_log_dir().join("carpool.log");
        println!("{}", log_file.display());
        println!("View logs in real-time: tail -f {}", log_file.display());
        Ok(())
    }
}

/// Screen catalogue as printed by `carpool routes`
pub fn routes_report() -> String {
    let mut out = String::new();
    for screen in ScreenId::ALL {
        let _ = writeln!(out, "{:<22} {}", screen.pattern(), registry::describe(screen));
        for (event, intent) in registry::transitions(screen) {
            let _ = writeln!(out, "{:<22}   {} -> {}", "", event, intent);
        }
    }
    out.push('\n');
    out.push_str(indoc! {"
        Back pops the current screen everywhere; at the start screen it is refused.
        Ctrl+C quits from any screen.
    "});
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_report_lists_every_pattern() {
        let report = routes_report();
        for screen in ScreenId::ALL {
            assert!(report.contains(screen.pattern()), "missing {}", screen);
        }
        assert!(report.contains("route/{destination}"));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["carpool", "--config", "/tmp/c.toml", "reply", "hola"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/c.toml"));
        assert!(matches!(cli.command, Some(Commands::Reply { ref text }) if text == "hola"));
        assert!(!cli.no_colors);
    }
}
