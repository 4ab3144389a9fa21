// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod render;

pub use commands::CliCommand;

use crate::core::config::{self, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory user directory for the terminal", long_about = None)]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Don't clear the screen before showing the menu
    #[arg(long)]
    pub no_clear: bool,

    /// Don't wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Command-line flags win over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            match config::parse_level(level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }
        if let Some(file) = &self.log_file {
            config.log_file = file.clone();
        }
        if self.no_clear {
            config.clear_screen = false;
        }
        if self.no_pause {
            config.pause_after_action = false;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "userdir",
            "--log-level",
            "trace",
            "--log-file",
            "dir.log",
            "--no-clear",
            "--no-pause",
            "--no-color",
        ])
        .unwrap();
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.log_file, PathBuf::from("dir.log"));
        assert!(!config.clear_screen);
        assert!(!config.pause_after_action);
        assert!(!config.color);
        assert_eq!(args.command, None);
    }

    #[test]
    fn generate_subcommand() {
        let args = Args::try_parse_from(["userdir", "generate", "--count", "3"]).unwrap();
        assert_eq!(args.command, Some(CliCommand::Generate { count: 3 }));

        let args = Args::try_parse_from(["userdir", "generate"]).unwrap();
        assert_eq!(args.command, Some(CliCommand::Generate { count: 1 }));
    }
}
