// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Open the interactive user directory (default)
    Menu,

    /// Print freshly generated passwords
    Generate {
        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Rate a password without echoing it
    Strength,
}
