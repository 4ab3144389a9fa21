use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::UserRegistry;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    args.apply(&mut config);

    if !config.color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = logging::init(&config.log_file, config.log_level) {
        eprintln!("⚠ Logging disabled: {}", e);
    }
    log::info!("Starting user directory");
    log::debug!("Loaded config: {:?}", config);

    match args.command.clone().unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { count } => {
            cli::handlers::handle_generate(count).context("password generation failed")?;
        }
        CliCommand::Strength => {
            cli::handlers::handle_strength().context("strength check failed")?;
        }
        CliCommand::Menu => run_interactive(&config)?,
    }

    log::info!("User directory shut down, in-memory data discarded");
    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received. Exiting...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\nGoodbye!");
            std::process::exit(0);
        })
        .context("failed to set Ctrl+C handler")?;
    }

    let mut registry = UserRegistry::new();
    cli::menu::run_cli_menu(&mut registry, config, should_exit).context("menu loop failed")?;
    log::info!("Menu closed with {} user(s) registered", registry.len());
    Ok(())
}
