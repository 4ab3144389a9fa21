// src/cli/handlers.rs
use anyhow::Context;
use inquire::Password;
use rand::Rng;

use crate::cli::render;
use crate::core::ledger::PasswordLedger;
use crate::generators::PasswordGenerator;

// Handlers for one-shot CLI commands

/// Passwords in a batch are unique among themselves.
pub fn generate_batch<R: Rng>(generator: &mut PasswordGenerator<R>, count: usize) -> Vec<String> {
    let mut ledger = PasswordLedger::new();
    (0..count)
        .map(|_| generator.generate_password(&mut ledger))
        .collect()
}

pub fn handle_generate(count: usize) -> anyhow::Result<()> {
    let mut generator = PasswordGenerator::new();
    for password in generate_batch(&mut generator, count) {
        let rating = generator.analyze_password_strength(&password);
        println!("{}  {}", password, render::strength(rating));
    }
    log::info!("Generated {} password(s) from the command line", count);
    Ok(())
}

pub fn handle_strength() -> anyhow::Result<()> {
    let password = Password::new("Password to rate:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()
        .context("failed to read password")?;

    let generator = PasswordGenerator::new();
    println!("{}", render::strength_line(generator.analyze_password_strength(&password)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn batch_has_no_duplicates() {
        let mut generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(9));
        let batch = generate_batch(&mut generator, 50);
        assert_eq!(batch.len(), 50);
        assert_eq!(batch.iter().collect::<HashSet<_>>().len(), 50);
    }

    #[test]
    fn generate_command_returns_anyhow_result() {
        let result: anyhow::Result<()> = handle_generate(2);
        assert!(result.is_ok());
    }

    #[test]
    fn empty_batch() {
        let mut generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(9));
        assert!(generate_batch(&mut generator, 0).is_empty());
    }
}
