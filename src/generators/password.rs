use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::ledger::PasswordLedger;
use crate::core::strength::{self, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::models::Strength;

pub const MIN_EXTRA_CHARS: usize = 4;
pub const MAX_EXTRA_CHARS: usize = 12;

pub struct PasswordGenerator<R: Rng = StdRng> {
    rng: R,
    alphabet: Vec<u8>,
}

impl PasswordGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        let alphabet = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
        PasswordGenerator { rng, alphabet }
    }

    /// Produces a password that is not in `ledger` and claims it there.
    pub fn generate_password(&mut self, ledger: &mut PasswordLedger) -> String {
        loop {
            let candidate = self.candidate();
            if ledger.claim(&candidate) {
                return candidate;
            }
            log::debug!("Generated password collided with the ledger, retrying");
        }
    }

    pub fn analyze_password_strength(&self, password: &str) -> Strength {
        strength::evaluate_strength(password)
    }

    // One of each class, 4-12 extras from the full alphabet, shuffled
    fn candidate(&mut self) -> String {
        let mut chars = vec![
            Self::pick(&mut self.rng, UPPERCASE),
            Self::pick(&mut self.rng, LOWERCASE),
            Self::pick(&mut self.rng, DIGITS),
            Self::pick(&mut self.rng, SYMBOLS),
        ];

        let extra_length = self.rng.gen_range(MIN_EXTRA_CHARS..=MAX_EXTRA_CHARS);
        let dist = Uniform::from(0..self.alphabet.len());
        chars.extend((0..extra_length).map(|_| self.alphabet[dist.sample(&mut self.rng)]));

        chars.shuffle(&mut self.rng);
        chars.into_iter().map(char::from).collect()
    }

    fn pick(rng: &mut R, set: &[u8]) -> u8 {
        set[rng.gen_range(0..set.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> PasswordGenerator<StdRng> {
        PasswordGenerator::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generated_passwords_meet_the_policy() {
        let mut generator = seeded(7);
        let mut ledger = PasswordLedger::new();

        for _ in 0..500 {
            let password = generator.generate_password(&mut ledger);
            assert!((8..=16).contains(&password.len()), "bad length: {password}");
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(strength::is_symbol));
            assert!(password.chars().all(strength::is_allowed_char));
            assert_eq!(generator.analyze_password_strength(&password), Strength::Strong);
        }
    }

    #[test]
    fn skips_passwords_already_in_the_ledger() {
        // Same seed yields the same first candidate
        let mut ledger = PasswordLedger::new();
        let first = seeded(42).generate_password(&mut ledger);
        assert!(ledger.contains(&first));

        let second = seeded(42).generate_password(&mut ledger);
        assert_ne!(first, second);
        assert!(ledger.contains(&first));
        assert!(ledger.contains(&second));
    }

    #[test]
    fn lengths_cover_the_whole_range() {
        let mut generator = seeded(1);
        let mut ledger = PasswordLedger::new();
        let lengths: std::collections::HashSet<usize> = (0..2000)
            .map(|_| generator.generate_password(&mut ledger).len())
            .collect();

        assert!(lengths.contains(&8));
        assert!(lengths.contains(&16));
        assert!(lengths.iter().all(|len| (8..=16).contains(len)));
    }
}
