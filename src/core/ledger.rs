// src/core/ledger.rs
use std::collections::HashSet;

/// Every password currently held by some user.
#[derive(Debug, Default, Clone)]
pub struct PasswordLedger {
    in_use: HashSet<String>,
}

impl PasswordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.in_use.contains(password)
    }

    /// Returns false if the password was already claimed.
    pub fn claim(&mut self, password: &str) -> bool {
        self.in_use.insert(password.to_string())
    }

    pub fn release(&mut self, password: &str) -> bool {
        self.in_use.remove(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_and_release() {
        let mut ledger = PasswordLedger::new();
        assert!(!ledger.contains("Hunter2!x"));
        assert!(ledger.claim("Hunter2!x"));
        assert!(!ledger.claim("Hunter2!x"));
        assert!(ledger.contains("Hunter2!x"));

        assert!(ledger.release("Hunter2!x"));
        assert!(!ledger.release("Hunter2!x"));
        assert!(!ledger.contains("Hunter2!x"));
    }
}
