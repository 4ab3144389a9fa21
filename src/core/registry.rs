// src/core/registry.rs
use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

use crate::core::ledger::PasswordLedger;
use crate::core::strength::{self, MIN_PASSWORD_LENGTH};
use crate::generators::PasswordGenerator;
use crate::models::{Confirmation, PasswordSource, Strength, User, UserChange};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} cannot be empty.")]
    EmptyInput(&'static str),

    #[error("Username '{0}' already exists.")]
    DuplicateUsername(String),

    #[error("Username '{0}' not found.")]
    NotFound(String),

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },

    #[error("Character {0:?} is not allowed. Use letters, digits and symbols: {symbols}", symbols = strength::SYMBOL_CHARS)]
    PasswordInvalidCharacter(char),

    #[error("This password is already used by another user. Choose another.")]
    PasswordAlreadyUsed,

    #[error("Same as old username. No change made.")]
    NoOpRename,

    #[error("Deletion of '{0}' cancelled.")]
    DeclinedConfirmation(String),
}

impl RegistryError {
    /// Outcomes the operator chose, as opposed to input that was rejected.
    pub fn is_warning(&self) -> bool {
        matches!(self, RegistryError::NoOpRename | RegistryError::DeclinedConfirmation(_))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Usernames are keyed trimmed and lowercased.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// In-memory store of users plus the ledger of passwords they hold.
pub struct UserRegistry<R: Rng = StdRng> {
    users: BTreeMap<String, User>,
    ledger: PasswordLedger,
    generator: PasswordGenerator<R>,
}

impl UserRegistry<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(PasswordGenerator::new())
    }
}

impl Default for UserRegistry<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UserRegistry<R> {
    pub fn with_generator(generator: PasswordGenerator<R>) -> Self {
        Self {
            users: BTreeMap::new(),
            ledger: PasswordLedger::new(),
            generator,
        }
    }

    pub fn exists(&self, username: &str) -> bool {
        self.users.contains_key(&normalize_username(username))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn register(&mut self, username: &str, source: PasswordSource) -> Result<User> {
        let username = self.available_username(username)?;
        let password = self.obtain_password(source, None)?;

        let user = User {
            strength: strength::evaluate_strength(&password),
            username: username.clone(),
            password,
        };
        self.users.insert(username, user.clone());

        log::info!("Registered user '{}' ({})", user.username, user.strength);
        Ok(user)
    }

    pub fn lookup(&self, username: &str) -> Result<&User> {
        let key = normalize_username(username);
        self.users.get(&key).ok_or(RegistryError::NotFound(key))
    }

    /// Applies one change to an existing user and returns the updated record.
    pub fn edit(&mut self, old_username: &str, change: UserChange) -> Result<User> {
        let old_key = normalize_username(old_username);
        if !self.users.contains_key(&old_key) {
            return Err(RegistryError::NotFound(old_key));
        }

        match change {
            UserChange::RenameTo(new_username) => self.rename(&old_key, &new_username),
            UserChange::SetPassword(source) => self.set_password(&old_key, source),
        }
    }

    pub fn remove(&mut self, username: &str, confirmation: Confirmation) -> Result<User> {
        let key = normalize_username(username);
        if !self.users.contains_key(&key) {
            return Err(RegistryError::NotFound(key));
        }
        if confirmation == Confirmation::Declined {
            log::debug!("Removal of '{}' declined", key);
            return Err(RegistryError::DeclinedConfirmation(key));
        }

        let user = self.users.remove(&key).ok_or_else(|| RegistryError::NotFound(key.clone()))?;
        self.ledger.release(&user.password);
        log::info!("Removed user '{}'", key);
        Ok(user)
    }

    /// Sorted by username; call again to restart.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, Strength)> + '_ {
        self.users
            .values()
            .map(|user| (user.username.as_str(), user.strength))
    }

    /// Checks a manually typed password without changing any state.
    /// `replacing` names the user whose current password may be reused.
    pub fn check_manual_password(&self, password: &str, replacing: Option<&str>) -> Result<()> {
        if password.is_empty() {
            return Err(RegistryError::EmptyInput("Password"));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegistryError::PasswordTooShort { min: MIN_PASSWORD_LENGTH });
        }
        if let Some(bad) = password.chars().find(|c| !strength::is_allowed_char(*c)) {
            return Err(RegistryError::PasswordInvalidCharacter(bad));
        }

        let own_password = replacing
            .and_then(|name| self.users.get(&normalize_username(name)))
            .map(|user| user.password.as_str());
        if self.ledger.contains(password) && own_password != Some(password) {
            return Err(RegistryError::PasswordAlreadyUsed);
        }
        Ok(())
    }

    /// Checks a candidate username for registration or rename.
    pub fn check_new_username(&self, username: &str) -> Result<String> {
        self.available_username(username)
    }

    fn available_username(&self, raw: &str) -> Result<String> {
        let username = normalize_username(raw);
        if username.is_empty() {
            return Err(RegistryError::EmptyInput("Username"));
        }
        if self.users.contains_key(&username) {
            return Err(RegistryError::DuplicateUsername(username));
        }
        Ok(username)
    }

    /// Validates or generates a password and claims it in the ledger.
    fn obtain_password(&mut self, source: PasswordSource, replacing: Option<&str>) -> Result<String> {
        match source {
            PasswordSource::Generate => Ok(self.generator.generate_password(&mut self.ledger)),
            PasswordSource::Manual(password) => {
                self.check_manual_password(&password, replacing)?;
                self.ledger.claim(&password);
                Ok(password)
            }
        }
    }

    fn rename(&mut self, old_key: &str, new_username: &str) -> Result<User> {
        let new_key = normalize_username(new_username);
        if new_key.is_empty() {
            return Err(RegistryError::EmptyInput("Username"));
        }
        if new_key == old_key {
            return Err(RegistryError::NoOpRename);
        }
        let new_key = self.available_username(&new_key)?;

        let mut user = self
            .users
            .remove(old_key)
            .ok_or_else(|| RegistryError::NotFound(old_key.to_string()))?;
        user.username = new_key.clone();
        self.users.insert(new_key, user.clone());

        log::info!("Renamed user '{}' to '{}'", old_key, user.username);
        Ok(user)
    }

    fn set_password(&mut self, key: &str, source: PasswordSource) -> Result<User> {
        // Obtain the replacement first so a rejected candidate leaves the old one in place
        let new_password = self.obtain_password(source, Some(key))?;

        let user = self
            .users
            .get_mut(key)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))?;
        // Keeping the same password must not drop it from the ledger
        if user.password != new_password {
            self.ledger.release(&user.password);
        }
        user.strength = strength::evaluate_strength(&new_password);
        user.password = new_password;

        log::info!("Changed password for '{}' ({})", key, user.strength);
        Ok(user.clone())
    }
}
