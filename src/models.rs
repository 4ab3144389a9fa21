// src/models.rs
use std::fmt;

/// Rating derived from how many character classes a password contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) strength: Strength,
}

impl User {
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored plaintext. Display code should go through `utils::mask_password`.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }
}

// Where a new password comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordSource {
    Generate,
    Manual(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    RenameTo(String),
    SetPassword(PasswordSource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Affirmed,
    Declined,
}

impl Confirmation {
    /// Only `y` (any case, surrounding whitespace ignored) affirms.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("y") {
            Confirmation::Affirmed
        } else {
            Confirmation::Declined
        }
    }
}
