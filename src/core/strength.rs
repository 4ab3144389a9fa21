// src/core/strength.rs
use crate::models::Strength;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// Printable ASCII punctuation.
pub const SYMBOL_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const SYMBOLS: &[u8] = SYMBOL_CHARS.as_bytes();

/// Floor for manually entered passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Letters, digits and the symbol set. Whitespace and non-ASCII are rejected.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_symbol(c)
}

// Score one point per character class present
pub fn evaluate_strength(password: &str) -> Strength {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(is_symbol);

    let points = [has_uppercase, has_lowercase, has_digit, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();

    match points {
        4 => Strength::Strong,
        3 => Strength::Medium,
        _ => Strength::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_by_character_classes() {
        assert_eq!(evaluate_strength("Ab1!xxxx"), Strength::Strong);
        assert_eq!(evaluate_strength("abcdefgh"), Strength::Weak);
        assert_eq!(evaluate_strength("Abcdefgh1"), Strength::Medium);
        assert_eq!(evaluate_strength("Sup3r$ecret"), Strength::Strong);
    }

    #[test]
    fn two_classes_or_fewer_is_weak() {
        assert_eq!(evaluate_strength("ABCdefgh"), Strength::Weak);
        assert_eq!(evaluate_strength("12345678"), Strength::Weak);
        assert_eq!(evaluate_strength(""), Strength::Weak);
    }

    #[test]
    fn symbols_outside_the_set_do_not_count() {
        // space and non-ascii are not symbols
        assert_eq!(evaluate_strength("Abc 1defg"), Strength::Medium);
        assert_eq!(evaluate_strength("Abc1défg"), Strength::Medium);
        assert_eq!(evaluate_strength("Abc1~efg"), Strength::Strong);
    }

    #[test]
    fn allowed_alphabet() {
        assert!(is_allowed_char('a'));
        assert!(is_allowed_char('Z'));
        assert!(is_allowed_char('7'));
        assert!(is_allowed_char('\\'));
        assert!(is_allowed_char('`'));
        assert!(!is_allowed_char(' '));
        assert!(!is_allowed_char('\t'));
        assert!(!is_allowed_char('é'));
        assert!(!is_allowed_char('€'));
    }
}
