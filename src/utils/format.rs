// src/utils/format.rs

pub const MASK_CHAR: char = '*';

// One placeholder per character, never the value itself
pub fn mask_password(password: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(password.chars().count())
        .collect()
}

// Left-align to a minimum display width; longer values are kept whole
pub fn pad_cell(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_matches_length() {
        assert_eq!(mask_password("Sup3r$ecret"), "***********");
        assert_eq!(mask_password(""), "");
    }

    #[test]
    fn pads_short_values() {
        assert_eq!(pad_cell("bob", 6), "bob   ");
        assert_eq!(pad_cell("abcdef", 6), "abcdef");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(pad_cell("abcdefghij", 6), "abcdefghij");
        for width in 0..=3 {
            assert_eq!(pad_cell("Strong", width), "Strong");
        }
        assert_eq!(pad_cell("", 0), "");
        assert_eq!(pad_cell("", 2), "  ");
    }
}
