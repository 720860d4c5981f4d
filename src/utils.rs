//! Utility functions for common operations.

/// Upper-case the first character and leave the rest as-is.
///
/// Characters without an upper-case form (digits, punctuation) pass through.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_lowercase_word() {
        assert_eq!(capitalize_first("apple"), "Apple");
    }

    #[test]
    fn test_capitalize_first_keeps_remainder() {
        assert_eq!(capitalize_first("mcIntosh"), "McIntosh");
    }

    #[test]
    fn test_capitalize_first_non_letter() {
        assert_eq!(capitalize_first("3 pears"), "3 pears");
    }

    #[test]
    fn test_capitalize_first_multibyte() {
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first("ßx"), "SSx");
    }
}
