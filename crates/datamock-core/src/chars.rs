//! Character pools shared by the sampling layer and the consumers.

pub const NUMBERS: &str = "0123456789";
pub const CHARS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHARS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const HEX_POOL: &str = "0123456789abcdef";
pub const SYMBOLS: &str = "!@#$%^&*()[]";

/// Lowercase letters, uppercase letters and digits.
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_consistent() {
        assert_eq!(CHARS_UPPER, CHARS_LOWER.to_uppercase());
        assert_eq!(HEX_POOL, format!("{NUMBERS}abcdef"));
        assert_eq!(ALPHANUMERIC, format!("{CHARS_LOWER}{CHARS_UPPER}{NUMBERS}"));
    }
}
