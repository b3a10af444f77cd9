/// Canonicalize a raw phone string into its comparison key.
///
/// Strips every non-digit character and keeps the last 10 digits; fewer than
/// 10 digits returns whatever remains, and absent input returns the empty
/// string. The key is used only for equality comparison; the stored column
/// keeps the raw string as submitted. This never fails.
pub fn normalize_phone(raw: Option<&str>) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let start = digits.len().saturating_sub(10);
    digits[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_country_code() {
        assert_eq!(normalize_phone(Some("+91 98765-43210")), "9876543210");
    }

    #[test]
    fn keeps_last_ten_digits_of_long_input() {
        assert_eq!(normalize_phone(Some("001-800-98765-43210")), "9876543210");
    }

    #[test]
    fn short_input_returns_remaining_digits() {
        assert_eq!(normalize_phone(Some("call 42")), "42");
    }

    #[test]
    fn absent_input_yields_empty_key() {
        assert_eq!(normalize_phone(None), "");
        assert_eq!(normalize_phone(Some("")), "");
        assert_eq!(normalize_phone(Some("no digits")), "");
    }

    #[test]
    fn output_is_digits_only_and_at_most_ten_long() {
        for input in ["(555) 123-4567 ext. 89", "++--12", "9876543210987654"] {
            let key = normalize_phone(Some(input));
            assert!(key.len() <= 10);
            assert!(key.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
