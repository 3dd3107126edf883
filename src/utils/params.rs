//! Lenient parsing and truncation helpers for client-supplied values.

/// Parse the leading integer of `raw`, ignoring surrounding whitespace and any
/// trailing non-digit characters (`"12abc"` → 12, `"3.9"` → 3).
///
/// Returns `None` when no digits follow the optional sign. Values too large for
/// an `i64` saturate to `i64::MAX` / `i64::MIN` so callers clamp them like any
/// other out-of-range number.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign_len, digits) = match trimmed.as_bytes().first() {
        Some(b'-') | Some(b'+') => (1, &trimmed[1..]),
        _ => (0, trimmed),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let number = &trimmed[..sign_len + digit_count];
    match number.parse() {
        Ok(value) => Some(value),
        Err(_) if number.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Keep at most `max_chars` characters of `value`
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("7"), Some(7));
        assert_eq!(parse_leading_int("  42  "), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_leading_int_saturates_on_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("+99999999999999999999x"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Paris", 50), "Paris");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("żółw", 2), "żó");
        assert_eq!(truncate_chars("", 5), "");
    }
}
