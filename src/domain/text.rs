use unicode_width::UnicodeWidthChar;

/// Longest suffix of `s` whose display width fits in `width` columns.
/// Long numbers are shown by their least significant digits.
pub fn tail_to_width(s: &str, width: usize) -> &str {
    if width == 0 {
        return "";
    }

    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        used += char_width;
        start = idx;
    }

    &s[start..]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tail_to_width_fits() {
        assert_eq!(tail_to_width("12345", 10), "12345");
        assert_eq!(tail_to_width("", 3), "");
    }

    #[test]
    fn test_tail_to_width_truncates_from_left() {
        assert_eq!(tail_to_width("1234567890", 4), "7890");
    }

    #[test]
    fn test_tail_to_width_zero() {
        assert_eq!(tail_to_width("123", 0), "");
    }

    #[test]
    fn test_tail_to_width_wide_chars() {
        // each kana is two columns wide
        assert_eq!(tail_to_width("あいう", 4), "いう");
        assert_eq!(tail_to_width("あいう", 5), "いう");
    }
}
