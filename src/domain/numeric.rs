//! Numeric literal validation for partially typed operands.
//!
//! Operands are kept as the strings the user typed. Whether a `.` may be
//! appended is decided by the same string-to-number rules a browser applies:
//! surrounding whitespace is ignored, an empty string counts as zero, and
//! `Infinity` and `0x`/`0o`/`0b` integers are accepted.

/// Returns true when `s` converts to a number (i.e. is not `NaN`).
pub fn is_numeric_literal(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return true;
    }

    if is_radix_integer(trimmed) {
        return true;
    }

    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    unsigned == "Infinity" || is_decimal_literal(unsigned)
}

/// `0x1F`, `0o17`, `0b101`; no sign allowed
fn is_radix_integer(s: &str) -> bool {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return false;
    }
    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return false,
    };
    let digits = chars.as_str();
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// digits [ "." digits ] [ exponent ] with at least one digit in the mantissa
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp
                .strip_prefix('+')
                .or_else(|| exp.strip_prefix('-'))
                .unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("0")]
    #[case("12")]
    #[case("12.")]
    #[case("12.5")]
    #[case(".5")]
    #[case("-3")]
    #[case("+3.")]
    #[case("1e5")]
    #[case("1e+21")]
    #[case("2.5E-3")]
    #[case("Infinity")]
    #[case("-Infinity")]
    #[case("0x1f")]
    #[case("0b101")]
    #[case(" 42 ")]
    fn test_numeric(#[case] input: &str) {
        assert!(is_numeric_literal(input), "{input:?} should be numeric");
    }

    #[rstest]
    #[case(".")]
    #[case("-")]
    #[case("+")]
    #[case("-.")]
    #[case("+.")]
    #[case("1.2.")]
    #[case("12..")]
    #[case("1e")]
    #[case("1e+21.")]
    #[case("Infinity.")]
    #[case("inf")]
    #[case("abc")]
    #[case("--1")]
    #[case("-0x1f")]
    #[case("0x")]
    fn test_not_numeric(#[case] input: &str) {
        assert!(!is_numeric_literal(input), "{input:?} should not be numeric");
    }
}
