//! Syntax normalization for numeral strings.
//!
//! The pass canonicalizes a raw numeral before any conversion happens: it
//! trims whitespace, collapses runs of leading signs, validates every digit
//! against the requested base and normalizes the decimal delimiter. The
//! output is a canonical string containing only an optional leading `-`,
//! lowercase digits valid for the base, and at most one `.` (base 10 only).
//!
//! Validation is eager and total: a string that survives this pass needs no
//! further character checks downstream.

use super::NumeralError;

/// Canonical form of the decimal delimiter; `,` is normalized to this.
pub const CANONICAL_DELIMITER: char = '.';

fn is_delimiter(ch: char) -> bool {
    ch == ',' || ch == '.'
}

/// Normalizes `text` into canonical numeral form for `base`.
///
/// Rules:
/// - leading and trailing whitespace is trimmed; an empty remainder fails
/// - a run of leading `+`/`-` collapses by parity of the minus signs, so
///   `"--5"` and `"5"` normalize identically and `"+-5"` keeps one `-`
/// - every remaining character must be a digit whose value is below `base`
///   (so `9` fails base 2 and `g` fails everywhere), or a delimiter `,`/`.`,
///   accepted once and only for base 10, always rewritten to `.`
/// - hex digits are lowercased
/// - a trailing delimiter gets a `0` appended, so `"12."` becomes `"12.0"`
///
/// # Examples
///
/// ```rust
/// use bignumber::float128::syntax::normalize;
///
/// assert_eq!(normalize("  --12,  ", 10).unwrap(), "12.0");
/// assert_eq!(normalize("+-FF", 16).unwrap(), "-ff");
/// ```
pub fn normalize(text: &str, base: u32) -> Result<String, NumeralError> {
    if !matches!(base, 2 | 10 | 16) {
        return Err(NumeralError::UnsupportedBase(base));
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(NumeralError::EmptyInput);
    }

    let mut chars = text.chars().peekable();
    let mut negative = false;
    while let Some(&ch) = chars.peek() {
        match ch {
            '-' => negative = !negative,
            '+' => {}
            _ => break,
        }
        chars.next();
    }

    let mut out = String::with_capacity(text.len() + 2);
    if negative {
        out.push('-');
    }

    let mut delimiter_seen = false;
    let mut body_seen = false;
    for ch in chars {
        if is_delimiter(ch) {
            if base != 10 {
                return Err(NumeralError::DelimiterOutsideDecimal { base });
            }
            if delimiter_seen {
                return Err(NumeralError::RepeatedDelimiter);
            }
            delimiter_seen = true;
            out.push(CANONICAL_DELIMITER);
        } else {
            // The recognized digit set is 0-9/a-f; anything outside it fails
            // the lookup, anything inside it must still be below the base.
            let value = ch
                .to_digit(16)
                .ok_or(NumeralError::InvalidDigit { ch, base })?;
            if value >= base {
                return Err(NumeralError::InvalidDigit { ch, base });
            }
            out.push(ch.to_ascii_lowercase());
        }
        body_seen = true;
    }

    if !body_seen {
        return Err(NumeralError::EmptyInput);
    }
    if out.ends_with(CANONICAL_DELIMITER) {
        out.push('0');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rstest::rstest;

    use super::*;
    use crate::tests::*;

    #[test]
    fn test_sign_collapsing() {
        assert_eq!(normalize("--5", 10).unwrap(), normalize("5", 10).unwrap());
        assert_eq!(normalize("+-5", 10).unwrap(), normalize("-5", 10).unwrap());
        assert_eq!(normalize("5", 10).unwrap(), "5");
        assert_eq!(normalize("-5", 10).unwrap(), "-5");
        assert_eq!(normalize("+++5", 10).unwrap(), "5");
        assert_eq!(normalize("---5", 10).unwrap(), "-5");
    }

    #[test]
    fn test_delimiter_rule() {
        assert_eq!(normalize("12,", 10).unwrap(), "12.0");
        assert_eq!(normalize("12.", 10).unwrap(), "12.0");
        assert_eq!(normalize("3,14", 10).unwrap(), "3.14");

        assert_eq!(
            normalize("1.2.3", 10),
            Err(NumeralError::RepeatedDelimiter)
        );
        assert_eq!(
            normalize("1,2,3", 10),
            Err(NumeralError::RepeatedDelimiter)
        );
        assert_eq!(
            normalize("10.1", 2),
            Err(NumeralError::DelimiterOutsideDecimal { base: 2 })
        );
        assert_eq!(
            normalize("ff,0", 16),
            Err(NumeralError::DelimiterOutsideDecimal { base: 16 })
        );
    }

    #[test]
    fn test_digit_membership() {
        assert_eq!(normalize("1010", 2).unwrap(), "1010");
        assert_eq!(normalize("0fF", 16).unwrap(), "0ff");

        // Recognized digits above the base fail like unknown characters.
        assert_eq!(
            normalize("89", 2),
            Err(NumeralError::InvalidDigit { ch: '8', base: 2 })
        );
        assert_eq!(
            normalize("12G3", 16),
            Err(NumeralError::InvalidDigit { ch: 'G', base: 16 })
        );
        assert_eq!(
            normalize("12a", 10),
            Err(NumeralError::InvalidDigit { ch: 'a', base: 10 })
        );
    }

    #[test]
    fn test_whitespace_and_empty() {
        assert_eq!(normalize("  42  ", 10).unwrap(), "42");
        assert_eq!(normalize("\t1010\n", 2).unwrap(), "1010");

        assert_eq!(normalize("", 10), Err(NumeralError::EmptyInput));
        assert_eq!(normalize("   ", 10), Err(NumeralError::EmptyInput));
        // Signs alone carry no value.
        assert_eq!(normalize("--", 10), Err(NumeralError::EmptyInput));
        assert_eq!(normalize("+", 10), Err(NumeralError::EmptyInput));
    }

    #[test]
    fn test_unsupported_base() {
        assert_eq!(normalize("123", 7), Err(NumeralError::UnsupportedBase(7)));
        assert_eq!(normalize("123", 0), Err(NumeralError::UnsupportedBase(0)));
    }

    #[rstest]
    fn test_canonical_is_fixed_point(mut rng: impl Rng, n_experiments: usize) {
        for _ in 0..n_experiments / 10 {
            let len = rng.random_range(1..64);
            let text = random_hex_string(&mut rng, len);
            let canonical = normalize(&text, 16).unwrap();
            assert_eq!(normalize(&canonical, 16).unwrap(), canonical);
        }
    }
}
