//! String ⇄ bit-pattern conversion for [`Float128`].
//!
//! Bases 2 and 16 describe the raw 128-bit pattern directly: the numeral is
//! normalized, bounds-checked against the width, left-padded with zeros and
//! packed big-endian into the buffer (first digit group becomes the first
//! storage byte). Base 10 is accepted by the syntax layer but conversion is
//! reported as [`NumeralError::DecimalUnimplemented`]: a correct decimal ⇄
//! binary128 conversion needs arbitrary-precision arithmetic and a rounding
//! policy, and guessing one here would corrupt values silently.

use super::syntax::normalize;
use super::{Float128, NumeralError, TOTAL_BITS, TOTAL_BYTES};

/// Maximum digit count of a base 2 numeral: one digit per bit.
pub const MAX_BINARY_DIGITS: usize = TOTAL_BITS;
/// Maximum digit count of a base 16 numeral: two digits per byte.
pub const MAX_HEX_DIGITS: usize = TOTAL_BYTES * 2;

/// Glyphs used when rendering bits, indexed by bit value.
///
/// A set bit renders as `'1'`. Earlier revisions of this pipeline carried the
/// inverted mapping; the choice is pinned here as a named constant so the
/// convention is explicit and tested rather than implied.
pub const BIT_GLYPHS: [char; 2] = ['0', '1'];

/// Separator between rendered hex byte groups.
///
/// Fixed to the empty string so [`Float128::to_string_radix`] emits the
/// canonical 32-digit form that feeds back through the parser unchanged.
/// A grouped pretty format would change only this constant.
pub const HEX_GROUP_SEPARATOR: &str = "";

/// Checks a canonical numeral that must describe a raw unsigned pattern:
/// no sign, and no more digits than the width can hold.
fn raw_digits(canonical: &str, base: u32, max: usize) -> Result<&str, NumeralError> {
    if canonical.starts_with('-') {
        return Err(NumeralError::SignedPattern { base });
    }
    if canonical.len() > max {
        return Err(NumeralError::Overflow {
            len: canonical.len(),
            max,
        });
    }
    Ok(canonical)
}

/// Digit value of a canonical (lowercase, validated) hex digit byte.
fn digit_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'a' + 10,
    }
}

impl Float128 {
    /// Parses a numeral string in base 2, 10 or 16 into a 128-bit pattern.
    ///
    /// The input goes through syntax normalization (whitespace trim, sign
    /// collapsing, digit validation, delimiter canonicalization), then an
    /// overflow pre-check against the base's maximum digit count, then the
    /// base-specific packing. Every failure surfaces as a distinct
    /// [`NumeralError`] before any pattern is written, so a failed parse is
    /// atomic.
    ///
    /// Bases 2 and 16 accept up to [`MAX_BINARY_DIGITS`] and
    /// [`MAX_HEX_DIGITS`] digits respectively; shorter numerals are
    /// left-padded with zeros, so `"ff"` and `"00ff"` parse identically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bignumber::{Float128, NumeralError};
    ///
    /// let value = Float128::from_str_radix("1010", 2).unwrap();
    /// assert!(value.bit(1) && value.bit(3));
    ///
    /// assert_eq!(
    ///     Float128::from_str_radix("12g3", 16),
    ///     Err(NumeralError::InvalidDigit { ch: 'g', base: 16 })
    /// );
    /// ```
    pub fn from_str_radix(text: &str, base: u32) -> Result<Self, NumeralError> {
        let canonical = normalize(text, base)?;
        match base {
            2 => Ok(Self::from_binary_digits(raw_digits(
                &canonical,
                2,
                MAX_BINARY_DIGITS,
            )?)),
            16 => Ok(Self::from_hex_digits(raw_digits(
                &canonical,
                16,
                MAX_HEX_DIGITS,
            )?)),
            10 => Err(NumeralError::DecimalUnimplemented),
            other => Err(NumeralError::UnsupportedBase(other)),
        }
    }

    /// Packs at most 128 canonical binary digits, most significant first.
    fn from_binary_digits(digits: &str) -> Self {
        let mut value = Self::new();
        let padded = format!("{digits:0>MAX_BINARY_DIGITS$}");
        for (i, group) in padded.as_bytes().chunks(8).enumerate() {
            let byte = group
                .iter()
                .fold(0u8, |acc, &digit| (acc << 1) | digit_value(digit));
            value.bits.storage_mut().set_byte(i, byte);
        }
        value
    }

    /// Packs at most 32 canonical hex digits, most significant first.
    fn from_hex_digits(digits: &str) -> Self {
        let mut value = Self::new();
        let padded = format!("{digits:0>MAX_HEX_DIGITS$}");
        for (i, pair) in padded.as_bytes().chunks(2).enumerate() {
            let byte = (digit_value(pair[0]) << 4) | digit_value(pair[1]);
            value.bits.storage_mut().set_byte(i, byte);
        }
        value
    }

    /// Renders the pattern as a numeral string in base 2 or 16.
    ///
    /// Base 2 yields 128 characters, storage-order bits through
    /// [`BIT_GLYPHS`]; base 16 yields the 32-digit lowercase canonical form.
    /// Both feed back through [`from_str_radix`](Self::from_str_radix)
    /// bit-identically. Base 10 reports
    /// [`NumeralError::DecimalUnimplemented`]; any other base is a contract
    /// violation.
    pub fn to_string_radix(&self, base: u32) -> Result<String, NumeralError> {
        match base {
            2 => Ok((0..TOTAL_BITS)
                .map(|i| BIT_GLYPHS[usize::from(self.bits.storage().bit(i))])
                .collect()),
            16 => Ok(self
                .as_bytes()
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(HEX_GROUP_SEPARATOR)),
            10 => Err(NumeralError::DecimalUnimplemented),
            other => Err(NumeralError::UnsupportedBase(other)),
        }
    }
}
