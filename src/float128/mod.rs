use std::fmt;

use thiserror::Error;

use crate::bitarray::BitArray;

pub mod convert;
pub mod syntax;

pub use convert::{BIT_GLYPHS, HEX_GROUP_SEPARATOR, MAX_BINARY_DIGITS, MAX_HEX_DIGITS};

/// Logical bit width of [`Float128`].
pub const TOTAL_BITS: usize = 128;
/// Byte width of the backing buffer.
pub const TOTAL_BYTES: usize = 16;

/// A 128-bit value stored as an opaque bit pattern.
///
/// The intended layout is binary128: 1 sign bit, 15 exponent bits and 112
/// mantissa bits, most significant first in storage order. The fields are not
/// decomposed here; the pattern is filled either bit by bit or through the
/// base-conversion pipeline in [`convert`], and a failed parse never leaves a
/// partially written value behind.
///
/// Single-bit accessors use magnitude order (bit 0 is the least significant
/// bit) with wrap-around indexing, matching the conventions of [`BitArray`].
#[derive(Clone, PartialEq, Eq)]
pub struct Float128 {
    bits: BitArray,
}

impl Float128 {
    /// Creates a zero-initialized value.
    pub fn new() -> Self {
        Self {
            bits: BitArray::new(TOTAL_BITS),
        }
    }

    /// Creates a value with every bit set to 0.
    pub fn all_zero() -> Self {
        Self::new()
    }

    /// Creates a value with every bit set to 1.
    pub fn all_one() -> Self {
        Self {
            bits: BitArray::ones(TOTAL_BITS),
        }
    }

    /// Reads bit `i` in magnitude order. Indices wrap modulo 128.
    pub fn bit(&self, i: usize) -> bool {
        self.bits.magnitude().bit(i)
    }

    /// Sets bit `i` in magnitude order. Indices wrap modulo 128.
    pub fn set_bit(&mut self, i: usize, state: bool) {
        self.bits.magnitude_mut().set_bit(i, state);
    }

    pub fn turn_on(&mut self, i: usize) {
        self.bits.magnitude_mut().turn_on(i);
    }

    pub fn turn_off(&mut self, i: usize) {
        self.bits.magnitude_mut().turn_off(i);
    }

    /// The raw buffer in storage order (most significant byte first).
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// The underlying bit storage, for view-based access.
    pub fn bit_array(&self) -> &BitArray {
        &self.bits
    }
}

impl Default for Float128 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Float128(")?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Failure kinds of the numeral pipeline.
///
/// Every caller gets the specific kind rather than a flattened error string:
/// an unsupported base signals caller misuse, malformed input and overflow
/// are recoverable by correcting the input, and the decimal path is reported
/// as unimplemented instead of silently producing a wrong pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Caller contract violation: only bases 2, 10 and 16 exist.
    #[error("base {0} is not supported, expected 2, 10 or 16")]
    UnsupportedBase(u32),

    /// The input held no digits after trimming and sign collapsing.
    #[error("numeral is empty")]
    EmptyInput,

    /// A character outside the digit set of the requested base.
    #[error("character {ch:?} is not a valid digit in base {base}")]
    InvalidDigit { ch: char, base: u32 },

    /// More than one decimal delimiter.
    #[error("numeral contains more than one decimal delimiter")]
    RepeatedDelimiter,

    /// A `,` or `.` in a base whose numerals are integral bit patterns.
    #[error("decimal delimiter is not allowed in base {base}")]
    DelimiterOutsideDecimal { base: u32 },

    /// A sign on a base whose numerals are raw unsigned bit patterns.
    #[error("base {base} numerals are raw bit patterns and cannot carry a sign")]
    SignedPattern { base: u32 },

    /// The numeral cannot fit in 128 bits.
    #[error("numeral has {len} digits, at most {max} fit in 128 bits")]
    Overflow { len: usize, max: usize },

    /// Decimal conversion needs arbitrary-precision arithmetic and a rounding
    /// policy; neither is implemented yet.
    #[error("decimal conversion is not implemented")]
    DecimalUnimplemented,
}
