//! # BigNumber
//!
//! A fixed-width bit-pattern primitive and a multi-base numeral codec built on
//! top of it, intended as the foundation for custom fixed-precision numeric
//! types.
//!
//! ## Architecture
//!
//! The crate is built around two components, in dependency order:
//!
//! ### BitArray module
//! Byte-packed storage of a fixed number of bits with two addressing
//! conventions over the same buffer:
//! - **storage order**: direct indexing, bit 0 is the most significant bit of
//!   the first buffer byte
//! - **magnitude order**: reversed byte and bit order, bit 0 is the least
//!   significant bit of the value
//!
//! All indices wrap modulo the width instead of panicking, so loop counters
//! past the width are safe by construction.
//!
//! ### Float128 module
//! A 128-bit specialization that adds string parsing and serialization for
//! bases 2 and 16, with syntax normalization (sign collapsing, decimal
//! delimiter canonicalization) and overflow bounds checking up front. The
//! 128 bits follow the binary128 layout (1 sign / 15 exponent / 112 mantissa
//! bits) but are treated as an opaque pattern here; decimal conversion needs
//! arbitrary-precision arithmetic and is reported as unsupported rather than
//! guessed at.
//!
//! ## Quick Start
//!
//! ```rust
//! use bignumber::Float128;
//!
//! let value = Float128::from_str_radix("00ff00ff00ff00ff00ff00ff00ff00ff", 16).unwrap();
//! assert!(value.bit(0));
//! assert!(!value.bit(8));
//!
//! let rendered = value.to_string_radix(16).unwrap();
//! assert_eq!(rendered, "00ff00ff00ff00ff00ff00ff00ff00ff");
//! ```
//!
//! ## Failure handling
//!
//! Parsing never throws away information: every failure is a distinct
//! [`NumeralError`] variant (unsupported base, malformed numeral, overflow,
//! unimplemented decimal path), and a failed parse never leaves a partially
//! written value behind.

pub mod bitarray;
pub mod float128;

// Re-export the main types for convenience
pub use bitarray::BitArray;
pub use float128::{Float128, NumeralError};

pub mod prelude {
    //! Prelude module for BigNumber.
    //!
    //! Re-exports the commonly used types from the crate, allowing for easier
    //! imports in user code.

    pub use crate::bitarray::*;
    pub use crate::float128::{Float128, NumeralError};
}
