#[cfg(feature = "bigint")]
use num_bigint::BigUint;

pub mod views;

pub use views::{Bits, BitsMut, SINGLE_BIT};

/// Byte-packed storage of a fixed number of bits.
///
/// The width is fixed at construction and the backing buffer always holds
/// exactly `total_bits.div_ceil(8)` bytes. Bits are addressed through one of
/// two views sharing this buffer:
///
/// - [`storage`](Self::storage): direct order, bit 0 is the most significant
///   bit of the first buffer byte
/// - [`magnitude`](Self::magnitude): reversed byte and bit order, bit 0 is the
///   least significant bit of the value
///
/// Numeric encoding treats the buffer as big-endian, while position
/// arithmetic over a value's magnitude is naturally least-significant-first;
/// the two views let both coexist without duplicating state.
///
/// Out-of-range indices wrap modulo the width rather than panicking, so
/// callers may pass loop counters past the width by design. A width of zero
/// is legal: there is no storage, reads yield `false`/`0` and writes are
/// no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    total_bits: usize,
    bytes: Vec<u8>,
}

impl BitArray {
    /// Creates an array of `total_bits` zeroed bits.
    pub fn new(total_bits: usize) -> Self {
        Self {
            total_bits,
            bytes: vec![0u8; total_bits.div_ceil(8)],
        }
    }

    /// Creates an array with every bit set to 0. Same as [`new`](Self::new),
    /// named for symmetry with [`ones`](Self::ones).
    pub fn zeros(total_bits: usize) -> Self {
        Self::new(total_bits)
    }

    /// Creates an array with every bit set to 1.
    ///
    /// Every backing byte is filled with `0xFF`, so all `total_bits` bits
    /// read as 1 under either view. When the width is not a byte multiple
    /// the padding bits of the final byte are set too, but they are
    /// unreachable: indices wrap modulo the width before use.
    pub fn ones(total_bits: usize) -> Self {
        Self {
            total_bits,
            bytes: vec![0xffu8; total_bits.div_ceil(8)],
        }
    }

    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub fn total_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_bits == 0
    }

    /// The raw buffer in storage order (most significant byte first).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Direct view: byte 0 is the first buffer byte, bit 0 its most
    /// significant bit.
    pub fn storage(&self) -> Bits<'_> {
        Bits::storage(self)
    }

    /// Magnitude view: byte 0 is the last buffer byte, bit 0 the least
    /// significant bit of the value.
    pub fn magnitude(&self) -> Bits<'_> {
        Bits::magnitude(self)
    }

    pub fn storage_mut(&mut self) -> BitsMut<'_> {
        BitsMut::storage(self)
    }

    pub fn magnitude_mut(&mut self) -> BitsMut<'_> {
        BitsMut::magnitude(self)
    }

    /// The value of the bit pattern read in magnitude order.
    #[cfg(feature = "bigint")]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Builds an array of `total_bits` bits holding `value` right-aligned in
    /// magnitude order. Returns `None` when the value needs more bits than
    /// the requested width.
    #[cfg(feature = "bigint")]
    pub fn from_biguint(value: &BigUint, total_bits: usize) -> Option<Self> {
        let mut result = Self::new(total_bits);
        if value.bits() == 0 {
            return Some(result);
        }
        if value.bits() > total_bits as u64 {
            return None;
        }

        let be = value.to_bytes_be();
        let offset = result.bytes.len() - be.len();
        result.bytes[offset..].copy_from_slice(&be);
        Some(result)
    }
}
