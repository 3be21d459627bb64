use crate::bitarray::BitArray;

/// Byte values with exactly one bit set, indexed by position within a byte.
/// Position 0 is the most significant bit, matching storage order.
pub const SINGLE_BIT: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// The two addressing conventions over one buffer.
///
/// Storage order indexes the buffer as laid out in memory: bit 0 is the most
/// significant bit of the first byte. Magnitude order reverses both the byte
/// order and the bit order within each byte, so bit 0 is the least
/// significant bit of the value. The two flips are always applied together,
/// never independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Storage,
    Magnitude,
}

impl Order {
    fn byte_index(self, i: usize, total_bytes: usize) -> usize {
        let i = i % total_bytes;
        match self {
            Order::Storage => i,
            Order::Magnitude => total_bytes - 1 - i,
        }
    }

    /// Resolves a wrapped bit index to the byte holding it and its single-bit
    /// mask within that byte.
    fn bit_slot(self, i: usize, total_bits: usize, total_bytes: usize) -> (usize, u8) {
        let i = i % total_bits;
        match self {
            Order::Storage => (i / 8, SINGLE_BIT[i % 8]),
            Order::Magnitude => (total_bytes - 1 - i / 8, SINGLE_BIT[7 - i % 8]),
        }
    }
}

/// Read-only view of a [`BitArray`] under one addressing convention.
///
/// Obtained from [`BitArray::storage`] or [`BitArray::magnitude`]. Indices
/// wrap modulo the width; a zero-width array reads as all zeros.
#[derive(Debug, Clone, Copy)]
pub struct Bits<'a> {
    array: &'a BitArray,
    order: Order,
}

impl<'a> Bits<'a> {
    pub(super) fn storage(array: &'a BitArray) -> Self {
        Self {
            array,
            order: Order::Storage,
        }
    }

    pub(super) fn magnitude(array: &'a BitArray) -> Self {
        Self {
            array,
            order: Order::Magnitude,
        }
    }

    pub fn bit(&self, i: usize) -> bool {
        if self.array.total_bits() == 0 {
            return false;
        }
        let (byte, mask) = self
            .order
            .bit_slot(i, self.array.total_bits(), self.array.total_bytes());
        self.array.as_bytes()[byte] & mask != 0
    }

    pub fn byte(&self, i: usize) -> u8 {
        if self.array.total_bytes() == 0 {
            return 0;
        }
        self.array.as_bytes()[self.order.byte_index(i, self.array.total_bytes())]
    }
}

/// Mutable view of a [`BitArray`] under one addressing convention.
///
/// Obtained from [`BitArray::storage_mut`] or [`BitArray::magnitude_mut`].
#[derive(Debug)]
pub struct BitsMut<'a> {
    array: &'a mut BitArray,
    order: Order,
}

impl<'a> BitsMut<'a> {
    pub(super) fn storage(array: &'a mut BitArray) -> Self {
        Self {
            array,
            order: Order::Storage,
        }
    }

    pub(super) fn magnitude(array: &'a mut BitArray) -> Self {
        Self {
            array,
            order: Order::Magnitude,
        }
    }

    pub fn bit(&self, i: usize) -> bool {
        if self.array.total_bits() == 0 {
            return false;
        }
        let (byte, mask) = self
            .order
            .bit_slot(i, self.array.total_bits(), self.array.total_bytes());
        self.array.as_bytes()[byte] & mask != 0
    }

    pub fn set_bit(&mut self, i: usize, state: bool) {
        if state {
            self.turn_on(i);
        } else {
            self.turn_off(i);
        }
    }

    pub fn turn_on(&mut self, i: usize) {
        if self.array.total_bits() == 0 {
            return;
        }
        let (byte, mask) = self
            .order
            .bit_slot(i, self.array.total_bits(), self.array.total_bytes());
        self.array.bytes_mut()[byte] |= mask;
    }

    pub fn turn_off(&mut self, i: usize) {
        if self.array.total_bits() == 0 {
            return;
        }
        let (byte, mask) = self
            .order
            .bit_slot(i, self.array.total_bits(), self.array.total_bytes());
        self.array.bytes_mut()[byte] &= !mask;
    }

    pub fn byte(&self, i: usize) -> u8 {
        if self.array.total_bytes() == 0 {
            return 0;
        }
        self.array.as_bytes()[self.order.byte_index(i, self.array.total_bytes())]
    }

    pub fn set_byte(&mut self, i: usize, value: u8) {
        if self.array.total_bytes() == 0 {
            return;
        }
        let index = self.order.byte_index(i, self.array.total_bytes());
        self.array.bytes_mut()[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rstest::rstest;

    use super::*;
    use crate::tests::*;

    #[test]
    fn test_single_bit_table() {
        for (position, &mask) in SINGLE_BIT.iter().enumerate() {
            assert_eq!(mask, 128 >> position);
        }
    }

    #[test]
    fn test_known_pattern() {
        let mut array = BitArray::new(16);
        array.storage_mut().set_byte(0, 0b1000_0000);
        array.storage_mut().set_byte(1, 0b0000_0001);

        let storage = array.storage();
        assert!(storage.bit(0));
        assert!(storage.bit(15));
        assert!(!storage.bit(1));
        assert!(!storage.bit(8));

        let magnitude = array.magnitude();
        assert!(magnitude.bit(0));
        assert!(magnitude.bit(15));
        assert!(!magnitude.bit(1));
        assert!(!magnitude.bit(7));
    }

    /// For byte-aligned widths the two conventions are exact mirrors of each
    /// other: magnitude bit `i` is storage bit `width - 1 - i`.
    #[rstest]
    fn test_mirror_law(mut rng: impl Rng, n_experiments: usize) {
        for _ in 0..n_experiments / 100 {
            let n_bytes = rng.random_range(1..32);
            let bytes = random_bytes(&mut rng, n_bytes);
            let mut array = BitArray::new(n_bytes * 8);
            for (i, &byte) in bytes.iter().enumerate() {
                array.storage_mut().set_byte(i, byte);
            }

            let total = array.total_bits();
            for i in 0..total {
                assert_eq!(array.magnitude().bit(i), array.storage().bit(total - 1 - i));
            }
        }
    }

    #[rstest]
    fn test_index_wrap(mut rng: impl Rng, n_experiments: usize) {
        let mut array = BitArray::new(128);
        array.magnitude_mut().turn_on(3);

        for _ in 0..n_experiments {
            let i = rng.random_range(0..128);
            let laps = rng.random_range(1..8);
            assert_eq!(array.magnitude().bit(i), array.magnitude().bit(i + laps * 128));
            assert_eq!(array.storage().bit(i), array.storage().bit(i + laps * 128));
        }

        let byte = array.magnitude().byte(0);
        assert_eq!(array.magnitude().byte(16), byte);
        assert_eq!(array.storage().byte(16), array.storage().byte(0));
    }

    #[test]
    fn test_cross_view_write() {
        let mut array = BitArray::new(128);

        // Magnitude bit 0 is the low bit of the last storage byte.
        array.magnitude_mut().turn_on(0);
        assert_eq!(array.storage().byte(15), 0b0000_0001);
        assert!(array.storage().bit(127));

        // Magnitude bit 127 is the high bit of the first storage byte.
        array.magnitude_mut().turn_on(127);
        assert_eq!(array.storage().byte(0), 0b1000_0000);
        assert!(array.storage().bit(0));

        array.magnitude_mut().turn_off(0);
        assert_eq!(array.storage().byte(15), 0);
    }

    #[test]
    fn test_set_bit_dispatch() {
        let mut array = BitArray::new(8);
        array.storage_mut().set_bit(2, true);
        assert!(array.storage().bit(2));
        array.storage_mut().set_bit(2, false);
        assert!(!array.storage().bit(2));
    }

    #[test]
    fn test_byte_addressing() {
        let mut array = BitArray::new(24);
        array.magnitude_mut().set_byte(0, 0xAA);
        assert_eq!(array.as_bytes(), &[0x00, 0x00, 0xAA]);
        assert_eq!(array.storage().byte(2), 0xAA);
        assert_eq!(array.magnitude().byte(0), 0xAA);
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut array = BitArray::new(0);
        array.magnitude_mut().turn_on(5);
        array.storage_mut().set_byte(3, 0xFF);
        assert!(!array.magnitude().bit(0));
        assert!(!array.storage().bit(17));
        assert_eq!(array.storage().byte(0), 0);
        assert_eq!(array.as_bytes().len(), 0);
    }
}
