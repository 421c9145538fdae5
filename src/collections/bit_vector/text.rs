//  Human readable representations of a `BitVector`.
//
//  Neither is compact, nor meant for storage: see the hexadecimal and JSON representations instead.

use core::fmt::{self, Write};

use alloc::string::String;

use super::BitVector;

impl BitVector {
    /// Returns the bits in mathematical order: the bit at the highest index first.
    ///
    /// This is the reverse of the logical order of `to_string`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::from_hex("deadbeef")?;
    ///
    /// assert_eq!("11011110101011011011111011101111", vector.to_binary_string());
    /// #   Ok::<(), bit_words::FormatError>(())
    /// ```
    pub fn to_binary_string(&self) -> String {
        self.iter().rev().map(|(_, bit)| digit(bit)).collect()
    }
}

/// Formats the bits in logical order: the bit at index 0 first.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.iter().try_for_each(|(_, bit)| f.write_char(digit(bit)))
    }
}

/// Formats the bits in mathematical order: the bit at the highest index first.
impl fmt::Binary for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.iter().rev().try_for_each(|(_, bit)| f.write_char(digit(bit)))
    }
}

fn digit(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

// mod tests
