//  Hexadecimal representation of a `BitVector`.
//
//  Each word is represented by 8 hexadecimal digits, most significant digit first, and the words are concatenated in
//  storage order. When parsing, the digits are left-padded with zeros to the number of digits of the length, then split
//  in groups of 8 digits from the left, the last group being shorter if the length is not a whole number of words.

use alloc::{string::String, vec, vec::Vec};

use crate::utils::{BitWordRaw, FormatError};

use super::BitVector;

const DIGITS_PER_WORD: usize = BitWordRaw::BITS / 4;

impl BitVector {
    /// Parses a vector from its hexadecimal representation, with an optional `0x` prefix.
    ///
    /// The length of the vector is the number of bits of the digits, rounded up to a whole number of words.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::from_hex("0xDEADBEEF")?;
    ///
    /// assert_eq!(32, vector.len());
    /// assert_eq!("deadbeef", vector.to_hex_string());
    ///
    /// let vector = BitVector::from_hex("c0ffee")?;
    ///
    /// assert_eq!(32, vector.len());
    /// assert_eq!("00c0ffee", vector.to_hex_string());
    /// #   Ok::<(), bit_words::FormatError>(())
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, FormatError> {
        let digits = strip_prefix(hex);

        let words = digits.len().div_ceil(DIGITS_PER_WORD);

        Self::parse_hex(words * BitWordRaw::BITS, words * DIGITS_PER_WORD, digits)
    }

    /// Parses a vector of `len` bits from its hexadecimal representation, with an optional `0x` prefix.
    ///
    /// Returns an error if the digits are not all hexadecimal, or if the value requires more than `len` bits.
    ///
    /// The digits are left-padded to `len / 4` digits, rounded up, and each group of 8 digits from the left makes a
    /// word. When `len` is not a whole number of words, the last word is made of the remaining digits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::{BitVector, FormatError};
    /// let vector = BitVector::from_hex_with_len(64, "c0ffeec0ffee")?;
    ///
    /// assert_eq!(64, vector.len());
    /// assert_eq!("0000c0ffeec0ffee", vector.to_hex_string());
    ///
    /// assert_eq!(Err(FormatError::TooLong { required: 36, len: 32 }), BitVector::from_hex_with_len(32, "deadbeef0"));
    /// #   Ok::<(), FormatError>(())
    /// ```
    pub fn from_hex_with_len(len: usize, hex: &str) -> Result<Self, FormatError> {
        let digits = strip_prefix(hex);

        let required = digits.len().saturating_mul(4);

        if required > len {
            tracing::debug!(len, required, "rejected hexadecimal value: too many digits");

            return Err(FormatError::TooLong { required, len });
        }

        Self::parse_hex(len, len.div_ceil(4), digits)
    }

    /// Returns the hexadecimal representation, 8 lowercase digits per word, in storage order.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let mut vector = BitVector::new(40);
    /// vector.set(0, true)?.set(39, true)?;
    ///
    /// assert_eq!("0000000100000080", vector.to_hex_string());
    /// #   Ok::<(), bit_words::IndexError>(())
    /// ```
    pub fn to_hex_string(&self) -> String {
        let bytes: Vec<u8> = self.words.iter().flat_map(|word| word.0.to_be_bytes()).collect();

        hex::encode(bytes)
    }

    //  Parses `digits`, stripped of their prefix and left-padded to `total` digits, into a vector of `len` bits.
    //
    //  `total` must be at least the number of digits, and make up exactly as many groups as `len` requires words.
    fn parse_hex(len: usize, total: usize, digits: &str) -> Result<Self, FormatError> {
        debug_assert!(digits.len() <= total);
        debug_assert_eq!(BitWordRaw::words_for(len), total.div_ceil(DIGITS_PER_WORD));

        let padding = total - digits.len();

        let mut padded = vec![b'0'; padding];
        padded.extend_from_slice(digits.as_bytes());

        let words = padded
            .chunks(DIGITS_PER_WORD)
            .enumerate()
            .map(|(of_word, group)| {
                //  A short group holds the low digits of its word.
                let shift = DIGITS_PER_WORD - group.len();

                let mut full = [b'0'; DIGITS_PER_WORD];
                full[shift..].copy_from_slice(group);

                let mut bytes = [0u8; DIGITS_PER_WORD / 2];

                hex::decode_to_slice(full, &mut bytes)
                    .map(|()| BitWordRaw(u32::from_be_bytes(bytes)))
                    .map_err(|error| {
                        let offset = (of_word * DIGITS_PER_WORD).wrapping_sub(padding + shift);

                        invalid_digit(error, offset)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = Self {
            len,
            words: words.into_boxed_slice(),
        };

        if result.has_padding_bits() {
            let required = result.highest_bit_len();

            tracing::debug!(len, required, "rejected hexadecimal value: bits set beyond length");

            return Err(FormatError::TooLong { required, len });
        }

        Ok(result)
    }

    //  Returns the index of the highest set bit, plus one, or 0 if no bit is set.
    fn highest_bit_len(&self) -> usize {
        let Some(of_word) = self.words.iter().rposition(|word| *word != BitWordRaw::ALL_ZEROS) else {
            return 0;
        };

        let leading = self.words[of_word].0.leading_zeros() as usize;

        (of_word + 1) * BitWordRaw::BITS - leading
    }
}

fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")).unwrap_or(hex)
}

//  Converts a decoding error of the group starting at `offset` in the (unpadded) digits.
//
//  `offset` may be "negative", for a group starting with padding, yet `offset + index` never is, since the padding is
//  all zeros.
#[cold]
fn invalid_digit(error: hex::FromHexError, offset: usize) -> FormatError {
    match error {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            let position = offset.wrapping_add(index);

            tracing::debug!(position, digit = %c, "rejected hexadecimal value: invalid digit");

            FormatError::InvalidDigit { position, digit: c }
        }
        //  Groups are always `DIGITS_PER_WORD` digits long, decoded into as many bytes as `BitWordRaw` has.
        other => unreachable!("invalid group length: {other}"),
    }
}

// mod tests
