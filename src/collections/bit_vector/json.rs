//  JSON representations of a `BitVector`.
//
//  The canonical representation is the array of words, in storage order, which is what the serde implementations use
//  as well. The array of booleans is a convenience, meant for display.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::Value;

use crate::utils::FormatError;

use super::BitVector;

impl BitVector {
    /// Returns the canonical JSON representation: the array of words, in storage order.
    ///
    /// The array doesn't record the length of the vector, see `from_json_with_len`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::from_hex("ffffeeeeddddcccc")?;
    ///
    /// assert_eq!("[4294962926,3722300620]", vector.to_json());
    /// #   Ok::<(), bit_words::FormatError>(())
    /// ```
    pub fn to_json(&self) -> String {
        Value::from(self.to_words()).to_string()
    }

    /// Returns the JSON array of the bits, in ascending order of index.
    ///
    /// This representation is not canonical, and cannot be parsed back.
    pub fn to_bool_json(&self) -> String {
        Value::from(self.to_bools()).to_string()
    }

    /// Parses a vector from its canonical JSON representation, using every bit of every word.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        parse_words(json).and_then(Self::from_word_vec)
    }

    /// Parses a vector of `len` bits from its canonical JSON representation.
    ///
    /// Returns an error if the JSON is not an array of 32-bits unsigned integers, if the number of words doesn't match
    /// `len`, or if any bit at, or beyond, `len` is set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let mut vector = BitVector::new(40);
    /// vector.set(3, true)?.set(39, true)?;
    ///
    /// let json = vector.to_json();
    ///
    /// assert_eq!(vector, BitVector::from_json_with_len(40, &json)?);
    /// #   Ok::<(), bit_words::BitVectorError>(())
    /// ```
    pub fn from_json_with_len(len: usize, json: &str) -> Result<Self, FormatError> {
        parse_words(json).and_then(|words| Self::from_words(len, words))
    }
}

fn parse_words(json: &str) -> Result<Vec<u32>, FormatError> {
    serde_json::from_str(json).map_err(|error| {
        tracing::debug!(%error, "rejected JSON word array");

        FormatError::from(error)
    })
}

impl Serialize for BitVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.words.iter().map(|word| word.0))
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let words = Vec::<u32>::deserialize(deserializer)?;

        Self::from_word_vec(words).map_err(D::Error::custom)
    }
}

// mod tests
