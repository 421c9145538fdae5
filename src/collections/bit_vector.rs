//! A fixed-length vector of bits, packed in 32-bits words.

mod hexadecimal;
mod iter;
mod json;
mod text;

use alloc::{boxed::Box, vec, vec::Vec};

use crate::utils::{BitWordRaw, FormatError, IndexError, IndexInWordRaw, IndexOfWordRaw, LengthMismatchError};

pub use iter::{Iter, Ones};

/// A fixed-length vector of bits.
///
/// The length is fixed at construction: no operation ever grows, or shrinks, the vector. The bits are packed in
/// `BitWordRaw`, bit `b` of word `i` holding the bit at index `i * 32 + b`.
///
/// A copy is obtained with `Clone`, which never shares the words with the original, and two vectors are equal when
/// they have the same length and the same bits.
///
/// #   Examples
///
/// ```
/// #   use bit_words::BitVector;
/// let mut vector = BitVector::new(32);
///
/// vector.set(31, true)?.set(0, true)?.set(15, true)?;
///
/// assert_eq!("10000000000000010000000000000001", vector.to_string());
/// assert_eq!(3, vector.count());
/// #   Ok::<(), bit_words::IndexError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitVector {
    //  Invariants:
    //  -   Sized: `words.len() == BitWordRaw::words_for(len)`.
    //  -   Padded: the bits of the last word at, or beyond, `len` are all zeros.
    //
    //  Equality and hashing of the words are only meaningful thanks to the Padded invariant.
    len: usize,
    words: Box<[BitWordRaw]>,
}

//
//  Creation
//

impl BitVector {
    /// Creates a new vector of `len` bits, all zeros.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::new(72);
    ///
    /// assert_eq!(72, vector.len());
    /// assert_eq!(3, vector.words().len());
    /// assert_eq!(0, vector.count());
    /// ```
    pub fn new(len: usize) -> Self {
        let words = vec![BitWordRaw::ALL_ZEROS; BitWordRaw::words_for(len)].into_boxed_slice();

        Self { len, words }
    }

    /// Creates a new vector of `len` bits from its words, in storage order.
    ///
    /// Returns an error if the number of words doesn't match `len`, or if any bit at, or beyond, `len` is set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::from_words(64, vec![0xffffeeee, 0xddddcccc])?;
    ///
    /// assert_eq!("ffffeeeeddddcccc", vector.to_hex_string());
    /// #   Ok::<(), bit_words::FormatError>(())
    /// ```
    pub fn from_words(len: usize, words: Vec<u32>) -> Result<Self, FormatError> {
        Self::from_raw(len, words.into_iter().map(BitWordRaw).collect())
    }

    /// Creates a new vector from its words, in storage order, using every bit of every word.
    ///
    /// Returns an error if the number of bits of the words overflows `usize`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector = BitVector::from_word_vec(vec![1610614016, 90112])?;
    ///
    /// assert_eq!(64, vector.len());
    /// assert_eq!(vec![8, 10, 29, 30, 45, 46, 48], vector.to_indices());
    /// #   Ok::<(), bit_words::FormatError>(())
    /// ```
    pub fn from_word_vec(words: Vec<u32>) -> Result<Self, FormatError> {
        let len = Self::len_of_words(words.len())?;
        let words = words.into_iter().map(BitWordRaw).collect();

        Ok(Self { len, words })
    }

    //  Returns the number of bits of `count` words.
    fn len_of_words(count: usize) -> Result<usize, FormatError> {
        BitWordRaw::fuse(IndexOfWordRaw(count), IndexInWordRaw(0)).ok_or_else(|| {
            tracing::debug!(count, "rejected words: length overflow");

            FormatError::TooManyWords { count }
        })
    }

    //  Creates a new vector, checking the Sized and Padded invariants.
    fn from_raw(len: usize, words: Vec<BitWordRaw>) -> Result<Self, FormatError> {
        let expected = BitWordRaw::words_for(len);

        if words.len() != expected {
            tracing::debug!(len, expected, actual = words.len(), "rejected words: count mismatch");

            return Err(FormatError::WordCount {
                expected,
                actual: words.len(),
            });
        }

        let result = Self {
            len,
            words: words.into_boxed_slice(),
        };

        if result.has_padding_bits() {
            tracing::debug!(len, "rejected words: bits set beyond length");

            return Err(FormatError::PaddingBits { len });
        }

        Ok(result)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut words = Vec::new();
        let mut len = 0;

        for bit in iter {
            let (of_word, in_word) = BitWordRaw::split(len);

            if of_word.0 == words.len() {
                words.push(BitWordRaw::ALL_ZEROS);
            }

            words[of_word.0].assign(in_word, bit);

            len += 1;
        }

        let words = words.into_boxed_slice();

        Self { len, words }
    }
}

// mod creation_tests

//
//  Bit access
//

impl BitVector {
    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the vector has no bit at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying words, in storage order.
    #[inline]
    pub fn words(&self) -> &[BitWordRaw] {
        &self.words
    }

    /// Returns a copy of the underlying words, in storage order.
    pub fn to_words(&self) -> Vec<u32> {
        self.words.iter().map(|word| word.0).collect()
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// Returns an error if `index` is out of bounds.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::{BitVector, IndexError};
    /// let mut vector = BitVector::new(8);
    /// vector.set(4, true)?;
    ///
    /// assert_eq!(Ok(true), vector.get(4));
    /// assert_eq!(Ok(false), vector.get(5));
    /// assert_eq!(Err(IndexError { index: 8, len: 8 }), vector.get(8));
    /// #   Ok::<(), IndexError>(())
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool, IndexError> {
        let (of_word, in_word) = self.locate(index)?;

        Ok(self.words[of_word.0].is_set(in_word))
    }

    /// Sets, or clears, the bit at `index`, depending on `value`.
    ///
    /// Returns an error if `index` is out of bounds, in which case `self` is left unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Result<&mut Self, IndexError> {
        let (of_word, in_word) = self.locate(index)?;

        self.words[of_word.0].assign(in_word, value);

        Ok(self)
    }

    /// Flips the bit at `index`.
    ///
    /// Returns an error if `index` is out of bounds, in which case `self` is left unchanged.
    #[inline]
    pub fn toggle(&mut self, index: usize) -> Result<&mut Self, IndexError> {
        let (of_word, in_word) = self.locate(index)?;

        self.words[of_word.0].toggle(in_word);

        Ok(self)
    }

    /// Clears all bits, keeping the length, and the allocation.
    pub fn reset(&mut self) -> &mut Self {
        self.words.fill(BitWordRaw::ALL_ZEROS);

        self
    }

    //  Returns the bit at `index`, which must be in bounds.
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "{index} >= {}", self.len);

        let (of_word, in_word) = BitWordRaw::split(index);

        self.words[of_word.0].is_set(in_word)
    }

    #[inline]
    fn locate(&self, index: usize) -> Result<(IndexOfWordRaw, IndexInWordRaw), IndexError> {
        if index >= self.len {
            return Err(IndexError { index, len: self.len });
        }

        Ok(BitWordRaw::split(index))
    }
}

// mod access_tests

//
//  Whole vector operations
//

impl BitVector {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let mut vector = BitVector::new(72);
    /// vector.set(1, true)?.set(12, true)?.set(32, true)?.set(70, true)?;
    ///
    /// assert_eq!(4, vector.count());
    /// #   Ok::<(), bit_words::IndexError>(())
    /// ```
    pub fn count(&self) -> usize {
        self.words.iter().map(BitWordRaw::count).sum()
    }

    /// Flips all bits.
    ///
    /// The bits of the last word beyond `self.len()` are left cleared, so they never leak in `count`, or equality.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&mut self) -> &mut Self {
        for word in self.words.iter_mut() {
            *word = !*word;
        }

        self.clear_padding_bits();

        self
    }

    /// Intersects `self` with `other`, bit by bit.
    ///
    /// Returns an error if the lengths differ, in which case `self` is left unchanged.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::{BitVector, LengthMismatchError};
    /// let mut left = BitVector::new(32);
    /// left.set(0, true)?.set(2, true)?;
    ///
    /// let mut right = BitVector::new(32);
    /// right.set(0, true)?.set(1, true)?;
    ///
    /// assert_eq!(vec![0], left.clone().and(&right)?.to_indices());
    /// assert_eq!(vec![0, 1, 2], left.clone().or(&right)?.to_indices());
    /// assert_eq!(vec![1, 2], left.clone().xor(&right)?.to_indices());
    ///
    /// assert_eq!(Err(LengthMismatchError { left: 32, right: 64 }), left.and(&BitVector::new(64)).map(|_| ()));
    /// #   Ok::<(), bit_words::BitVectorError>(())
    /// ```
    pub fn and(&mut self, other: &Self) -> Result<&mut Self, LengthMismatchError> {
        self.combine(other, |word, other| *word &= other)
    }

    /// Unites `self` with `other`, bit by bit.
    ///
    /// Returns an error if the lengths differ, in which case `self` is left unchanged.
    pub fn or(&mut self, other: &Self) -> Result<&mut Self, LengthMismatchError> {
        self.combine(other, |word, other| *word |= other)
    }

    /// Computes the symmetric difference of `self` and `other`, bit by bit.
    ///
    /// Returns an error if the lengths differ, in which case `self` is left unchanged.
    pub fn xor(&mut self, other: &Self) -> Result<&mut Self, LengthMismatchError> {
        self.combine(other, |word, other| *word ^= other)
    }

    //  Applies `op` word by word. Any `op` which maps a pair of zeros to zero preserves the Padded invariant.
    fn combine<F>(&mut self, other: &Self, op: F) -> Result<&mut Self, LengthMismatchError>
    where
        F: Fn(&mut BitWordRaw, BitWordRaw),
    {
        if self.len != other.len {
            return Err(LengthMismatchError {
                left: self.len,
                right: other.len,
            });
        }

        debug_assert_eq!(self.words.len(), other.words.len());

        for (word, other) in self.words.iter_mut().zip(other.words.iter()) {
            op(word, *other);
        }

        Ok(self)
    }

    fn has_padding_bits(&self) -> bool {
        let mask = BitWordRaw::last_word_mask(self.len);

        self.words.last().is_some_and(|last| (*last & !mask) != BitWordRaw::ALL_ZEROS)
    }

    fn clear_padding_bits(&mut self) {
        let mask = BitWordRaw::last_word_mask(self.len);

        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }
}

// mod whole_tests
