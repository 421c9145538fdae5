//  See `BitWordRaw` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them.
//
//  A dedicated type, on top of avoiding type confusion, is more ergonomic as inherent methods can just be called
//  without any hassle.
//
//
//  #   Why `u32`?
//
//  The word is the unit of the interchange formats: each word is 8 hexadecimal digits in the hex form, and one JSON
//  number in the word-array form. A JSON number is only guaranteed to round-trip exactly up to 2^53, which rules out
//  `u64`.

use core::ops::{BitAnd, BitAndAssign, BitOrAssign, BitXorAssign, Not};

/// A word of bits.
///
/// A `BitVector` packs its bits in a sequence of `BitWordRaw`, bit `b` of word `i` holding the bit at index
/// `i * 32 + b`, with bit 0 the least significant bit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitWordRaw(pub u32);

/// The index of a word, in a sequence of words.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWordRaw(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 32. No index created by `BitWordRaw::split`
/// will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWordRaw` will panic if its value is strictly greater than 31.
///
/// In Release, any high bit will be ignored (masked away).
///
/// #   Why `u32`?
///
/// In Rust, all shift operations take a `u32` as their right-hand argument, and the `IndexInWordRaw` will be used nigh
/// exclusively with shift operations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWordRaw(pub u32);

//
//  Constants.
//

impl BitWordRaw {
    /// Number of bits in a word.
    pub const BITS: usize = 32;

    /// An all-zeros bit word.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones bit word.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Static operations.
//

impl BitWordRaw {
    /// Splits a bit index into an index-of-word/index-in-word pair.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::BitWordRaw;
    /// let (of_word, in_word) = BitWordRaw::split(70);
    ///
    /// assert_eq!(2, of_word.0);
    /// assert_eq!(6, in_word.0);
    /// ```
    #[inline]
    pub const fn split(index: usize) -> (IndexOfWordRaw, IndexInWordRaw) {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_word = index / Self::BITS;
        let in_word = index % Self::BITS;

        (IndexOfWordRaw(of_word), IndexInWordRaw(in_word as _))
    }

    /// Fuses a pair of index-of-word/index-in-word pair into a bit index.
    ///
    /// Returns None if the index-of-word is too large for a bit index. This will never happen for pairs obtained from
    /// `Self::split`, but may happen for user-provided pairs.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};
    /// let index = BitWordRaw::fuse(IndexOfWordRaw(2), IndexInWordRaw(6)).expect("no overflow");
    ///
    /// assert_eq!(70, index);
    /// ```
    #[inline]
    pub const fn fuse(of_word: IndexOfWordRaw, in_word: IndexInWordRaw) -> Option<usize> {
        debug_assert!(in_word.0 < Self::BITS as _);

        //  FIXME: convert to `?` when it is const.
        let Some(index) = of_word.0.checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        let in_word = in_word.0 as usize % Self::BITS;

        Some(index + in_word)
    }

    /// Returns the number of words required to hold `len` bits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::BitWordRaw;
    /// assert_eq!(0, BitWordRaw::words_for(0));
    /// assert_eq!(1, BitWordRaw::words_for(32));
    /// assert_eq!(3, BitWordRaw::words_for(72));
    /// ```
    #[inline]
    pub const fn words_for(len: usize) -> usize {
        len.div_ceil(Self::BITS)
    }

    /// Returns the mask of the bits of the last word of a sequence of `len` bits which are within bounds.
    ///
    /// A `len` multiple of 32 uses all bits of its last word.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::BitWordRaw;
    /// assert_eq!(BitWordRaw::ALL_ONES, BitWordRaw::last_word_mask(64));
    /// assert_eq!(BitWordRaw(0b111), BitWordRaw::last_word_mask(35));
    /// ```
    #[inline]
    pub const fn last_word_mask(len: usize) -> BitWordRaw {
        let tail = (len % Self::BITS) as u32;

        if tail == 0 { Self::ALL_ONES } else { Self((1 << tail) - 1) }
    }
}

#[cfg(test)]
mod static_tests {
    use super::*;

    #[test]
    fn split_brush() {
        assert_eq!((0, 0), compute_split(0));
        assert_eq!((0, 1), compute_split(1));
        assert_eq!((0, 30), compute_split(30));
        assert_eq!((0, 31), compute_split(31));

        assert_eq!((1, 0), compute_split(32));
        assert_eq!((1, 1), compute_split(33));
        assert_eq!((1, 31), compute_split(63));

        assert_eq!((2, 0), compute_split(64));
    }

    #[test]
    fn split_highest() {
        assert_eq!((usize::MAX / 32, 31), compute_split(usize::MAX));
    }

    #[test]
    fn fuse_brush() {
        assert_eq!(Some(0), compute_fuse(0, 0));
        assert_eq!(Some(31), compute_fuse(0, 31));

        assert_eq!(Some(32), compute_fuse(1, 0));
        assert_eq!(Some(63), compute_fuse(1, 31));

        assert_eq!(Some(64), compute_fuse(2, 0));
    }

    #[test]
    fn fuse_overflow() {
        let highest_of_word = usize::MAX / 32;

        assert_eq!(Some(usize::MAX), compute_fuse(highest_of_word, 31));
        assert_eq!(None, compute_fuse(highest_of_word + 1, 0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn fuse_in_overflow() {
        compute_fuse(0, 32);
    }

    #[test]
    fn words_for_boundaries() {
        assert_eq!(0, BitWordRaw::words_for(0));
        assert_eq!(1, BitWordRaw::words_for(1));
        assert_eq!(1, BitWordRaw::words_for(31));
        assert_eq!(1, BitWordRaw::words_for(32));
        assert_eq!(2, BitWordRaw::words_for(33));
        assert_eq!(usize::MAX / 32 + 1, BitWordRaw::words_for(usize::MAX));
    }

    #[test]
    fn last_word_mask_brush() {
        assert_eq!(!0, BitWordRaw::last_word_mask(0).0);
        assert_eq!(0b1, BitWordRaw::last_word_mask(1).0);
        assert_eq!(0x7fff_ffff, BitWordRaw::last_word_mask(31).0);
        assert_eq!(!0, BitWordRaw::last_word_mask(32).0);
        assert_eq!(0xff, BitWordRaw::last_word_mask(72).0);
    }

    fn compute_split(index: usize) -> (usize, u32) {
        let (o, i) = BitWordRaw::split(index);

        (o.0, i.0)
    }

    fn compute_fuse(of_word: usize, in_word: u32) -> Option<usize> {
        BitWordRaw::fuse(IndexOfWordRaw(of_word), IndexInWordRaw(in_word))
    }
} // mod static_tests

//
//  Bit operations.
//

impl BitWordRaw {
    /// Returns the number of bits set.
    ///
    /// Sums the bits pairwise, then in groups of 4, then 8, and finally adds up the four byte counts with a single
    /// multiplication.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::BitWordRaw;
    /// assert_eq!(0, BitWordRaw::ALL_ZEROS.count());
    /// assert_eq!(32, BitWordRaw::ALL_ONES.count());
    /// assert_eq!(24, BitWordRaw(0xdeadbeef).count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        let mut x = self.0;

        x -= (x >> 1) & 0x5555_5555;
        x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
        x = (x + (x >> 4)) & 0x0f0f_0f0f;

        (x.wrapping_mul(0x0101_0101) >> 24) as _
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// let word = BitWordRaw(0b1001);
    ///
    /// assert!(word.is_set(IndexInWordRaw(0)));
    /// assert!(word.is_set(IndexInWordRaw(3)));
    ///
    /// for i in (1..=2).chain(4..=31) {
    ///     assert!(!word.is_set(IndexInWordRaw(i)));
    /// }
    /// ```
    #[inline]
    pub const fn is_set(&self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        (self.0 & mask) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// let mut word = BitWordRaw(0b1001);
    ///
    /// assert!(!word.set(IndexInWordRaw(0)));
    /// assert!(word.set(IndexInWordRaw(2)));
    ///
    /// assert_eq!(0b1101, word.0);
    /// ```
    #[inline]
    pub const fn set(&mut self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// let mut word = BitWordRaw(0b1001);
    ///
    /// assert!(word.reset(IndexInWordRaw(0)));
    /// assert!(!word.reset(IndexInWordRaw(2)));
    ///
    /// assert_eq!(0b1000, word.0);
    /// ```
    #[inline]
    pub const fn reset(&mut self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }

    /// Sets or resets a bit, depending on `value`.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    #[inline]
    pub const fn assign(&mut self, bit: IndexInWordRaw, value: bool) {
        if value {
            self.set(bit);
        } else {
            self.reset(bit);
        }
    }

    /// Flips a bit.
    ///
    /// Returns the new value of the bit.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// let mut word = BitWordRaw(0b1001);
    ///
    /// assert!(!word.toggle(IndexInWordRaw(0)));
    /// assert!(word.toggle(IndexInWordRaw(1)));
    ///
    /// assert_eq!(0b1010, word.0);
    /// ```
    #[inline]
    pub const fn toggle(&mut self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        self.0 ^= mask;

        (self.0 & mask) != 0
    }
}

// mod bit_tests

//
//  Query operations.
//

impl BitWordRaw {
    /// Returns the index of the next set bit that is at, or after, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// assert_eq!(None, BitWordRaw::ALL_ZEROS.next_after(IndexInWordRaw(0)));
    ///
    /// assert_eq!(Some(IndexInWordRaw(3)), BitWordRaw(0b1001).next_after(IndexInWordRaw(1)));
    /// ```
    #[inline]
    pub const fn next_after(&self, bit: IndexInWordRaw) -> Option<IndexInWordRaw> {
        let mask = Self::mask_after(bit);

        let zeros = (self.0 & mask).trailing_zeros();

        //  FIXME: convert to `.then_some` when it is const.
        if zeros < Self::BITS as _ {
            Some(IndexInWordRaw(zeros))
        } else {
            None
        }
    }

    /// Returns the number of bits set that are at, or after, the given index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::utils::{BitWordRaw, IndexInWordRaw};
    /// assert_eq!(32, BitWordRaw::ALL_ONES.count_after(IndexInWordRaw(0)));
    /// assert_eq!(1, BitWordRaw::ALL_ONES.count_after(IndexInWordRaw(31)));
    /// ```
    #[inline]
    pub const fn count_after(&self, bit: IndexInWordRaw) -> usize {
        let mask = Self::mask_after(bit);

        BitWordRaw(self.0 & mask).count()
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    const BITS: u32 = BitWordRaw::BITS as u32;

    #[test]
    fn next_after_empty() {
        for i in 0..BITS {
            assert_eq!(None, compute_next_after(0, i), "{i}");
        }
    }

    #[test]
    fn next_after_full() {
        for i in 0..BITS {
            assert_eq!(Some(i), compute_next_after(!0, i), "{i}");
        }
    }

    #[test]
    fn next_after_sparse() {
        const WORD: u32 = 1 << 31 | 1 << 15 | 1;

        assert_eq!(Some(0), compute_next_after(WORD, 0));
        assert_eq!(Some(15), compute_next_after(WORD, 1));
        assert_eq!(Some(15), compute_next_after(WORD, 15));
        assert_eq!(Some(31), compute_next_after(WORD, 16));
    }

    #[test]
    fn count_after_full() {
        for i in 0..BITS {
            assert_eq!((BITS - i) as usize, BitWordRaw::ALL_ONES.count_after(IndexInWordRaw(i)), "{i}");
        }
    }

    fn compute_next_after(word: u32, bit: u32) -> Option<u32> {
        BitWordRaw(word).next_after(IndexInWordRaw(bit)).map(|in_word| in_word.0)
    }
} // mod query_tests

//
//  Bitwise traits.
//

impl BitAndAssign for BitWordRaw {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for BitWordRaw {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for BitWordRaw {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for BitWordRaw {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for BitWordRaw {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

// mod bitwise_tests

//
//  Implementation details
//

impl BitWordRaw {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWordRaw) -> u32 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS as u32;

        1 << shift
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: IndexInWordRaw) -> u32 {
        let mask = Self::bit_mask(bit) - 1;

        !mask
    }
}
