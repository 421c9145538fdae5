//  Iterators over a `BitVector`.

use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::utils::BitIndexIter;

use super::BitVector;

/// Iterator over the `(index, bit)` pairs of a `BitVector`, in ascending order of index.
///
/// The iterator borrows the vector, and a fresh one can be obtained at any time from `BitVector::iter`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    front: usize,
    back: usize,
    vector: &'a BitVector,
}

/// Iterator over the indexes of the set bits of a `BitVector`, in ascending order.
#[derive(Clone, Debug)]
pub struct Ones<'a>(BitIndexIter<'a>);

impl BitVector {
    /// Returns an iterator over the `(index, bit)` pairs, in ascending order of index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_words::BitVector;
    /// let vector: BitVector = [true, false, true].into_iter().collect();
    ///
    /// let pairs: Vec<_> = vector.iter().collect();
    ///
    /// assert_eq!(vec![(0, true), (1, false), (2, true)], pairs);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            front: 0,
            back: self.len,
            vector: self,
        }
    }

    /// Returns an iterator over the indexes of the set bits, in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones(BitIndexIter::new(&self.words))
    }

    /// Returns the bits, in ascending order of index.
    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().map(|(_, bit)| bit).collect()
    }

    /// Returns the indexes of the set bits, in ascending order.
    pub fn to_indices(&self) -> Vec<usize> {
        self.ones().collect()
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = (usize, bool);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Iterator for Iter<'_> {
    type Item = (usize, bool);

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;

        (len, Some(len))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;

        Some((index, self.vector.bit(index)))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        Some((self.back, self.vector.bit(self.back)))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl ExactSizeIterator for Ones<'_> {}

impl FusedIterator for Ones<'_> {}

// mod tests
