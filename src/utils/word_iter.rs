//  See structs.

use super::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};

//
//  In word iterators.
//

/// Forward iterator over the set bits of a `BitWordRaw`.
#[derive(Clone, Debug)]
pub struct BitInWordIter {
    next: IndexInWordRaw,
    word: BitWordRaw,
}

impl BitInWordIter {
    /// Creates a new iterator.
    pub const fn new(word: BitWordRaw) -> Self {
        let next = IndexInWordRaw(0);

        Self { next, word }
    }

    //  Gives the index.
    fn index(index: IndexInWordRaw) -> Option<IndexInWordRaw> {
        (index.0 < BITS_32).then_some(index)
    }
}

impl Iterator for BitInWordIter {
    type Item = IndexInWordRaw;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.clone().count();

        (count, Some(count))
    }

    fn count(self) -> usize {
        let Some(next) = Self::index(self.next) else {
            return 0;
        };

        self.word.count_after(next)
    }

    fn next(&mut self) -> Option<Self::Item> {
        let next = Self::index(self.next)?;

        let result = self.word.next_after(next);

        self.next.0 = result.map(|i| i.0 + 1).unwrap_or(BITS_32);

        result
    }
}

impl ExactSizeIterator for BitInWordIter {}

const BITS_32: u32 = BitWordRaw::BITS as _;

// in_word_tests

//
//  Of words iterators.
//

/// Forward iterator over the indexes of the set bits of a slice of `BitWordRaw`.
#[derive(Clone, Debug)]
pub struct BitIndexIter<'a> {
    of_word: IndexOfWordRaw,
    current: BitInWordIter,
    words: &'a [BitWordRaw],
}

impl<'a> BitIndexIter<'a> {
    /// Creates a new instance.
    pub fn new(words: &'a [BitWordRaw]) -> Self {
        let of_word = IndexOfWordRaw(0);
        let current = BitInWordIter::new(words.first().copied().unwrap_or_default());

        Self { of_word, current, words }
    }
}

impl Iterator for BitIndexIter<'_> {
    type Item = usize;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest: usize = self
            .words
            .get(self.of_word.0 + 1..)
            .map(|words| words.iter().map(BitWordRaw::count).sum())
            .unwrap_or(0);

        let count = self.current.clone().count() + rest;

        (count, Some(count))
    }

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(in_word) = self.current.next() {
                return BitWordRaw::fuse(self.of_word, in_word);
            }

            let of_word = self.of_word.0 + 1;
            let word = *self.words.get(of_word)?;

            self.of_word = IndexOfWordRaw(of_word);
            self.current = BitInWordIter::new(word);
        }
    }
}

impl ExactSizeIterator for BitIndexIter<'_> {}

// mod of_word_tests
