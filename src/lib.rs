//! Fixed-length bit vectors, packed in 32-bits words.
//!
//! #   Organization
//!
//! This crate is composed of two top modules:
//!
//! -   The `collections` module contains `BitVector`, a fixed-length vector of bits, and its iterators.
//! -   The `utils` module contains a selection of low-level types upon which `BitVector` is built, and the errors.
//!
//!
//! #   Representations
//!
//! A `BitVector` can be converted to, and from, several representations:
//!
//! -   The canonical JSON array of its words, in storage order, which is also what the serde implementations use.
//! -   The hexadecimal string of its words, 8 digits per word, in storage order.
//! -   The logical order string, bit 0 first, via `Display`.
//! -   The mathematical order string, highest bit first, via `to_binary_string` or `Binary`.
//!
//! Only the first two are meant for storage, or exchange.
//!
//!
//! #   Why 32-bits words?
//!
//! The words are part of the representations, and a JSON number is only guaranteed to round-trip exactly up to 2^53.
//!
//!
//! #   Index type
//!
//! Bits are indexed by `usize`. The length of a `BitVector` is fixed at construction, and its words are held in
//! memory, hence any index of a bit within bounds fits in a `usize` on any platform able to allocate the words.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod collections;
pub mod utils;

pub use collections::BitVector;
pub use utils::{BitVectorError, FormatError, IndexError, LengthMismatchError};
