//! Low-level types upon which `BitVector` is built.

mod error;
mod word;
mod word_iter;

pub use error::{BitVectorError, FormatError, IndexError, LengthMismatchError};
pub use word::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};
pub use word_iter::{BitInWordIter, BitIndexIter};
