//  Errors.

/// An index out of the bounds of a `BitVector`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("index {index} out of bounds for a bit vector of length {len}")]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// The length of the bit vector.
    pub len: usize,
}

/// A bitwise operation between `BitVector`s of different lengths.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("bit vectors must be of the same length, got {left} and {right}")]
pub struct LengthMismatchError {
    /// The length of the left-hand operand.
    pub left: usize,
    /// The length of the right-hand operand.
    pub right: usize,
}

/// A malformed hexadecimal, or JSON, representation of a `BitVector`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// A character which is not an hexadecimal digit.
    #[error("invalid hexadecimal digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The position of the character, counted in bytes after the optional `0x` prefix.
        position: usize,
        /// The offending character.
        digit: char,
    },
    /// A value requiring more bits than the target length.
    #[error("value requires {required} bits, but the bit vector only has {len}")]
    TooLong {
        /// The number of bits required by the value.
        required: usize,
        /// The length of the bit vector.
        len: usize,
    },
    /// A JSON document which is not an array of 32-bits unsigned integers.
    #[error("invalid JSON word array at line {line}, column {column}")]
    InvalidJson {
        /// The line of the error.
        line: usize,
        /// The column of the error.
        column: usize,
    },
    /// A number of words not matching the target length.
    #[error("expected {expected} words, got {actual}")]
    WordCount {
        /// The number of words required by the length.
        expected: usize,
        /// The number of words provided.
        actual: usize,
    },
    /// A number of words whose bits overflow `usize`.
    #[error("{count} words overflow the length of a bit vector")]
    TooManyWords {
        /// The number of words provided.
        count: usize,
    },
    /// A last word with bits set beyond the target length.
    #[error("bits set beyond the length {len}")]
    PaddingBits {
        /// The length of the bit vector.
        len: usize,
    },
}

/// Any error of a `BitVector` operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum BitVectorError {
    /// See `IndexError`.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// See `LengthMismatchError`.
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatchError),
    /// See `FormatError`.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<serde_json::Error> for FormatError {
    fn from(error: serde_json::Error) -> Self {
        let (line, column) = (error.line(), error.column());

        Self::InvalidJson { line, column }
    }
}

// mod tests
