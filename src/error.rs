use thiserror::Error;

/// Errors reported by the checked operations of [`BitVector`].
///
/// Shifts, bitwise algebra and the unindexed mutators never fail, so they
/// don't return this type.
///
/// [`BitVector`]: crate::BitVector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitVectorError {
    /// A checked access used an index at or beyond the vector's length, or a
    /// string construction started past the end of its input.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The rejected index or start position.
        index: usize,
        /// The length the index was checked against.
        len: usize,
    },

    /// A character was neither the zero symbol nor the one symbol.
    #[error("invalid bit character at position {position}")]
    InvalidFormat {
        /// Position of the offending character in the input sequence.
        position: usize,
    },

    /// The vector's value does not fit into the requested integer type.
    #[error("value does not fit into {bits} bits")]
    Overflow {
        /// Width of the requested integer type.
        bits: u32,
    },
}
