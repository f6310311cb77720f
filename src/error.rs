//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for encoding and decoding.
///
/// Every variant is deterministic: the same inputs always fail the same way,
/// so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input holds a symbol the code table has no code for.
    ///
    /// Table and input must be derived from the same text.
    #[error("symbol {symbol:#04x} at position {position} is not in the code table")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: u8,
        /// Its index in the input.
        position: usize,
    },

    /// The bit stream ended in the middle of a code.
    #[error("bit stream truncated: {bits} bits consumed, walk stopped {depth} levels below the root")]
    TruncatedStream {
        /// Total number of bits read before running out.
        bits: usize,
        /// How deep into the tree the unfinished path reached.
        depth: usize,
    },

    /// A single-symbol tree was decoded without the repetition count.
    #[error("decoding a single-symbol tree requires the expected symbol count")]
    MissingSymbolCount,

    /// A single-symbol stream contained a bit other than `0`.
    #[error("unexpected 1 bit at position {position} in a single-symbol stream")]
    InvalidBit {
        /// Bit index of the offending bit.
        position: usize,
    },

    /// Bits remained after the expected number of symbols was decoded.
    #[error("{remaining} trailing bits after the last expected symbol")]
    TrailingBits {
        /// Number of unread bits.
        remaining: usize,
    },

    /// The stream decoded to a different number of symbols than expected.
    #[error("expected {expected} symbols, decoded {actual}")]
    SymbolCountMismatch {
        /// Caller-supplied count.
        expected: usize,
        /// Symbols actually decoded.
        actual: usize,
    },

    /// Adding a count would push the frequency total past `u64::MAX`.
    #[error("frequency total overflows u64 when adding symbol {symbol:#04x}")]
    FrequencyOverflow {
        /// The symbol whose count could not be added.
        symbol: u8,
    },

    /// A container's symbol count disagrees with its frequency total.
    #[error("container holds {symbol_count} symbols but its frequencies sum to {frequency_total}")]
    FrequencyTotalMismatch {
        /// Symbol count carried by the container.
        symbol_count: usize,
        /// Sum of the carried frequency table.
        frequency_total: u64,
    },

    /// Decompression was requested before any tree was built.
    #[error("no code tree available; compress something first")]
    MissingTree,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
