//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols, because `E` is
//! common and `Q` is rare. Huffman coding does the same thing, but computes
//! the best possible assignment for the data at hand: frequent symbols get
//! short codes, rare symbols long ones, and no code is ever the beginning of
//! another, so a concatenation of codes can be split back apart without any
//! separators.
//!
//! ## The Problem
//!
//! Given counts for each symbol, find a set of binary codes that is
//! prefix-free and minimizes the total encoded length. Codes are paths in a
//! binary tree (left = `0`, right = `1`) with symbols at the leaves, so the
//! task is really: which tree?
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not optimal
//! 1952  Huffman     Bottom-up greedy merging: provably optimal prefix codes
//! 1973  Gallager    Adaptive Huffman coding
//! 1993  Deutsch     DEFLATE pairs LZ77 with Huffman codes
//! ```
//!
//! ## The Algorithm
//!
//! Put one leaf per symbol in a min-priority queue keyed by frequency.
//! Repeatedly remove the two lightest nodes and push a parent whose weight
//! is their sum. The last node standing is the root. The two rarest symbols
//! end up as deepest siblings, which is exactly what an optimal code needs.
//!
//! Ties are broken by a fixed rank (see [`tree`]) so that the same input
//! always yields the same tree and the same codes.
//!
//! ## Complexity Analysis
//!
//! - **Analysis, encoding, decoding**: $O(n)$ in the input length.
//! - **Tree construction**: $O(k \log k)$ for $k$ distinct symbols.
//!
//! ## Failure Modes
//!
//! 1. **Mismatched table**: encoding a symbol the table never saw
//!    ([`Error::UnknownSymbol`]).
//! 2. **Truncated stream**: bits ending in the middle of a code
//!    ([`Error::TruncatedStream`]).
//! 3. **Single-symbol input**: every code is `0`, so the decoder must be told
//!    how many symbols to emit ([`Error::MissingSymbolCount`]).
//!
//! ## Implementation Notes
//!
//! The encoded stream carries no header. Decoding needs the exact tree used
//! for encoding; [`Compressed`] keeps the frequency table it is rebuilt from.
//!
//! ```
//! use huffman::HuffmanCompressor;
//!
//! let mut compressor = HuffmanCompressor::new();
//! let compressed = compressor.compress(b"ABRACADABRA")?;
//! assert!(compressed.bits().len() < 11 * 8);
//! assert_eq!(compressed.decompress()?, b"ABRACADABRA");
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod compressor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod frequency;
pub mod tree;

pub use bits::EncodedBits;
pub use code::{Code, CodeTable};
pub use compressor::{CompressionStats, Compressed, HuffmanCompressor};
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use frequency::{analyze, FrequencyTable};
pub use tree::{CodeTree, Node};
