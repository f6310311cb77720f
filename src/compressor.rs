//! Whole-pipeline compression façade.
//!
//! [`HuffmanCompressor`] runs analysis, tree construction, code generation
//! and encoding in one call, and keeps the tree and table from the last call
//! so they can be inspected or used to decode. [`Compressed`] bundles
//! everything needed to reverse a compression without the compressor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bits::EncodedBits;
use crate::code::{symbol_name, CodeTable};
use crate::decode::decode;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::frequency::{analyze, FrequencyTable};
use crate::tree::CodeTree;

/// Output of one compression.
///
/// Carries the bit stream, the frequency table the tree is rebuilt from,
/// and the original symbol count (needed for single-symbol inputs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Compressed {
    bits: EncodedBits,
    frequencies: FrequencyTable,
    symbol_count: usize,
}

impl Compressed {
    /// Assemble a container from its parts.
    pub fn from_parts(bits: EncodedBits, frequencies: FrequencyTable, symbol_count: usize) -> Self {
        Self {
            bits,
            frequencies,
            symbol_count,
        }
    }

    /// The encoded bit stream.
    pub fn bits(&self) -> &EncodedBits {
        &self.bits
    }

    /// Frequencies of the compressed input.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Number of symbols in the original input.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// True for the result of compressing empty input.
    pub fn is_empty(&self) -> bool {
        self.symbol_count == 0
    }

    /// Rebuild the tree from the carried frequencies and decode.
    ///
    /// # Errors
    /// Besides the decoding errors, returns `Error::FrequencyTotalMismatch`
    /// if the symbol count disagrees with the frequency total, and
    /// `Error::TrailingBits` if an empty container still carries bits.
    pub fn decompress(&self) -> Result<Vec<u8>> {
        if u64::try_from(self.symbol_count).ok() != Some(self.frequencies.total()) {
            return Err(Error::FrequencyTotalMismatch {
                symbol_count: self.symbol_count,
                frequency_total: self.frequencies.total(),
            });
        }
        if self.is_empty() {
            if !self.bits.is_empty() {
                return Err(Error::TrailingBits {
                    remaining: self.bits.len(),
                });
            }
            return Ok(Vec::new());
        }
        let tree = CodeTree::build(&self.frequencies).ok_or(Error::MissingTree)?;
        decode(&self.bits, &tree, Some(self.symbol_count))
    }
}

/// Size figures for one compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Input length in symbols.
    pub original_symbols: usize,
    /// Length of the encoded stream.
    pub compressed_bits: usize,
    /// Distinct symbols in the input.
    pub distinct_symbols: usize,
}

impl CompressionStats {
    /// Uncompressed size at 8 bits per symbol.
    pub fn original_bits(&self) -> usize {
        self.original_symbols * 8
    }

    /// Compressed size as a fraction of the uncompressed size.
    pub fn ratio(&self) -> f64 {
        if self.original_symbols == 0 {
            return 0.0;
        }
        self.compressed_bits as f64 / self.original_bits() as f64
    }

    /// Fraction of the uncompressed size saved.
    pub fn space_saved(&self) -> f64 {
        1.0 - self.ratio()
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols ({} distinct): {} bits -> {} bits, ratio {:.1}%, saved {:.1}%",
            self.original_symbols,
            self.distinct_symbols,
            self.original_bits(),
            self.compressed_bits,
            self.ratio() * 100.0,
            self.space_saved() * 100.0,
        )
    }
}

/// Stateful compressor that remembers its last tree and code table.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor {
    frequencies: FrequencyTable,
    tree: Option<CodeTree>,
    table: CodeTable,
    stats: Option<CompressionStats>,
}

impl HuffmanCompressor {
    /// Create a compressor with no retained state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress `input`, replacing any retained tree and table.
    ///
    /// Empty input short-circuits to an empty [`Compressed`] and clears the
    /// retained state.
    pub fn compress(&mut self, input: &[u8]) -> Result<Compressed> {
        *self = Self::default();
        if input.is_empty() {
            log::debug!("empty input, nothing to compress");
            return Ok(Compressed::default());
        }

        let frequencies = analyze(input);
        log::debug!(
            "frequency analysis complete: {} distinct symbols",
            frequencies.len()
        );

        let tree = CodeTree::build(&frequencies).ok_or(Error::MissingTree)?;
        log::debug!(
            "code tree built: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );

        let table = CodeTable::generate(&tree);
        let bits = encode(input, &table)?;

        let stats = CompressionStats {
            original_symbols: input.len(),
            compressed_bits: bits.len(),
            distinct_symbols: frequencies.len(),
        };
        log::debug!("compression complete: {stats}");

        self.frequencies = frequencies.clone();
        self.tree = Some(tree);
        self.table = table;
        self.stats = Some(stats);

        Ok(Compressed {
            bits,
            frequencies,
            symbol_count: input.len(),
        })
    }

    /// Decode `bits` with the tree from the last compression.
    ///
    /// An empty stream decodes to nothing unless a non-zero `expected` says
    /// otherwise.
    pub fn decompress(&self, bits: &EncodedBits, expected: Option<usize>) -> Result<Vec<u8>> {
        if bits.is_empty() && expected.unwrap_or(0) == 0 {
            return Ok(Vec::new());
        }
        let tree = self.tree.as_ref().ok_or(Error::MissingTree)?;
        let out = decode(bits, tree, expected)?;
        log::debug!("decompression complete: {} symbols", out.len());
        Ok(out)
    }

    /// Tree from the last compression.
    pub fn tree(&self) -> Option<&CodeTree> {
        self.tree.as_ref()
    }

    /// Code table from the last compression; empty before the first.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Frequencies from the last compression.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Statistics for the last compression.
    pub fn stats(&self) -> Option<&CompressionStats> {
        self.stats.as_ref()
    }

    /// One line per symbol: name, code and frequency.
    pub fn code_report(&self) -> String {
        self.table
            .iter()
            .map(|(symbol, code)| {
                format!(
                    "{} -> {} (freq: {})\n",
                    symbol_name(symbol),
                    code,
                    self.frequencies.get(symbol).unwrap_or(0)
                )
            })
            .collect()
    }
}
