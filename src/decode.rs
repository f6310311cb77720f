//! Bit stream back to symbols.

use crate::bits::EncodedBits;
use crate::error::{Error, Result};
use crate::tree::{CodeTree, Node};

/// Decode `bits` by walking `tree` from the root.
///
/// `expected` is the number of symbols originally encoded. It is required
/// when the tree is a lone leaf, since every code is then `0` and the bit
/// count alone cannot tell where decoding should stop. For larger trees it
/// is optional and, when given, checked against the decoded length.
///
/// # Errors
/// - `Error::TruncatedStream` if the bits run out in the middle of a code.
/// - `Error::MissingSymbolCount` for a lone-leaf tree without `expected`.
/// - `Error::InvalidBit` / `Error::TrailingBits` for a malformed
///   single-symbol stream.
/// - `Error::SymbolCountMismatch` if `expected` disagrees with the stream.
pub fn decode(bits: &EncodedBits, tree: &CodeTree, expected: Option<usize>) -> Result<Vec<u8>> {
    match tree.root() {
        Node::Leaf { symbol, .. } => {
            decode_single(bits, *symbol, expected.ok_or(Error::MissingSymbolCount)?)
        }
        root => {
            let out = decode_walk(bits, root)?;
            match expected {
                Some(expected) if expected != out.len() => Err(Error::SymbolCountMismatch {
                    expected,
                    actual: out.len(),
                }),
                _ => Ok(out),
            }
        }
    }
}

fn decode_single(bits: &EncodedBits, symbol: u8, count: usize) -> Result<Vec<u8>> {
    if bits.len() < count {
        return Err(Error::TruncatedStream {
            bits: bits.len(),
            depth: 0,
        });
    }
    if let Some(position) = bits.iter().take(count).position(|bit| bit) {
        return Err(Error::InvalidBit { position });
    }
    if bits.len() > count {
        return Err(Error::TrailingBits {
            remaining: bits.len() - count,
        });
    }
    Ok(vec![symbol; count])
}

fn decode_walk(bits: &EncodedBits, root: &Node) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut curr = root;
    let mut depth = 0;

    for bit in bits.iter() {
        // `curr` is always internal here: it is reset to the root (internal)
        // after every leaf.
        if let Some((left, right)) = curr.children() {
            curr = if bit { right } else { left };
            depth += 1;
        }

        if let Node::Leaf { symbol, .. } = curr {
            out.push(*symbol);
            curr = root;
            depth = 0;
        }
    }

    if depth != 0 {
        return Err(Error::TruncatedStream {
            bits: bits.len(),
            depth,
        });
    }
    log::trace!("decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeTable;
    use crate::encode::encode;
    use crate::frequency::analyze;

    fn setup(input: &[u8]) -> (CodeTree, EncodedBits) {
        let tree = CodeTree::build(&analyze(input)).unwrap();
        let bits = encode(input, &CodeTable::generate(&tree)).unwrap();
        (tree, bits)
    }

    #[test]
    fn test_decode_abracadabra() {
        let (tree, bits) = setup(b"ABRACADABRA");
        assert_eq!(decode(&bits, &tree, None).unwrap(), b"ABRACADABRA");
        assert_eq!(decode(&bits, &tree, Some(11)).unwrap(), b"ABRACADABRA");
    }

    #[test]
    fn test_decode_single_symbol() {
        let (tree, bits) = setup(b"AAAA");
        assert_eq!(bits.to_string(), "0000");
        assert_eq!(decode(&bits, &tree, Some(4)).unwrap(), b"AAAA");
    }

    #[test]
    fn test_decode_single_symbol_needs_count() {
        let (tree, bits) = setup(b"AAAA");
        assert_eq!(decode(&bits, &tree, None), Err(Error::MissingSymbolCount));
    }

    #[test]
    fn test_decode_single_symbol_malformed() {
        let (tree, mut bits) = setup(b"AAAA");
        assert!(matches!(
            decode(&bits, &tree, Some(5)),
            Err(Error::TruncatedStream { bits: 4, depth: 0 })
        ));
        assert_eq!(
            decode(&bits, &tree, Some(3)),
            Err(Error::TrailingBits { remaining: 1 })
        );
        bits.pop();
        bits.push(true);
        assert_eq!(
            decode(&bits, &tree, Some(4)),
            Err(Error::InvalidBit { position: 3 })
        );
    }

    #[test]
    fn test_decode_truncated() {
        let (tree, mut bits) = setup(b"ABRACADABRA");
        // Stream ends "10" (R) then "0" (A); stop one bit into the R.
        bits.truncate(bits.len() - 2);
        assert_eq!(
            decode(&bits, &tree, None),
            Err(Error::TruncatedStream {
                bits: 21,
                depth: 1
            })
        );
    }

    #[test]
    fn test_decode_final_bit_removed() {
        let (tree, mut bits) = setup(b"ABRACADABRC");
        bits.pop();
        assert!(matches!(
            decode(&bits, &tree, None),
            Err(Error::TruncatedStream { .. })
        ));
    }

    #[test]
    fn test_decode_count_mismatch() {
        let (tree, bits) = setup(b"ABAB");
        assert_eq!(
            decode(&bits, &tree, Some(3)),
            Err(Error::SymbolCountMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_decode_empty_bits() {
        let (tree, _) = setup(b"AB");
        assert!(decode(&EncodedBits::new(), &tree, None).unwrap().is_empty());
    }
}
