//! Packed bit sequence.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of bits packed MSB-first into bytes.
///
/// The bit length is tracked separately, so a final partial byte is
/// unambiguous. Unused low bits of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodedBits {
    bytes: Vec<u8>,
    len: usize,
}

impl EncodedBits {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Rebuild a sequence from packed bytes and a bit length.
    ///
    /// Returns `None` if `len` does not fit in `bytes`.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Option<Self> {
        if len > bytes.len() * 8 {
            return None;
        }
        let mut out = Self {
            bytes: bytes[..len.div_ceil(8)].to_vec(),
            len,
        };
        out.clear_tail();
        Some(out)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bits are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed storage; the last byte may be partially used.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append every bit of `bits` in order.
    pub fn extend_from_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push(bit);
        }
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        let bit = self.get(self.len.checked_sub(1)?)?;
        self.truncate(self.len - 1);
        Some(bit)
    }

    /// Keep only the first `len` bits.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.len = len;
        self.bytes.truncate(len.div_ceil(8));
        self.clear_tail();
    }

    /// Bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    fn clear_tail(&mut self) {
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= !(0xFFu8 >> used);
            }
        }
    }
}

impl FromIterator<bool> for EncodedBits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut out = Self::new();
        for bit in iter {
            out.push(bit);
        }
        out
    }
}

impl fmt::Display for EncodedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_packs_msb_first() {
        let bits: EncodedBits = [true, false, true, true, false, false, false, false, true]
            .into_iter()
            .collect();
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1011_0000, 0b1000_0000]);
        assert_eq!(bits.to_string(), "101100001");
    }

    #[test]
    fn test_pop_and_truncate_clear_tail() {
        let mut bits: EncodedBits = [true, true, true].into_iter().collect();
        assert_eq!(bits.pop(), Some(true));
        assert_eq!(bits.as_bytes(), &[0b1100_0000]);
        bits.truncate(0);
        assert!(bits.is_empty());
        assert!(bits.as_bytes().is_empty());
        assert_eq!(bits.pop(), None);
    }

    #[test]
    fn test_from_bytes() {
        let bits = EncodedBits::from_bytes(&[0xFF, 0xFF], 10).unwrap();
        assert_eq!(bits.to_string(), "1111111111");
        assert_eq!(bits.as_bytes(), &[0xFF, 0b1100_0000]);
        assert!(EncodedBits::from_bytes(&[0xFF], 9).is_none());
    }
}
