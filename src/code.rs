//! Code table generation.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::{CodeTree, Node};

/// A non-empty bit string assigned to one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false for generated codes.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, root side first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True if `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping derived from a [`CodeTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walk `tree` and record the root-to-leaf path of every leaf.
    ///
    /// Left edges are `0`, right edges `1`. A tree that is a lone leaf gets
    /// the one-bit code `0`.
    pub fn generate(tree: &CodeTree) -> Self {
        let mut codes = BTreeMap::new();
        collect(tree.root(), Vec::new(), &mut codes);
        Self { codes }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    /// Longest code length, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Bits needed to encode an input with frequency table `freq`.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_len(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .filter_map(|(s, count)| self.get(s).map(|c| c.len() as u64 * count))
            .sum()
    }
}

fn collect(node: &Node, path: Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            let bits = if path.is_empty() { vec![false] } else { path };
            codes.insert(*symbol, Code { bits });
        }
        Node::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(false);
            collect(left, left_path, codes);

            let mut right_path = path;
            right_path.push(true);
            collect(right, right_path, codes);
        }
    }
}

/// Printable name for a symbol in reports.
pub(crate) fn symbol_name(symbol: u8) -> Cow<'static, str> {
    match symbol {
        b' ' => Cow::Borrowed("SPACE"),
        b'\n' => Cow::Borrowed("NEWLINE"),
        b'\t' => Cow::Borrowed("TAB"),
        s if s.is_ascii_graphic() => Cow::Owned((s as char).to_string()),
        s => Cow::Owned(format!("{s:#04x}")),
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{} -> {}", symbol_name(symbol), code)?;
        }
        Ok(())
    }
}
