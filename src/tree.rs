//! Huffman code tree construction.
//!
//! The tree is built greedily: the two lightest nodes are merged until one
//! remains. Equal weights are resolved by a fixed rank so that identical
//! frequency tables always give identical trees:
//!
//! - an internal node ranks `n`, where `n` counts merges before it (`0..255`);
//! - a leaf ranks `256 + symbol`.
//!
//! At equal frequency internal nodes therefore leave the heap before leaves,
//! older internal nodes before newer, and smaller symbols before larger ones.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

use crate::code::symbol_name;
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// Internal nodes own both children exclusively; the tree is acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its count.
    Leaf {
        /// The symbol.
        symbol: u8,
        /// Occurrences of the symbol.
        freq: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of both children's frequencies.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Aggregate frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The leaf's symbol, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        // Subtree weights are bounded by the table total, which fits in u64.
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Heap slot ordered by `(freq, rank)` only.
struct Entry {
    freq: u64,
    rank: u64,
    node: Node,
}

impl Entry {
    fn key(&self) -> (u64, u64) {
        (self.freq, self.rank)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

const LEAF_RANK_BASE: u64 = 256;

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    /// Build the tree for `freq`.
    ///
    /// Returns `None` only for an empty table. A single distinct symbol
    /// gives a tree that is a lone leaf.
    pub fn build(freq: &FrequencyTable) -> Option<Self> {
        let mut heap: BinaryHeap<Reverse<Entry>> = freq
            .iter()
            .map(|(symbol, count)| {
                Reverse(Entry {
                    freq: count,
                    rank: LEAF_RANK_BASE + symbol as u64,
                    node: Node::Leaf {
                        symbol,
                        freq: count,
                    },
                })
            })
            .collect();

        let mut merges = 0u64;
        loop {
            let Reverse(first) = heap.pop()?;
            let Some(Reverse(second)) = heap.pop() else {
                log::trace!(
                    "built code tree: {} symbols, {} merges",
                    freq.len(),
                    merges
                );
                return Some(Self { root: first.node });
            };

            // First out goes left.
            let node = Node::merge(first.node, second.node);
            heap.push(Reverse(Entry {
                freq: node.freq(),
                rank: merges,
                node,
            }));
            merges += 1;
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the whole tree is one leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node.children() {
                None => 1,
                Some((l, r)) => walk(l) + walk(r),
            }
        }
        walk(&self.root)
    }

    /// Number of internal nodes; always `leaf_count() - 1`.
    pub fn internal_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node.children() {
                None => 0,
                Some((l, r)) => 1 + walk(l).max(walk(r)),
            }
        }
        walk(&self.root)
    }

    /// Frequency at the root, equal to the analyzed input length.
    pub fn total_freq(&self) -> u64 {
        self.root.freq()
    }

    /// Recover the frequency table from the leaves.
    pub fn frequencies(&self) -> FrequencyTable {
        let mut counts = BTreeMap::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, freq } => {
                    counts.insert(*symbol, *freq);
                }
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        FrequencyTable::from_distinct(counts, self.root.freq())
    }
}

impl fmt::Display for CodeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn node(f: &mut fmt::Formatter<'_>, n: &Node, depth: usize, label: &str) -> fmt::Result {
            let indent = "  ".repeat(depth);
            match n {
                Node::Leaf { symbol, freq } => {
                    writeln!(f, "{indent}{label} Leaf '{}' [{freq}]", symbol_name(*symbol))
                }
                Node::Internal { freq, left, right } => {
                    writeln!(f, "{indent}{label} Internal [{freq}]")?;
                    node(f, left, depth + 1, "0")?;
                    node(f, right, depth + 1, "1")
                }
            }
        }
        node(f, &self.root, 0, "root")
    }
}
