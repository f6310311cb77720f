//! Symbol frequency analysis.

use std::collections::btree_map::{self, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Occurrence count per symbol.
///
/// Keys are exactly the symbols that occur; a symbol is never stored with a
/// zero count. The sum of all counts always fits in a `u64`, so every
/// subtree weight derived from the table does too. Iteration runs in
/// ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BTreeMap<u8, u64>", into = "BTreeMap<u8, u64>")
)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(symbol, count)` pairs. Zero counts are dropped
    /// and repeated symbols accumulate.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the counts sum past `u64::MAX`.
    pub fn from_pairs<I: IntoIterator<Item = (u8, u64)>>(pairs: I) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, count) in pairs {
            table.add(symbol, count)?;
        }
        Ok(table)
    }

    /// Table from non-zero counts already known to sum to `total`.
    pub(crate) fn from_distinct(counts: BTreeMap<u8, u64>, total: u64) -> Self {
        Self { counts, total }
    }

    /// Count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analyzed input.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Add `count` occurrences of `symbol`.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the table total would exceed
    /// `u64::MAX`; the table is left unchanged.
    pub fn add(&mut self, symbol: u8, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let total = self
            .total
            .checked_add(count)
            .ok_or(Error::FrequencyOverflow { symbol })?;
        // A single count never exceeds the total, so this cannot overflow.
        *self.counts.entry(symbol).or_insert(0) += count;
        self.total = total;
        Ok(())
    }
}

impl TryFrom<BTreeMap<u8, u64>> for FrequencyTable {
    type Error = Error;

    fn try_from(counts: BTreeMap<u8, u64>) -> Result<Self> {
        Self::from_pairs(counts)
    }
}

impl From<FrequencyTable> for BTreeMap<u8, u64> {
    fn from(table: FrequencyTable) -> Self {
        table.counts
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a u8, &'a u64);
    type IntoIter = btree_map::Iter<'a, u8, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Count every symbol of `input`.
///
/// Empty input yields an empty table.
pub fn analyze(input: &[u8]) -> FrequencyTable {
    // Dense counting first; the map only ever sees distinct symbols.
    let mut dense = [0u64; 256];
    for &b in input {
        dense[b as usize] += 1;
    }

    let counts: BTreeMap<u8, u64> = dense
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(s, &c)| (s as u8, c))
        .collect();
    let table = FrequencyTable::from_distinct(counts, input.len() as u64);

    log::trace!(
        "analyzed {} symbols, {} distinct",
        input.len(),
        table.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_analyze_abracadabra() {
        let table = analyze(b"ABRACADABRA");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![(b'A', 5), (b'B', 2), (b'C', 1), (b'D', 1), (b'R', 2)]
        );
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_analyze_empty() {
        let table = analyze(b"");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.get(b'a'), None);
    }

    #[test]
    fn test_zero_counts_dropped() {
        let table = FrequencyTable::from_pairs([(b'a', 0), (b'b', 3), (b'b', 1)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'b'), Some(4));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_total_overflow_rejected() {
        assert_eq!(
            FrequencyTable::from_pairs([(b'a', u64::MAX), (b'b', 1)]),
            Err(Error::FrequencyOverflow { symbol: b'b' })
        );

        let mut table = FrequencyTable::from_pairs([(b'a', u64::MAX - 1)]).unwrap();
        assert_eq!(
            table.add(b'a', 2),
            Err(Error::FrequencyOverflow { symbol: b'a' })
        );
        assert_eq!(table.get(b'a'), Some(u64::MAX - 1));
        table.add(b'b', 1).unwrap();
        assert_eq!(table.total(), u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_overflowing_table() {
        let table = analyze(b"abcab");
        let json = serde_json::to_string(&table).unwrap();
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);

        let json = format!("{{\"97\":{},\"98\":1}}", u64::MAX);
        assert!(serde_json::from_str::<FrequencyTable>(&json).is_err());
    }

    proptest! {
        #[test]
        fn prop_counts_conserved(input in prop::collection::vec(any::<u8>(), 0..512)) {
            let table = analyze(&input);
            prop_assert_eq!(table.total(), input.len() as u64);
            for (symbol, count) in table.iter() {
                prop_assert!(count > 0);
                let actual = input.iter().filter(|&&b| b == symbol).count() as u64;
                prop_assert_eq!(count, actual);
            }
        }

        #[test]
        fn prop_from_pairs_matches_analyze(input in prop::collection::vec(any::<u8>(), 0..256)) {
            let table = FrequencyTable::from_pairs(input.iter().map(|&b| (b, 1))).unwrap();
            prop_assert_eq!(table, analyze(&input));
        }
    }
}
