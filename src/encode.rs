//! Symbol stream to bit stream.

use crate::bits::EncodedBits;
use crate::code::CodeTable;
use crate::error::{Error, Result};

/// Encode `input` by concatenating each symbol's code.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first symbol that has no code.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<EncodedBits> {
    let mut bits = EncodedBits::new();
    for (position, &symbol) in input.iter().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(Error::UnknownSymbol { symbol, position })?;
        bits.extend_from_bits(code.bits());
    }
    log::trace!("encoded {} symbols into {} bits", input.len(), bits.len());
    Ok(bits)
}
