//! Reed-Solomon codes over GF(2^s).
//!
//! A block carries `data_size` message symbols followed by `parity_size` parity
//! symbols, each `symbol_size` bits wide. The code is a shortened Reed-Solomon code
//! whose generator has the consecutive roots `alpha^b ..= alpha^(b + parity_size - 1)`,
//! so it corrects up to `parity_size / 2` symbol errors per block regardless of how
//! many bits inside a symbol are wrong.
//!
//! On the bit interface symbols are packed least significant bit first.
//!
//! # Examples
//!
//! ```
//! use gf_codes::ecc::reed_solomon::ReedSolomon;
//!
//! let rs = ReedSolomon::new(8, 8, 8).unwrap();
//! let mut block = rs.encode_symbols(b"payload!").unwrap();
//! block[2] ^= 0xFF;
//! block[11] ^= 0x01;
//!
//! let (data, corrected) = rs.decode_symbols(&block).unwrap();
//! assert_eq!(data, b"payload!");
//! assert_eq!(corrected, 2);
//! ```

use crate::bits::{pack_symbols, unpack_symbols};
use crate::ecc::forney::error_magnitudes;
use crate::ecc::galois::GaloisField;
use crate::ecc::locator::locate_errors;
use crate::ecc::{generator, polynomial, syndrome};
use crate::ecc::{CodeStrategy, DecodedBlock};
use crate::error::{Error, Result, Uncorrectable};
use log::{debug, trace};
use std::fmt::{Display, Formatter};

/// Default exponent of the first generator root
pub const DEFAULT_FIRST_ROOT: usize = 1;

/// Reed-Solomon code configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomon {
    /// Galois field for symbol arithmetic
    field: GaloisField,
    /// Symbol size in bits
    symbol_size: usize,
    /// Number of data symbols per block
    data_size: usize,
    /// Number of parity symbols per block
    parity_size: usize,
    /// Exponent b of the first consecutive generator root
    first_root: usize,
    /// Generator polynomial, low-order first
    generator: Vec<u8>,
}

impl ReedSolomon {
    /// Creates a new Reed-Solomon code with generator roots starting at alpha^1.
    ///
    /// # Arguments
    ///
    /// * `symbol_size` - Bits per symbol (field order, 2..=8)
    /// * `data_size` - Data symbols per block
    /// * `parity_size` - Parity symbols per block
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol size is unsupported, either size is zero, or
    /// a block would exceed `2^symbol_size - 1` symbols.
    pub fn new(symbol_size: usize, data_size: usize, parity_size: usize) -> Result<Self> {
        Self::with_first_root(symbol_size, data_size, parity_size, DEFAULT_FIRST_ROOT)
    }

    /// Creates a Reed-Solomon code whose generator roots start at alpha^first_root
    pub fn with_first_root(
        symbol_size: usize,
        data_size: usize,
        parity_size: usize,
        first_root: usize,
    ) -> Result<Self> {
        let field = GaloisField::new(symbol_size)?;

        if data_size == 0 || parity_size == 0 {
            return Err(Error::InvalidParameter(
                "Reed-Solomon data and parity sizes must be positive".to_string(),
            ));
        }
        let max_length = field.multiplicative_order();
        if data_size + parity_size > max_length {
            return Err(Error::InvalidParameter(format!(
                "block of {} symbols exceeds the maximum of {} for GF(2^{})",
                data_size + parity_size,
                max_length,
                symbol_size
            )));
        }

        let generator = generator::reed_solomon_generator(&field, first_root, parity_size);
        debug!(
            "Reed-Solomon({},{}) over {}: first root alpha^{}, corrects {} symbols",
            data_size,
            data_size + parity_size,
            field,
            first_root,
            parity_size / 2
        );

        Ok(ReedSolomon {
            field,
            symbol_size,
            data_size,
            parity_size,
            first_root,
            generator,
        })
    }

    /// Field the symbols live in
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn symbol_size(&self) -> usize {
        self.symbol_size
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn parity_size(&self) -> usize {
        self.parity_size
    }

    /// Exponent of the first generator root
    pub fn first_root(&self) -> usize {
        self.first_root
    }

    /// Generator polynomial, low-order first
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Symbols per encoded block
    pub fn codeword_symbols(&self) -> usize {
        self.data_size + self.parity_size
    }

    /// Encodes data symbols into one block; input is zero-padded or truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a symbol does not fit in `symbol_size` bits.
    pub fn encode_symbols(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.check_symbols(data)?;
        Ok(self.encode_unchecked(data))
    }

    /// Decodes one block of symbols, returning the data symbols and the number of
    /// corrected symbols.
    ///
    /// # Errors
    ///
    /// Fails if the block has the wrong length, holds out-of-range symbols, or
    /// carries more errors than the code can correct.
    pub fn decode_symbols(&self, block: &[u8]) -> Result<(Vec<u8>, usize)> {
        let n = self.codeword_symbols();
        if block.len() != n {
            return Err(Error::MalformedInput {
                length: block.len(),
                block_length: n,
            });
        }
        self.check_symbols(block)?;

        let syndromes = self.syndromes(block);
        trace!("{} syndromes {}", self.name(), hex::encode(&syndromes));
        if syndrome::is_zero(&syndromes) {
            return Ok((block[..self.data_size].to_vec(), 0));
        }

        let (locator, powers) = locate_errors(&self.field, &syndromes, self.parity_size / 2, n)?;
        let magnitudes =
            error_magnitudes(&self.field, &syndromes, &locator, &powers, self.first_root)?;

        let mut corrected = block.to_vec();
        for (&p, &e) in powers.iter().zip(&magnitudes) {
            corrected[n - 1 - p] ^= e;
        }

        if !syndrome::is_zero(&self.syndromes(&corrected)) {
            return Err(Uncorrectable::ResidualSyndrome.into());
        }

        debug!(
            "{} corrected {} symbols at powers {:?}: {} -> {}",
            self.name(),
            powers.len(),
            powers,
            hex::encode(block),
            hex::encode(&corrected)
        );

        corrected.truncate(self.data_size);
        Ok((corrected, powers.len()))
    }

    /// Syndromes of a block at the generator roots
    pub fn syndromes(&self, block: &[u8]) -> Vec<u8> {
        syndrome::syndromes(&self.field, block, self.first_root, self.parity_size)
    }

    fn encode_unchecked(&self, data: &[u8]) -> Vec<u8> {
        let mut block: Vec<u8> = data.iter().take(self.data_size).copied().collect();
        block.resize(self.data_size, 0);

        let parity = polynomial::shift_register_remainder(&self.field, &block, &self.generator);
        block.extend(parity);
        block
    }

    fn check_symbols(&self, symbols: &[u8]) -> Result<()> {
        match symbols.iter().find(|&&s| !self.field.contains(s)) {
            Some(&s) => Err(Error::InvalidParameter(format!(
                "symbol {:#x} does not fit in {} bits",
                s, self.symbol_size
            ))),
            None => Ok(()),
        }
    }
}

impl CodeStrategy for ReedSolomon {
    fn name(&self) -> String {
        format!("Reed-Solomon({},{})", self.data_size, self.codeword_symbols())
    }

    fn description(&self) -> &'static str {
        "Reed-Solomon code can detect and correct multiple symbol errors, commonly used in CDs, DVDs, and deep-space communication"
    }

    fn block_length(&self) -> usize {
        self.codeword_symbols() * self.symbol_size
    }

    fn message_length(&self) -> usize {
        self.data_size * self.symbol_size
    }

    fn correction_capability(&self) -> usize {
        self.parity_size / 2
    }

    /// Packs the input into symbols and encodes one block
    fn encode(&self, input: &[bool]) -> Vec<bool> {
        let symbols = pack_symbols(input, self.symbol_size);
        unpack_symbols(&self.encode_unchecked(&symbols), self.symbol_size)
    }

    fn decode_block(&self, block: &[bool]) -> Result<DecodedBlock> {
        if block.len() != self.block_length() {
            return Err(Error::MalformedInput {
                length: block.len(),
                block_length: self.block_length(),
            });
        }

        let symbols = pack_symbols(block, self.symbol_size);
        let (data, corrected) = self.decode_symbols(&symbols)?;
        Ok(DecodedBlock {
            message: unpack_symbols(&data, self.symbol_size),
            corrected,
        })
    }

    fn extract_message(&self, block: &[bool]) -> Vec<bool> {
        block.iter().take(self.message_length()).copied().collect()
    }
}

impl Display for ReedSolomon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} over GF(2^{})", self.name(), self.symbol_size)
    }
}
