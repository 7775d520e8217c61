//! Error correction code implementations.
//!
//! This module provides systematic block codes built on GF(2^m) arithmetic:
//! - Hamming codes (single error correction, optional double error detection)
//! - Binary BCH codes
//! - Reed-Solomon codes
//!
//! # Decoding pipeline
//!
//! BCH and Reed-Solomon share one decoder: syndromes at the generator roots,
//! Berlekamp-Massey for the error locator, Chien search for the error positions
//! and, for non-binary symbols, Forney's algorithm for the error values. Every
//! corrected block is checked against a fresh syndrome before it is accepted.
//!
//! # Examples
//!
//! ```rust
//! use gf_codes::ecc::{CodeConfig, CodeStrategy};
//!
//! let code: CodeConfig = "bch:4:2".parse().unwrap();
//! let code = code.configure().unwrap();
//!
//! let message = vec![true, false, true, true, false, false, true];
//! let mut word = code.encode(&message);
//! word[0] = !word[0];
//! word[9] = !word[9];
//!
//! let decoded = code.decode(&word);
//! assert_eq!(decoded.message, message);
//! assert_eq!(decoded.corrected, 2);
//! ```

use crate::error::{Error, Result};
use log::warn;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod bch;
pub mod forney;
pub mod galois;
pub mod generator;
pub mod hamming;
pub mod locator;
pub mod polynomial;
pub mod reed_solomon;
pub mod registry;
pub mod syndrome;

pub use bch::BchCode;
pub use galois::GaloisField;
pub use hamming::{
    create_hamming_7_4, create_hamming_8_4, hamming_decode, hamming_encode, HammingCode,
};
pub use reed_solomon::ReedSolomon;
pub use registry::CodeRegistry;

/// Result of decoding a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    /// Message bits of the block
    pub message: Vec<bool>,
    /// Number of bits (or symbols) corrected
    pub corrected: usize,
}

/// Result of decoding a received bit stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Concatenated message bits of every block
    pub message: Vec<bool>,
    /// Total corrections over all blocks
    pub corrected: usize,
    /// Blocks that could not be corrected and were passed through raw
    pub failed_blocks: usize,
}

impl Decoded {
    fn push(&mut self, block: DecodedBlock) {
        self.message.extend(block.message);
        self.corrected += block.corrected;
    }
}

/// Trait for error correction code implementations
pub trait CodeStrategy {
    /// Short name including the code parameters, e.g. `BCH(15,7,2)`
    fn name(&self) -> String;

    /// One-line description of the code family
    fn description(&self) -> &'static str;

    /// Encoded bits per block
    fn block_length(&self) -> usize;

    /// Message bits per block
    fn message_length(&self) -> usize;

    /// Errors correctable per block (bits, or symbols for Reed-Solomon)
    fn correction_capability(&self) -> usize;

    /// Encode message bits with error correction parity
    fn encode(&self, input: &[bool]) -> Vec<bool>;

    /// Decode exactly one block, correcting errors if possible
    fn decode_block(&self, block: &[bool]) -> Result<DecodedBlock>;

    /// Read the message bits of a block without correction
    fn extract_message(&self, block: &[bool]) -> Vec<bool>;

    /// Code rate k / n
    fn rate(&self) -> f64 {
        self.message_length() as f64 / self.block_length() as f64
    }

    /// Decode a stream of whole blocks, failing on the first uncorrectable block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the length is not a multiple of the block
    /// length, or the error of the first block that cannot be corrected.
    fn try_decode(&self, received: &[bool]) -> Result<Decoded> {
        check_block_multiple(received.len(), self.block_length())?;

        let mut decoded = Decoded::default();
        for block in received.chunks(self.block_length()) {
            decoded.push(self.decode_block(block)?);
        }
        Ok(decoded)
    }

    /// Decode a stream of whole blocks without failing.
    ///
    /// Malformed input yields an empty message. A block that cannot be corrected
    /// contributes its raw message bits and no corrections.
    fn decode(&self, received: &[bool]) -> Decoded {
        if let Err(e) = check_block_multiple(received.len(), self.block_length()) {
            warn!("{}: {}", self.name(), e);
            return Decoded::default();
        }

        let mut decoded = Decoded::default();
        for (index, block) in received.chunks(self.block_length()).enumerate() {
            let (block, failed) = decode_or_pass_through(self, index, block);
            decoded.push(block);
            decoded.failed_blocks += failed as usize;
        }
        decoded
    }
}

fn check_block_multiple(length: usize, block_length: usize) -> Result<()> {
    if block_length == 0 || length % block_length != 0 {
        return Err(Error::MalformedInput {
            length,
            block_length,
        });
    }
    Ok(())
}

/// Decode one block, falling back to its raw message bits on failure
fn decode_or_pass_through<C: CodeStrategy + ?Sized>(
    code: &C,
    index: usize,
    block: &[bool],
) -> (DecodedBlock, bool) {
    match code.decode_block(block) {
        Ok(decoded) => (decoded, false),
        Err(e) => {
            warn!("{}: block {} passed through uncorrected: {}", code.name(), index, e);
            let raw = DecodedBlock {
                message: code.extract_message(block),
                corrected: 0,
            };
            (raw, true)
        }
    }
}

/// Decode independent blocks on the rayon thread pool.
///
/// Same result as [`CodeStrategy::decode`], blocks are reassembled in order.
#[cfg(feature = "parallel")]
pub fn decode_parallel<C: CodeStrategy + Sync + ?Sized>(code: &C, received: &[bool]) -> Decoded {
    use rayon::prelude::*;

    if let Err(e) = check_block_multiple(received.len(), code.block_length()) {
        warn!("{}: {}", code.name(), e);
        return Decoded::default();
    }

    let blocks: Vec<(DecodedBlock, bool)> = received
        .par_chunks(code.block_length())
        .enumerate()
        .map(|(index, block)| decode_or_pass_through(code, index, block))
        .collect();

    let mut decoded = Decoded::default();
    for (block, failed) in blocks {
        decoded.push(block);
        decoded.failed_blocks += failed as usize;
    }
    decoded
}

/// A configured code of any supported family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Hamming(HammingCode),
    Bch(BchCode),
    ReedSolomon(ReedSolomon),
}

macro_rules! dispatch {
    ($self:ident, $code:ident => $call:expr) => {
        match $self {
            Code::Hamming($code) => $call,
            Code::Bch($code) => $call,
            Code::ReedSolomon($code) => $call,
        }
    };
}

impl CodeStrategy for Code {
    fn name(&self) -> String {
        dispatch!(self, code => code.name())
    }

    fn description(&self) -> &'static str {
        dispatch!(self, code => code.description())
    }

    fn block_length(&self) -> usize {
        dispatch!(self, code => code.block_length())
    }

    fn message_length(&self) -> usize {
        dispatch!(self, code => code.message_length())
    }

    fn correction_capability(&self) -> usize {
        dispatch!(self, code => code.correction_capability())
    }

    fn encode(&self, input: &[bool]) -> Vec<bool> {
        dispatch!(self, code => code.encode(input))
    }

    fn decode_block(&self, block: &[bool]) -> Result<DecodedBlock> {
        dispatch!(self, code => code.decode_block(block))
    }

    fn extract_message(&self, block: &[bool]) -> Vec<bool> {
        dispatch!(self, code => code.extract_message(block))
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, code => Display::fmt(code, f))
    }
}

impl From<HammingCode> for Code {
    fn from(code: HammingCode) -> Self {
        Code::Hamming(code)
    }
}

impl From<BchCode> for Code {
    fn from(code: BchCode) -> Self {
        Code::Bch(code)
    }
}

impl From<ReedSolomon> for Code {
    fn from(code: ReedSolomon) -> Self {
        Code::ReedSolomon(code)
    }
}

/// Parameters selecting a code family, parsed from strings such as `bch:4:2`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeConfig {
    /// Hamming(7,4)
    #[default]
    Hamming,
    /// Extended Hamming(8,4)
    HammingExtended,
    /// BCH over GF(2^m) correcting t bit errors
    Bch { m: usize, t: usize },
    /// Reed-Solomon with `symbol_size`-bit symbols
    ReedSolomon {
        symbol_size: usize,
        data_size: usize,
        parity_size: usize,
    },
}

impl CodeConfig {
    /// Build the code these parameters describe.
    ///
    /// # Errors
    ///
    /// Returns the constructor's error for out-of-range parameters.
    pub fn configure(&self) -> Result<Code> {
        let code = match *self {
            CodeConfig::Hamming => HammingCode::standard_7_4().into(),
            CodeConfig::HammingExtended => HammingCode::extended_8_4().into(),
            CodeConfig::Bch { m, t } => BchCode::new(m, t)?.into(),
            CodeConfig::ReedSolomon {
                symbol_size,
                data_size,
                parity_size,
            } => ReedSolomon::new(symbol_size, data_size, parity_size)?.into(),
        };
        Ok(code)
    }
}

impl Display for CodeConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeConfig::Hamming => write!(f, "hamming"),
            CodeConfig::HammingExtended => write!(f, "hamming-extended"),
            CodeConfig::Bch { m, t } => write!(f, "bch:{}:{}", m, t),
            CodeConfig::ReedSolomon {
                symbol_size,
                data_size,
                parity_size,
            } => write!(f, "rs:{}:{}:{}", symbol_size, data_size, parity_size),
        }
    }
}

impl FromStr for CodeConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let mut parts = lower.split(':');
        let kind = parts.next().unwrap_or_default();
        let params = parts
            .map(|p| {
                p.parse::<usize>().map_err(|_| {
                    Error::InvalidParameter(format!("'{}' is not a number in '{}'", p, s))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        match (kind, params.as_slice()) {
            ("hamming", []) => Ok(CodeConfig::Hamming),
            ("hamming-extended", []) => Ok(CodeConfig::HammingExtended),
            ("bch", &[m, t]) => Ok(CodeConfig::Bch { m, t }),
            ("rs", &[symbol_size, data_size, parity_size]) => Ok(CodeConfig::ReedSolomon {
                symbol_size,
                data_size,
                parity_size,
            }),
            _ => Err(Error::InvalidParameter(format!(
                "unrecognised code '{}', expected hamming, hamming-extended, bch:<m>:<t> or rs:<s>:<d>:<p>",
                s
            ))),
        }
    }
}
