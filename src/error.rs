//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a code or decoding a block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A code or field parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No primitive polynomial is tabulated for this field order
    #[error("unsupported field order m = {0}, expected 2..=8")]
    UnsupportedFieldOrder(usize),

    /// Division or inversion by the zero element
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// Received length is not a whole number of blocks
    #[error("malformed input: length {length} is not a multiple of block length {block_length}")]
    MalformedInput { length: usize, block_length: usize },

    /// The block carries more errors than the decoder can locate
    #[error("uncorrectable block: {0}")]
    UncorrectableBlock(Uncorrectable),

    /// Registry lookup for a name that was never registered
    #[error("unknown code: {0}")]
    UnknownCode(String),
}

/// Why a block could not be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    #[error("locator degree {degree} exceeds correction capability {capability}")]
    LocatorDegree { degree: usize, capability: usize },

    #[error("locator has degree {expected} but {found} roots lie inside the codeword")]
    RootCount { expected: usize, found: usize },

    #[error("syndrome is still nonzero after correction")]
    ResidualSyndrome,

    #[error("locator derivative vanishes at an error position")]
    ZeroDerivative,

    #[error("syndrome points at position {position}, outside a block of {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("double error detected by overall parity")]
    DoubleError,
}

impl From<Uncorrectable> for Error {
    fn from(reason: Uncorrectable) -> Self {
        Error::UncorrectableBlock(reason)
    }
}
