pub mod bits;
pub mod ecc;
pub mod error;

pub use ecc::{Code, CodeConfig, CodeRegistry, CodeStrategy, Decoded, DecodedBlock};
pub use error::{Error, Result, Uncorrectable};
