//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Parity bits sit at the power-of-two positions (1-indexed) of each block and parity bit `r`
//! covers every position whose index has bit `r` set. The syndrome of a block with a single
//! error is therefore the 1-indexed position of that error, so correction is a direct lookup.
//!
//! For four data bits this is the classic Hamming(7,4) layout `[p1, p2, d1, p3, d2, d3, d4]`:
//!
//! - `p1 = d1 ^ d2 ^ d4`
//! - `p2 = d1 ^ d3 ^ d4`
//! - `p3 = d2 ^ d3 ^ d4`
//!
//! The extended variant appends an overall parity bit, which separates single errors
//! (corrected) from double errors (reported as uncorrectable).
//!
//! # Examples
//!
//! ```
//! use gf_codes::ecc::hamming::HammingCode;
//! use gf_codes::ecc::CodeStrategy;
//!
//! let code = HammingCode::standard_7_4();
//! let mut word = code.encode(&[true, false, true, true]);
//! word[5] = !word[5];
//!
//! let decoded = code.decode(&word);
//! assert_eq!(decoded.message, vec![true, false, true, true]);
//! assert_eq!(decoded.corrected, 1);
//! ```

use crate::ecc::{CodeStrategy, Decoded, DecodedBlock};
use crate::error::{Error, Result, Uncorrectable};
use log::trace;
use std::cmp::min;
use std::fmt::{Display, Formatter};

/// Represents a Hamming code configuration.
/// A Hamming(n,k) code encodes k data bits with n - k parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of data bits per block
    data_bits: usize,
    /// Number of parity bits per block
    parity_bits: usize,
    /// Whether to use extended Hamming code with additional parity bit
    extended: bool,
}

impl HammingCode {
    /// Creates a new Hamming code configuration.
    ///
    /// # Arguments
    ///
    /// * `data_bits` - Number of data bits to encode in each block
    /// * `extended` - Whether to use extended Hamming code with additional parity bit
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance or an error if invalid parameters
    pub fn new(data_bits: usize, extended: bool) -> Result<Self> {
        if data_bits == 0 {
            return Err(Error::InvalidParameter(
                "Data bits must be positive".to_string(),
            ));
        }

        // Determine required number of parity bits, where 2^r - r - 1 >= data_bits
        let mut parity_bits = 2;
        while (1 << parity_bits) - parity_bits - 1 < data_bits {
            parity_bits += 1;
        }

        Ok(HammingCode {
            data_bits,
            parity_bits,
            extended,
        })
    }

    /// Creates the standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        HammingCode {
            data_bits: 4,
            parity_bits: 3,
            extended: false,
        }
    }

    /// Creates the extended (8,4) Hamming code
    pub fn extended_8_4() -> Self {
        HammingCode {
            extended: true,
            ..Self::standard_7_4()
        }
    }

    /// Number of data bits per block
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Number of position-check parity bits per block
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Whether the overall parity bit is present
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Block length without the overall parity bit
    fn base_bits(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    /// Gets the total code word length (data bits + parity bits)
    pub fn total_bits(&self) -> usize {
        self.base_bits() + self.extended as usize
    }

    /// Encodes a single block of data bits, zero-filling a short final block
    fn encode_block(&self, data_bits: &[bool], output: &mut [bool]) {
        // Copy data bits to the non-parity positions
        let mut data_idx = 0;
        for (i, slot) in output.iter_mut().enumerate().take(self.base_bits()) {
            if is_parity_position(i) {
                continue;
            }
            *slot = data_bits.get(data_idx).copied().unwrap_or(false);
            data_idx += 1;
        }

        // Calculate parity bits
        for r in 0..self.parity_bits {
            let parity_pos = (1 << r) - 1; // 0-indexed positions are 0, 1, 3, 7, etc.
            let mut parity = false;

            for (i, &bit) in output.iter().enumerate().take(self.base_bits()) {
                if i != parity_pos && ((i + 1) & (1 << r)) != 0 && bit {
                    parity = !parity;
                }
            }

            output[parity_pos] = parity;
        }

        // For extended Hamming code, add overall parity bit
        if self.extended {
            let overall = output[..self.base_bits()].iter().fold(false, |acc, &b| acc ^ b);
            output[self.base_bits()] = overall;
        }
    }

    /// 1-indexed position of a single error, 0 if every parity check holds
    fn syndrome(&self, block: &[bool]) -> usize {
        let mut syndrome = 0;

        for r in 0..self.parity_bits {
            let mut parity = false;
            for (i, &bit) in block.iter().enumerate().take(self.base_bits()) {
                if ((i + 1) & (1 << r)) != 0 && bit {
                    parity = !parity;
                }
            }
            if parity {
                syndrome |= 1 << r;
            }
        }

        syndrome
    }
}

impl CodeStrategy for HammingCode {
    fn name(&self) -> String {
        format!("Hamming({},{})", self.total_bits(), self.data_bits)
    }

    fn description(&self) -> &'static str {
        if self.extended {
            "Extended Hamming code corrects 1-bit errors and detects 2-bit errors per block"
        } else {
            "Hamming code can detect up to 2-bit errors and correct 1-bit errors per block"
        }
    }

    fn block_length(&self) -> usize {
        self.total_bits()
    }

    fn message_length(&self) -> usize {
        self.data_bits
    }

    fn correction_capability(&self) -> usize {
        1
    }

    /// Encodes the input block by block; the last block is padded with zero bits
    fn encode(&self, input: &[bool]) -> Vec<bool> {
        if input.is_empty() {
            return Vec::new();
        }

        let blocks = input.len().div_ceil(self.data_bits);
        let mut encoded = vec![false; blocks * self.total_bits()];

        for block_idx in 0..blocks {
            let input_start = block_idx * self.data_bits;
            let output_start = block_idx * self.total_bits();

            self.encode_block(
                &input[input_start..min(input_start + self.data_bits, input.len())],
                &mut encoded[output_start..output_start + self.total_bits()],
            );
        }

        encoded
    }

    fn decode_block(&self, block: &[bool]) -> Result<DecodedBlock> {
        if block.len() != self.total_bits() {
            return Err(Error::MalformedInput {
                length: block.len(),
                block_length: self.total_bits(),
            });
        }

        let syndrome = self.syndrome(block);
        let overall_ok = !self.extended || !block.iter().fold(false, |acc, &b| acc ^ b);
        trace!("hamming syndrome {} (overall parity ok: {})", syndrome, overall_ok);

        let mut corrected = block.to_vec();
        let error_pos = match (syndrome, overall_ok) {
            (0, true) => None,
            // Only the overall parity bit itself is wrong
            (0, false) => Some(self.base_bits()),
            // Extended code: a position error with consistent overall parity means two flips
            (_, true) if self.extended => return Err(Uncorrectable::DoubleError.into()),
            (s, _) if s > self.base_bits() => {
                return Err(Uncorrectable::PositionOutOfRange {
                    position: s,
                    length: self.base_bits(),
                }
                .into())
            }
            (s, _) => Some(s - 1),
        };

        if let Some(pos) = error_pos {
            corrected[pos] = !corrected[pos];
            if self.syndrome(&corrected) != 0 {
                return Err(Uncorrectable::ResidualSyndrome.into());
            }
        }

        Ok(DecodedBlock {
            message: self.extract_message(&corrected),
            corrected: error_pos.is_some() as usize,
        })
    }

    fn extract_message(&self, block: &[bool]) -> Vec<bool> {
        block
            .iter()
            .take(self.base_bits())
            .enumerate()
            .filter(|&(i, _)| !is_parity_position(i))
            .map(|(_, &bit)| bit)
            .collect()
    }
}

impl Display for HammingCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())?;
        if self.extended {
            write!(f, " extended")?;
        }
        Ok(())
    }
}

/// Whether 0-indexed position `i` holds a parity bit (1-indexed power of two)
fn is_parity_position(i: usize) -> bool {
    (i + 1).is_power_of_two()
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> HammingCode {
    HammingCode::standard_7_4()
}

/// Creates an extended (8,4) Hamming code
pub fn create_hamming_8_4() -> HammingCode {
    HammingCode::extended_8_4()
}

/// Encodes bits using standard (7,4) Hamming code
pub fn hamming_encode(data: &[bool]) -> Vec<bool> {
    create_hamming_7_4().encode(data)
}

/// Decodes bits using standard (7,4) Hamming code
pub fn hamming_decode(encoded: &[bool]) -> Decoded {
    create_hamming_7_4().decode(encoded)
}
