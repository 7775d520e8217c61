//! Binary BCH codes.
//!
//! A narrow-sense primitive BCH code of length `n = 2^m - 1` corrects up to `t` bit
//! errors. Its generator has `alpha^1 ..= alpha^2t` among its roots, so the `2t`
//! syndromes at those powers vanish exactly on codewords. Decoding runs
//! Berlekamp-Massey and Chien search; every error magnitude is 1, so located bits
//! are simply flipped.

use crate::ecc::galois::GaloisField;
use crate::ecc::locator::locate_errors;
use crate::ecc::{generator, polynomial, syndrome};
use crate::ecc::{CodeStrategy, DecodedBlock};
use crate::error::{Error, Result, Uncorrectable};
use log::{debug, trace};
use std::fmt::{Display, Formatter};

/// Syndromes of a narrow-sense BCH code start at alpha^1
const FIRST_ROOT: usize = 1;

/// BCH code configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BchCode {
    /// Field the generator roots live in
    field: GaloisField,
    /// Code length (n = 2^m - 1)
    n: usize,
    /// Message length (k = n - deg g)
    k: usize,
    /// Error correction capability
    t: usize,
    /// Generator polynomial, low-order first, coefficients in {0, 1}
    generator: Vec<u8>,
}

impl BchCode {
    /// Creates a new BCH code.
    ///
    /// # Arguments
    ///
    /// * `m` - Field order, the code length is 2^m - 1
    /// * `t` - Number of bit errors to correct per block
    ///
    /// # Errors
    ///
    /// Returns an error if `m` is outside `2..=8`, `t` is zero, `2t >= n`, or the
    /// generator leaves no room for message bits.
    pub fn new(m: usize, t: usize) -> Result<Self> {
        Self::from_field(GaloisField::new(m)?, t)
    }

    /// Creates a BCH code over a field built from a custom primitive polynomial
    pub fn with_primitive(m: usize, t: usize, primitive_poly: u16) -> Result<Self> {
        Self::from_field(GaloisField::with_primitive(m, primitive_poly)?, t)
    }

    fn from_field(field: GaloisField, t: usize) -> Result<Self> {
        let n = field.multiplicative_order();
        if t == 0 {
            return Err(Error::InvalidParameter(
                "BCH correction capability must be positive".to_string(),
            ));
        }
        if 2 * t >= n {
            return Err(Error::InvalidParameter(format!(
                "BCH code of length {} cannot correct {} errors",
                n, t
            )));
        }

        let generator = generator::bch_generator(&field, t);
        let parity = polynomial::degree(&generator);
        if parity >= n {
            return Err(Error::InvalidParameter(format!(
                "BCH generator of degree {} leaves no message bits in length {}",
                parity, n
            )));
        }

        let k = n - parity;
        debug!("BCH({},{},{}) over {}: generator degree {}", n, k, t, field, parity);

        Ok(BchCode {
            field,
            n,
            k,
            t,
            generator,
        })
    }

    /// Field the code is defined over
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Generator polynomial, low-order first
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Syndromes `S_1 ..= S_2t` of a received block
    pub fn syndromes(&self, block: &[bool]) -> Vec<u8> {
        syndrome::binary_syndromes(&self.field, block, FIRST_ROOT, 2 * self.t)
    }

    fn check_length(&self, block: &[bool]) -> Result<()> {
        if block.len() != self.n {
            return Err(Error::MalformedInput {
                length: block.len(),
                block_length: self.n,
            });
        }
        Ok(())
    }
}

impl CodeStrategy for BchCode {
    fn name(&self) -> String {
        format!("BCH({},{},{})", self.n, self.k, self.t)
    }

    fn description(&self) -> &'static str {
        "BCH codes are powerful cyclic error-correcting codes used in satellite communication and storage systems"
    }

    fn block_length(&self) -> usize {
        self.n
    }

    fn message_length(&self) -> usize {
        self.k
    }

    fn correction_capability(&self) -> usize {
        self.t
    }

    /// Encodes one block; input is zero-padded or truncated to `k` bits
    fn encode(&self, input: &[bool]) -> Vec<bool> {
        let mut message: Vec<u8> = input.iter().take(self.k).map(|&b| b as u8).collect();
        message.resize(self.k, 0);

        let parity = polynomial::shift_register_remainder(&self.field, &message, &self.generator);

        message
            .into_iter()
            .chain(parity)
            .map(|bit| bit != 0)
            .collect()
    }

    fn decode_block(&self, block: &[bool]) -> Result<DecodedBlock> {
        self.check_length(block)?;

        let syndromes = self.syndromes(block);
        trace!("{} syndromes {:?}", self.name(), syndromes);
        if syndrome::is_zero(&syndromes) {
            return Ok(DecodedBlock {
                message: self.extract_message(block),
                corrected: 0,
            });
        }

        let (_, powers) = locate_errors(&self.field, &syndromes, self.t, self.n)?;

        let mut corrected = block.to_vec();
        for &p in &powers {
            let idx = self.n - 1 - p;
            corrected[idx] = !corrected[idx];
        }

        if !syndrome::is_zero(&self.syndromes(&corrected)) {
            return Err(Uncorrectable::ResidualSyndrome.into());
        }

        debug!("{} corrected {} bit errors at powers {:?}", self.name(), powers.len(), powers);

        Ok(DecodedBlock {
            message: self.extract_message(&corrected),
            corrected: powers.len(),
        })
    }

    fn extract_message(&self, block: &[bool]) -> Vec<bool> {
        block.iter().take(self.k).copied().collect()
    }
}

impl Display for BchCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} over GF(2^{})", self.name(), self.field.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::index::sample;
    use rand::{Rng, SeedableRng};

    fn random_message(rng: &mut StdRng, k: usize) -> Vec<bool> {
        (0..k).map(|_| rng.gen_bool(0.5)).collect()
    }

    #[test]
    fn test_bch_creation() {
        let bch = BchCode::new(4, 2).unwrap();
        assert_eq!(bch.block_length(), 15);
        assert_eq!(bch.message_length(), 7);
        assert_eq!(bch.correction_capability(), 2);
        assert_eq!(bch.name(), "BCH(15,7,2)");
        assert_eq!(bch.to_string(), "BCH(15,7,2) over GF(2^4)");
        assert_eq!(bch.generator(), &[1, 0, 0, 0, 1, 0, 1, 1, 1]);

        let bch = BchCode::new(5, 3).unwrap();
        assert_eq!((bch.block_length(), bch.message_length()), (31, 16));

        let bch = BchCode::new(6, 1).unwrap();
        assert_eq!((bch.block_length(), bch.message_length()), (63, 57));

        let bch = BchCode::new(8, 4).unwrap();
        assert_eq!((bch.block_length(), bch.message_length()), (255, 223));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(BchCode::new(4, 0), Err(Error::InvalidParameter(_))));
        assert!(matches!(BchCode::new(4, 8), Err(Error::InvalidParameter(_))));
        assert_eq!(BchCode::new(9, 2), Err(Error::UnsupportedFieldOrder(9)));
    }

    #[test]
    fn test_largest_radius_is_repetition_code() {
        // t = 7 takes every nonzero coset of GF(16), leaving a single message bit
        let bch = BchCode::new(4, 7).unwrap();
        assert_eq!(bch.message_length(), 1);
        assert_eq!(bch.encode(&[true]), vec![true; 15]);

        let mut received = vec![true; 15];
        for idx in [0, 2, 5, 7, 9, 11, 14] {
            received[idx] = false;
        }
        let decoded = bch.decode_block(&received).unwrap();
        assert_eq!(decoded.message, vec![true]);
        assert_eq!(decoded.corrected, 7);
    }

    #[test]
    fn test_custom_primitive_polynomial() {
        let bch = BchCode::with_primitive(4, 2, 0x19).unwrap();
        assert_eq!(bch.message_length(), 7);
        assert_ne!(bch.generator(), BchCode::new(4, 2).unwrap().generator());

        let message = vec![true, true, false, true, false, false, true];
        let mut word = bch.encode(&message);
        word[3] = !word[3];
        word[12] = !word[12];
        let decoded = bch.decode(&word);
        assert_eq!(decoded.message, message);
        assert_eq!(decoded.corrected, 2);
    }

    #[test]
    fn test_encode_is_systematic_codeword() {
        let bch = BchCode::new(4, 2).unwrap();
        let message = vec![true, false, true, true, false, false, true];
        let encoded = bch.encode(&message);
        assert_eq!(encoded.len(), 15);
        assert_eq!(&encoded[..7], &message[..]);
        assert!(syndrome::is_zero(&bch.syndromes(&encoded)));
    }

    #[test]
    fn test_pad_and_truncate() {
        let bch = BchCode::new(4, 2).unwrap();
        let short = bch.encode(&[true, true]);
        assert_eq!(
            bch.decode(&short).message,
            vec![true, true, false, false, false, false, false]
        );

        let long: Vec<bool> = vec![true; 12];
        assert_eq!(bch.decode(&bch.encode(&long)).message, vec![true; 7]);
    }

    #[test]
    fn test_every_single_and_double_error() {
        let bch = BchCode::new(4, 2).unwrap();
        let message = vec![false, true, true, false, true, false, true];
        let encoded = bch.encode(&message);

        for i in 0..15 {
            for j in i..15 {
                let mut received = encoded.clone();
                received[i] = !received[i];
                if j != i {
                    received[j] = !received[j];
                }
                let decoded = bch.decode_block(&received).unwrap();
                assert_eq!(decoded.message, message, "errors at {} and {}", i, j);
                assert_eq!(decoded.corrected, if i == j { 1 } else { 2 });
            }
        }
    }

    #[test]
    fn test_random_errors_within_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        for (m, t) in [(5, 3), (6, 4), (7, 5), (8, 8)] {
            let bch = BchCode::new(m, t).unwrap();
            for _ in 0..20 {
                let message = random_message(&mut rng, bch.message_length());
                let mut received = bch.encode(&message);
                let weight = rng.gen_range(1..=t);
                for idx in sample(&mut rng, bch.block_length(), weight).into_iter() {
                    received[idx] = !received[idx];
                }

                let decoded = bch.try_decode(&received).unwrap();
                assert_eq!(decoded.message, message);
                assert_eq!(decoded.corrected, weight);
            }
        }
    }

    #[test]
    fn test_beyond_radius_never_claims_false_codeword() {
        let mut rng = StdRng::seed_from_u64(7);
        let bch = BchCode::new(4, 2).unwrap();
        for _ in 0..200 {
            let message = random_message(&mut rng, 7);
            let mut received = bch.encode(&message);
            for idx in sample(&mut rng, 15, 3).into_iter() {
                received[idx] = !received[idx];
            }

            match bch.decode_block(&received) {
                Err(Error::UncorrectableBlock(_)) => {}
                Err(e) => panic!("unexpected error {}", e),
                Ok(block) => {
                    // Miscorrection onto a nearby codeword within the radius
                    let reencoded = bch.encode(&block.message);
                    let distance = reencoded
                        .iter()
                        .zip(&received)
                        .filter(|(a, b)| a != b)
                        .count();
                    assert_eq!(distance, block.corrected);
                    assert!(block.corrected <= 2);
                }
            }
        }
    }

    #[test]
    fn test_multiple_blocks() {
        let bch = BchCode::new(4, 2).unwrap();
        let first = vec![true, false, false, true, true, false, true];
        let second = vec![false, false, true, true, true, true, false];

        let mut received = bch.encode(&first);
        received.extend(bch.encode(&second));
        received[1] = !received[1];
        received[16] = !received[16];
        received[29] = !received[29];

        let decoded = bch.try_decode(&received).unwrap();
        assert_eq!(decoded.message, [first, second].concat());
        assert_eq!(decoded.corrected, 3);
    }

    #[test]
    fn test_malformed_block_length() {
        let bch = BchCode::new(4, 2).unwrap();
        assert_eq!(
            bch.decode_block(&[false; 14]),
            Err(Error::MalformedInput {
                length: 14,
                block_length: 15
            })
        );
        assert!(bch.decode(&[false; 16]).message.is_empty());
    }
}
