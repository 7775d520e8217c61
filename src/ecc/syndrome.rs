//! Syndrome computation.
//!
//! The received word is read as a polynomial in codeword order (first symbol is the
//! highest power) and evaluated at consecutive powers of alpha. A word is a
//! codeword exactly when every syndrome is zero.

use crate::ecc::galois::GaloisField;
use crate::ecc::polynomial;

/// Evaluate `word` at `alpha^first_root, ..., alpha^(first_root + count - 1)`.
///
/// Returns the syndromes low-order first, ready to be read as `S(x)`.
pub fn syndromes(gf: &GaloisField, word: &[u8], first_root: usize, count: usize) -> Vec<u8> {
    (0..count)
        .map(|i| {
            let root = gf.alpha_pow((first_root + i) as isize);
            polynomial::eval_descending(gf, word, root)
        })
        .collect()
}

/// Syndromes of a binary word, bits mapped to the field elements 0 and 1
pub fn binary_syndromes(
    gf: &GaloisField,
    bits: &[bool],
    first_root: usize,
    count: usize,
) -> Vec<u8> {
    let word: Vec<u8> = bits.iter().map(|&b| b as u8).collect();
    syndromes(gf, &word, first_root, count)
}

/// Whether the syndrome vector marks an error-free word
pub fn is_zero(syndromes: &[u8]) -> bool {
    polynomial::is_zero(syndromes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::generator;

    #[test]
    fn test_generator_multiple_has_zero_syndromes() {
        let gf = GaloisField::new(4).unwrap();
        let g = generator::reed_solomon_generator(&gf, 1, 4);
        // x^2 * g(x), written high-order first
        let mut word: Vec<u8> = g.iter().rev().copied().collect();
        word.extend_from_slice(&[0, 0]);

        let s = syndromes(&gf, &word, 1, 4);
        assert_eq!(s.len(), 4);
        assert!(is_zero(&s));
    }

    #[test]
    fn test_single_error_syndromes() {
        let gf = GaloisField::new(4).unwrap();
        // Error value 1 at power p = 3 of a length-15 word: index 15 - 1 - 3
        let mut word = vec![0u8; 15];
        word[11] = 1;

        let s = syndromes(&gf, &word, 1, 4);
        for (i, &si) in s.iter().enumerate() {
            assert_eq!(si, gf.alpha_pow(3 * (i as isize + 1)));
        }
        assert!(!is_zero(&s));
    }

    #[test]
    fn test_binary_syndromes_match_symbol_form() {
        let gf = GaloisField::new(4).unwrap();
        let bits = [true, false, true, true, false, false, true];
        let symbols: Vec<u8> = bits.iter().map(|&b| b as u8).collect();
        assert_eq!(
            binary_syndromes(&gf, &bits, 1, 4),
            syndromes(&gf, &symbols, 1, 4)
        );
    }
}
