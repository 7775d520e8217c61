//! Error location: Berlekamp-Massey and Chien search.
//!
//! Berlekamp-Massey finds the shortest linear feedback shift register generating
//! the syndrome sequence. Its connection polynomial is the error locator
//! `C(x) = prod (1 - X_k x)`, whose roots are the inverses of the error locators
//! `X_k = alpha^p_k`. Chien search then tries every power `p` in the codeword.

use crate::ecc::galois::GaloisField;
use crate::ecc::polynomial;
use crate::error::{Result, Uncorrectable};
use log::trace;

/// Error locator polynomial produced by Berlekamp-Massey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    /// Coefficients, low-order first, `coefficients[0] == 1`
    coefficients: Vec<u8>,
    /// Register length L, the number of errors the locator claims
    length: usize,
}

impl ErrorLocator {
    /// Coefficients of `C(x)`, low-order first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Number of errors the locator accounts for (the LFSR length)
    pub fn degree(&self) -> usize {
        self.length
    }

    /// Evaluate `C(x)` at `x`
    pub fn eval(&self, gf: &GaloisField, x: u8) -> u8 {
        polynomial::eval(gf, &self.coefficients, x)
    }
}

/// Berlekamp-Massey over GF(2^m).
///
/// Processes every syndrome in order. `b` is kept normalised by the discrepancy of
/// the step that produced it, so an update is `C += d * x^gap * B`.
pub fn berlekamp_massey(gf: &GaloisField, syndromes: &[u8]) -> Result<ErrorLocator> {
    let mut c = vec![1u8];
    let mut b = vec![1u8];
    let mut length = 0usize;
    // Steps since the register length last changed
    let mut gap = 1usize;

    for i in 0..syndromes.len() {
        let mut discrepancy = syndromes[i];
        for j in 1..=length.min(c.len() - 1) {
            discrepancy ^= gf.mul(c[j], syndromes[i - j]);
        }

        if discrepancy == 0 {
            gap += 1;
            continue;
        }

        let previous = c.clone();
        if c.len() < b.len() + gap {
            c.resize(b.len() + gap, 0);
        }
        for (j, &bj) in b.iter().enumerate() {
            c[j + gap] ^= gf.mul(discrepancy, bj);
        }

        if 2 * length <= i {
            length = i + 1 - length;
            b = polynomial::scale(gf, &previous, gf.inverse(discrepancy)?);
            gap = 1;
        } else {
            gap += 1;
        }
    }

    polynomial::trim(&mut c);
    trace!("berlekamp-massey: L = {}, C = {:?}", length, c);

    Ok(ErrorLocator {
        coefficients: c,
        length,
    })
}

/// Chien search over the powers `0..length` of a codeword.
///
/// Returns the power index `p` of every root `alpha^-p` of the locator. The number
/// of roots must equal the locator degree; otherwise the pattern is beyond the
/// decoder and no partial correction is offered.
pub fn chien_search(gf: &GaloisField, locator: &ErrorLocator, length: usize) -> Result<Vec<usize>> {
    let expected = locator.degree();
    let mut terms = locator.coefficients.clone();
    let steps: Vec<u8> = (0..terms.len())
        .map(|j| gf.alpha_pow(-(j as isize)))
        .collect();

    let mut powers = Vec::with_capacity(expected);
    for p in 0..length {
        if terms.iter().fold(0, |acc, &t| acc ^ t) == 0 {
            powers.push(p);
            if powers.len() == expected {
                break;
            }
        }
        // term_j = c_j * alpha^(-p * j) -> c_j * alpha^(-(p + 1) * j)
        for (term, &step) in terms.iter_mut().zip(&steps) {
            *term = gf.mul(*term, step);
        }
    }

    if powers.len() != expected {
        return Err(Uncorrectable::RootCount {
            expected,
            found: powers.len(),
        }
        .into());
    }

    Ok(powers)
}

/// Run Berlekamp-Massey and Chien search for a code correcting `capability` errors.
///
/// # Errors
///
/// Fails with an uncorrectable-block error if the locator degree exceeds
/// `capability` or its roots do not all fall inside the codeword.
pub fn locate_errors(
    gf: &GaloisField,
    syndromes: &[u8],
    capability: usize,
    length: usize,
) -> Result<(ErrorLocator, Vec<usize>)> {
    let locator = berlekamp_massey(gf, syndromes)?;
    if locator.degree() > capability {
        return Err(Uncorrectable::LocatorDegree {
            degree: locator.degree(),
            capability,
        }
        .into());
    }

    let powers = chien_search(gf, &locator, length)?;
    Ok((locator, powers))
}
