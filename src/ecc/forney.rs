//! Forney's algorithm for error magnitudes.
//!
//! With syndromes `S_i = r(alpha^(b + i))` for `i` in `0..2t`, the error evaluator
//! is `Omega(x) = S(x) C(x) mod x^2t` and the magnitude at locator `X = alpha^p` is
//!
//! ```text
//! e = X^(1 - b) * Omega(X^-1) / C'(X^-1)
//! ```
//!
//! There is no sign in characteristic 2. Binary codes never need this: the only
//! nonzero magnitude in GF(2) is 1.

use crate::ecc::galois::GaloisField;
use crate::ecc::locator::ErrorLocator;
use crate::ecc::polynomial;
use crate::error::{Result, Uncorrectable};

/// Error evaluator `Omega(x) = S(x) C(x) mod x^len(S)`
pub fn error_evaluator(gf: &GaloisField, syndromes: &[u8], locator: &ErrorLocator) -> Vec<u8> {
    let mut omega = polynomial::mul(gf, syndromes, locator.coefficients());
    omega.truncate(syndromes.len());
    omega
}

/// Error magnitudes for the located `powers`, in the same order.
///
/// `first_root` is the exponent b of the first syndrome root.
///
/// # Errors
///
/// Fails with an uncorrectable-block error if the locator derivative vanishes at
/// one of the roots, which only happens when the locator is not square-free.
pub fn error_magnitudes(
    gf: &GaloisField,
    syndromes: &[u8],
    locator: &ErrorLocator,
    powers: &[usize],
    first_root: usize,
) -> Result<Vec<u8>> {
    let omega = error_evaluator(gf, syndromes, locator);
    let derivative = polynomial::formal_derivative(locator.coefficients());

    powers
        .iter()
        .map(|&p| {
            let p = p as isize;
            let x_inv = gf.alpha_pow(-p);
            let denominator = polynomial::eval(gf, &derivative, x_inv);
            if denominator == 0 {
                return Err(Uncorrectable::ZeroDerivative.into());
            }

            let numerator = polynomial::eval(gf, &omega, x_inv);
            let magnitude = gf.div(numerator, denominator)?;
            Ok(gf.mul(gf.alpha_pow(p * (1 - first_root as isize)), magnitude))
        })
        .collect()
}
