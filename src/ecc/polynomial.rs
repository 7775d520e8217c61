//! Polynomial arithmetic over GF(2^m).
//!
//! Polynomials are coefficient slices stored low-order first: `p[i]` is the
//! coefficient of `x^i`. Codewords are the exception: they are stored message-first,
//! which is high-order first, and the helpers that consume codewords say so.

use crate::ecc::galois::GaloisField;
use crate::error::{Error, Result};

/// Degree of `p`; the zero polynomial has degree 0
pub fn degree(p: &[u8]) -> usize {
    p.iter().rposition(|&c| c != 0).unwrap_or(0)
}

/// Whether every coefficient is zero
pub fn is_zero(p: &[u8]) -> bool {
    p.iter().all(|&c| c == 0)
}

/// Drop high-order zero coefficients, keeping at least one coefficient
pub fn trim(p: &mut Vec<u8>) {
    let len = degree(p) + 1;
    p.truncate(len);
    if p.is_empty() {
        p.push(0);
    }
}

/// Sum of two polynomials (coefficient-wise XOR)
pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = long.to_vec();
    for (s, &c) in sum.iter_mut().zip(short) {
        *s ^= c;
    }
    sum
}

/// Multiply every coefficient by the field element `c`
pub fn scale(gf: &GaloisField, p: &[u8], c: u8) -> Vec<u8> {
    p.iter().map(|&a| gf.mul(a, c)).collect()
}

/// Product of two polynomials
pub fn mul(gf: &GaloisField, a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut product = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            product[i + j] ^= gf.mul(ai, bj);
        }
    }
    product
}

/// Evaluate `p` at `x` with Horner's rule
pub fn eval(gf: &GaloisField, p: &[u8], x: u8) -> u8 {
    p.iter().rev().fold(0, |acc, &c| gf.mul(acc, x) ^ c)
}

/// Evaluate a polynomial stored high-order first (codeword layout) at `x`
pub fn eval_descending(gf: &GaloisField, word: &[u8], x: u8) -> u8 {
    word.iter().fold(0, |acc, &c| gf.mul(acc, x) ^ c)
}

/// Formal derivative. In characteristic 2 the even-power terms vanish, so
/// `p'[i] = p[i + 1]` for even `i` and zero otherwise.
pub fn formal_derivative(p: &[u8]) -> Vec<u8> {
    if p.len() <= 1 {
        return vec![0];
    }
    p.iter()
        .enumerate()
        .skip(1)
        .map(|(power, &c)| if power % 2 == 1 { c } else { 0 })
        .collect()
}

/// Remainder of `dividend` divided by `divisor` by long division.
///
/// # Errors
///
/// Returns [`Error::Domain`] when `divisor` is the zero polynomial.
pub fn rem(gf: &GaloisField, dividend: &[u8], divisor: &[u8]) -> Result<Vec<u8>> {
    if is_zero(divisor) {
        return Err(Error::Domain("polynomial division by zero"));
    }

    let divisor_degree = degree(divisor);
    if divisor_degree == 0 {
        // Nonzero constants divide everything
        return Ok(vec![0]);
    }
    let lead_inv = gf.inverse(divisor[divisor_degree])?;

    let mut remainder = dividend.to_vec();
    trim(&mut remainder);
    while remainder.len() > divisor_degree && !is_zero(&remainder) {
        let top = remainder.len() - 1;
        let factor = gf.mul(remainder[top], lead_inv);
        let shift = top - divisor_degree;
        for (j, &d) in divisor[..=divisor_degree].iter().enumerate() {
            remainder[shift + j] ^= gf.mul(factor, d);
        }
        trim(&mut remainder);
    }

    remainder.resize(divisor_degree, 0);
    Ok(remainder)
}

/// Systematic parity by linear-feedback shift-register division.
///
/// Computes the remainder of `message(x) * x^r` modulo the monic `generator` of
/// degree `r`. The message is taken high-order first (codeword order) and the
/// remainder is returned the same way, ready to append after the message.
pub fn shift_register_remainder(gf: &GaloisField, message: &[u8], generator: &[u8]) -> Vec<u8> {
    let r = degree(generator);
    if r == 0 {
        return Vec::new();
    }

    let mut register = vec![0u8; r];
    for &symbol in message {
        let feedback = symbol ^ register[r - 1];
        for j in (1..r).rev() {
            register[j] = register[j - 1] ^ gf.mul(feedback, generator[j]);
        }
        register[0] = gf.mul(feedback, generator[0]);
    }

    register.reverse();
    register
}
