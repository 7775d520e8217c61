//! Generator polynomial construction for cyclic codes.
//!
//! Reed-Solomon generators are the product of `(x - alpha^i)` over consecutive
//! powers. Binary BCH generators are the least common multiple of the minimal
//! polynomials of `alpha, alpha^3, ..., alpha^(2t-1)`: even powers share a minimal
//! polynomial with an odd power (conjugacy), and odd powers inside an already used
//! cyclotomic coset are skipped so no factor is multiplied in twice.

use crate::ecc::galois::GaloisField;
use crate::ecc::polynomial;

/// Cyclotomic coset of `exponent` modulo `modulus`: `{e, 2e, 4e, ...}`
pub fn cyclotomic_coset(exponent: usize, modulus: usize) -> Vec<usize> {
    let mut coset = Vec::new();
    let mut x = exponent % modulus;

    // Keep multiplying by 2 (mod n) until we cycle back to the start
    while !coset.contains(&x) {
        coset.push(x);
        x = (2 * x) % modulus;
    }

    coset
}

/// Minimal polynomial of `alpha^exponent` over GF(2).
///
/// Built as the product of `(x + alpha^j)` over the cyclotomic coset of the
/// exponent; the coset has at most m members, so this takes at most m steps.
/// Every coefficient of the result is 0 or 1.
pub fn minimal_polynomial(gf: &GaloisField, exponent: usize) -> Vec<u8> {
    let coset = cyclotomic_coset(exponent, gf.multiplicative_order());
    let mut poly = vec![1u8];

    for j in coset {
        poly = polynomial::mul(gf, &poly, &[gf.alpha_pow(j as isize), 1]);
    }

    debug_assert!(poly.iter().all(|&c| c <= 1));
    poly
}

/// Reed-Solomon generator `prod_{i=0}^{parity-1} (x - alpha^(first_root + i))`
pub fn reed_solomon_generator(gf: &GaloisField, first_root: usize, parity: usize) -> Vec<u8> {
    let mut g = vec![1u8];

    for i in 0..parity {
        let root = gf.alpha_pow((first_root + i) as isize);
        g = polynomial::mul(gf, &g, &[root, 1]);
    }

    g
}

/// Binary BCH generator correcting `t` errors.
///
/// Roots include `alpha^1 ..= alpha^(2t)`.
pub fn bch_generator(gf: &GaloisField, t: usize) -> Vec<u8> {
    let n = gf.multiplicative_order();
    let mut used = vec![false; n];
    let mut g = vec![1u8];

    for i in (1..2 * t).step_by(2) {
        let exponent = i % n;
        if used[exponent] {
            continue;
        }

        for j in cyclotomic_coset(exponent, n) {
            used[j] = true;
        }
        g = polynomial::mul(gf, &g, &minimal_polynomial(gf, exponent));
    }

    g
}
