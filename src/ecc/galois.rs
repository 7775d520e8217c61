//! Finite field arithmetic in GF(2^m) for 2 <= m <= 8.
//!
//! Elements are stored in polynomial (bit-vector) form as `u8`. Multiplication,
//! division and exponentiation go through exponential/logarithm tables built once
//! from a primitive polynomial, so every operation is a constant number of table
//! lookups.
//!
//! The exponential table is doubled in length: the sum of two logarithms is at most
//! `2 * (2^m - 2)` and can index it directly without a modulo.
//!
//! # Examples
//!
//! ```
//! use gf_codes::ecc::galois::GaloisField;
//!
//! let gf = GaloisField::new(4).unwrap();
//! let a = 0b0110;
//! let inv = gf.inverse(a).unwrap();
//! assert_eq!(gf.mul(a, inv), 1);
//! ```

use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Smallest supported field order
pub const MIN_FIELD_ORDER: usize = 2;

/// Largest supported field order (elements must fit in a `u8`)
pub const MAX_FIELD_ORDER: usize = 8;

/// Logarithm sentinel for the zero element
const LOG_ZERO: i16 = -1;

/// Default primitive polynomial for each field order, indexed by `m`
const PRIMITIVE_POLYS: [u16; MAX_FIELD_ORDER + 1] = [
    0,
    0,
    0x7,   // x^2 + x + 1
    0xB,   // x^3 + x + 1
    0x13,  // x^4 + x + 1
    0x25,  // x^5 + x^2 + 1
    0x43,  // x^6 + x + 1
    0x89,  // x^7 + x^3 + 1
    0x11D, // x^8 + x^4 + x^3 + x^2 + 1
];

/// GF(2^m) with precomputed exponential and logarithm tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    /// Field order parameter m
    order: usize,
    /// Primitive polynomial defining the field, including the x^m term
    primitive_poly: u16,
    /// exp[i] = alpha^i for i in 0..2 * (2^m - 1)
    exp: Vec<u8>,
    /// log[a] = i such that alpha^i = a, LOG_ZERO for a = 0
    log: Vec<i16>,
}

impl GaloisField {
    /// Create GF(2^m) using the tabulated primitive polynomial for `m`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFieldOrder`] if `m` is outside `2..=8`.
    pub fn new(order: usize) -> Result<Self> {
        let poly = default_primitive_poly(order)?;
        Self::with_primitive(order, poly)
    }

    /// Create GF(2^m) from a caller-supplied primitive polynomial.
    ///
    /// # Arguments
    ///
    /// * `order` - Field order parameter m
    /// * `primitive_poly` - Polynomial of degree m in bit form (bit i = coefficient of x^i)
    ///
    /// # Errors
    ///
    /// Returns an error if `m` is unsupported, the polynomial does not have degree m,
    /// or alpha = x does not generate the full multiplicative group.
    pub fn with_primitive(order: usize, primitive_poly: u16) -> Result<Self> {
        if !(MIN_FIELD_ORDER..=MAX_FIELD_ORDER).contains(&order) {
            return Err(Error::UnsupportedFieldOrder(order));
        }

        let size = 1usize << order;
        if primitive_poly as usize >> order != 1 {
            return Err(Error::InvalidParameter(format!(
                "primitive polynomial {:#x} must have degree {}",
                primitive_poly, order
            )));
        }

        let group_order = size - 1;
        let mut exp = vec![0u8; 2 * group_order];
        let mut log = vec![LOG_ZERO; size];

        let mut x = 1usize;
        for i in 0..group_order {
            if log[x] != LOG_ZERO {
                // alpha^i came back around before visiting every element
                return Err(Error::InvalidParameter(format!(
                    "polynomial {:#x} is not primitive over GF(2^{})",
                    primitive_poly, order
                )));
            }
            exp[i] = x as u8;
            log[x] = i as i16;

            x <<= 1;
            if x & size != 0 {
                x ^= primitive_poly as usize;
            }
        }

        if x != 1 {
            return Err(Error::InvalidParameter(format!(
                "polynomial {:#x} is not primitive over GF(2^{})",
                primitive_poly, order
            )));
        }

        for i in group_order..exp.len() {
            exp[i] = exp[i - group_order];
        }

        Ok(GaloisField {
            order,
            primitive_poly,
            exp,
            log,
        })
    }

    /// Field order parameter m
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of elements, 2^m
    pub fn size(&self) -> usize {
        1 << self.order
    }

    /// Order of the multiplicative group, 2^m - 1
    pub fn multiplicative_order(&self) -> usize {
        self.size() - 1
    }

    /// Primitive polynomial the tables were built from
    pub fn primitive_polynomial(&self) -> u16 {
        self.primitive_poly
    }

    /// Whether `a` is an element of this field
    pub fn contains(&self, a: u8) -> bool {
        (a as usize) < self.size()
    }

    /// Addition (and subtraction) is XOR in characteristic 2
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let idx = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[idx]
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when `b` is zero.
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(Error::Domain("division by zero in GF(2^m)"));
        }
        if a == 0 {
            return Ok(0);
        }
        let idx = self.log[a as usize] as usize + self.multiplicative_order()
            - self.log[b as usize] as usize;
        Ok(self.exp[idx])
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for zero, which has no inverse.
    #[inline]
    pub fn inverse(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(Error::Domain("zero has no multiplicative inverse"));
        }
        Ok(self.exp[self.multiplicative_order() - self.log[a as usize] as usize])
    }

    /// Raise `a` to the power `k`. `0^0` is taken to be 1.
    pub fn pow(&self, a: u8, k: usize) -> u8 {
        if k == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let n = self.multiplicative_order();
        self.exp[(self.log[a as usize] as usize * (k % n)) % n]
    }

    /// alpha^i for any signed exponent; exponents are reduced modulo 2^m - 1
    #[inline]
    pub fn alpha_pow(&self, i: isize) -> u8 {
        let n = self.multiplicative_order() as isize;
        self.exp[i.rem_euclid(n) as usize]
    }

    /// Discrete logarithm base alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for zero.
    pub fn log(&self, a: u8) -> Result<usize> {
        match self.log.get(a as usize) {
            Some(&l) if l != LOG_ZERO => Ok(l as usize),
            Some(_) => Err(Error::Domain("zero has no logarithm")),
            None => Err(Error::InvalidParameter(format!(
                "{} is not an element of GF(2^{})",
                a, self.order
            ))),
        }
    }
}

impl Display for GaloisField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF(2^{}) mod {:#x}", self.order, self.primitive_poly)
    }
}

/// Return the tabulated primitive polynomial for the given field order
pub fn default_primitive_poly(order: usize) -> Result<u16> {
    if !(MIN_FIELD_ORDER..=MAX_FIELD_ORDER).contains(&order) {
        return Err(Error::UnsupportedFieldOrder(order));
    }
    Ok(PRIMITIVE_POLYS[order])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields() -> Vec<GaloisField> {
        (MIN_FIELD_ORDER..=MAX_FIELD_ORDER)
            .map(|m| GaloisField::new(m).unwrap())
            .collect()
    }

    #[test]
    fn test_field_creation() {
        let gf = GaloisField::new(4).unwrap();
        assert_eq!(gf.order(), 4);
        assert_eq!(gf.size(), 16);
        assert_eq!(gf.multiplicative_order(), 15);
        assert_eq!(gf.primitive_polynomial(), 0x13);

        assert_eq!(GaloisField::new(1), Err(Error::UnsupportedFieldOrder(1)));
        assert_eq!(GaloisField::new(9), Err(Error::UnsupportedFieldOrder(9)));
    }

    #[test]
    fn test_non_primitive_polynomial_rejected() {
        // x^4 + x^3 + x^2 + x + 1 is irreducible but alpha has order 5
        assert!(matches!(
            GaloisField::with_primitive(4, 0x1F),
            Err(Error::InvalidParameter(_))
        ));
        // Wrong degree
        assert!(GaloisField::with_primitive(4, 0x25).is_err());
        // x^4 + x^3 + 1 is primitive
        assert!(GaloisField::with_primitive(4, 0x19).is_ok());
    }

    #[test]
    fn test_tables_are_inverse() {
        for gf in all_fields() {
            for a in 1..gf.size() {
                let l = gf.log(a as u8).unwrap();
                assert_eq!(gf.alpha_pow(l as isize), a as u8);
            }
            assert!(gf.log(0).is_err());
        }
    }

    #[test]
    fn test_known_products_gf256() {
        let gf = GaloisField::new(8).unwrap();
        assert_eq!(gf.mul(2, 0x80), 0x1D);
        assert_eq!(gf.mul(0x53, 1), 0x53);
        assert_eq!(gf.mul(0x53, 0), 0);
        assert_eq!(gf.alpha_pow(8), 0x1D);
        assert_eq!(gf.alpha_pow(255), 1);
        assert_eq!(gf.alpha_pow(-1), gf.inverse(2).unwrap());
    }

    #[test]
    fn test_inverse_and_division() {
        for gf in all_fields() {
            for a in 1..gf.size() as u16 {
                let a = a as u8;
                let inv = gf.inverse(a).unwrap();
                assert_eq!(gf.mul(a, inv), 1);
                assert_eq!(gf.div(1, a).unwrap(), inv);
                assert_eq!(gf.div(a, a).unwrap(), 1);
            }
            assert_eq!(gf.inverse(0), Err(Error::Domain("zero has no multiplicative inverse")));
            assert!(gf.div(1, 0).is_err());
            assert_eq!(gf.div(0, 3).unwrap(), 0);
        }
    }

    #[test]
    fn test_multiplication_laws_gf16() {
        let gf = GaloisField::new(4).unwrap();
        for a in 0..16u8 {
            for b in 0..16u8 {
                assert_eq!(gf.mul(a, b), gf.mul(b, a));
                for c in 0..16u8 {
                    assert_eq!(gf.mul(gf.mul(a, b), c), gf.mul(a, gf.mul(b, c)));
                    assert_eq!(
                        gf.mul(a, gf.add(b, c)),
                        gf.add(gf.mul(a, b), gf.mul(a, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_power() {
        for gf in all_fields() {
            let n = gf.multiplicative_order();
            for a in 1..gf.size() as u16 {
                let a = a as u8;
                assert_eq!(gf.pow(a, n), 1);
                assert_eq!(gf.pow(a, 1), a);
                assert_eq!(gf.pow(a, 2), gf.mul(a, a));
                assert_eq!(gf.pow(a, n + 3), gf.pow(a, 3));
            }
            assert_eq!(gf.pow(0, 0), 1);
            assert_eq!(gf.pow(0, 5), 0);
        }
    }

    #[test]
    fn test_display() {
        let gf = GaloisField::new(8).unwrap();
        assert_eq!(gf.to_string(), "GF(2^8) mod 0x11d");
    }
}
