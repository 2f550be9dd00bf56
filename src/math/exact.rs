//! Error-free transformations on `f64`.
//!
//! Each function returns a rounded result together with the exact rounding
//! error, so that `x + y` equals the mathematical result with no loss.
//! Correctness relies on round-to-nearest and on every operation being
//! rounded individually: never rewrite these with `mul_add`.

use super::SPLITTER;

/// Exact sum: returns `(x, y)` with `x = fl(a + b)` and `x + y = a + b`.
#[must_use]
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    (x, two_sum_tail(a, b, x))
}

/// Rounding error of `x = fl(a + b)`.
#[must_use]
#[inline]
pub fn two_sum_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    around + bround
}

/// Exact difference: returns `(x, y)` with `x = fl(a - b)` and `x + y = a - b`.
#[must_use]
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    (x, two_diff_tail(a, b, x))
}

/// Rounding error of `x = fl(a - b)`.
#[must_use]
#[inline]
pub fn two_diff_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = a - x;
    let avirt = x + bvirt;
    let bround = bvirt - b;
    let around = a - avirt;
    around + bround
}

/// Splits `a` into `(hi, lo)` with `hi + lo = a`, each half fitting in 26 bits.
#[must_use]
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    let c = SPLITTER * a;
    let abig = c - a;
    let hi = c - abig;
    (hi, a - hi)
}

/// Exact product: returns `(x, y)` with `x = fl(a * b)` and `x + y = a * b`.
#[must_use]
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, two_product_tail(a, b, x))
}

/// Rounding error of `x = fl(a * b)`, via Dekker splitting.
#[must_use]
#[inline]
pub fn two_product_tail(a: f64, b: f64, x: f64) -> f64 {
    let (ahi, alo) = split(a);
    let (bhi, blo) = split(b);
    let err1 = x - ahi * bhi;
    let err2 = err1 - alo * bhi;
    let err3 = err2 - ahi * blo;
    alo * blo - err3
}

/// `(a1 + a0) - b` as a 3-term expansion `(x2, x1, x0)`, most significant first.
#[must_use]
#[inline]
pub fn two_one_diff(a1: f64, a0: f64, b: f64) -> (f64, f64, f64) {
    let (i, x0) = two_diff(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

/// `(a1 + a0) - (b1 + b0)` as a 4-term expansion, least significant first.
///
/// Both operands are two-term expansions such as the output of
/// [`two_product`], listed high part first.
#[must_use]
#[inline]
pub fn two_two_diff(a1: f64, a0: f64, b1: f64, b0: f64) -> [f64; 4] {
    let (j, zero, x0) = two_one_diff(a1, a0, b0);
    let (x3, x2, x1) = two_one_diff(j, zero, b1);
    [x0, x1, x2, x3]
}

/// Exact `a * b - c * d` as a 4-term expansion, least significant first.
#[must_use]
#[inline]
pub fn cross_product(a: f64, b: f64, c: f64, d: f64) -> [f64; 4] {
    let (s1, s0) = two_product(a, b);
    let (t1, t0) = two_product(c, d);
    two_two_diff(s1, s0, t1, t0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    #[test]
    fn two_sum_recovers_lost_bits() {
        let (x, y) = two_sum(1.0, EPSILON / 2.0);
        assert_eq!(x, 1.0);
        assert_eq!(y, EPSILON / 2.0);
    }

    #[test]
    fn two_sum_exact_case_has_zero_tail() {
        assert_eq!(two_sum(0.5, 0.25), (0.75, 0.0));
        assert_eq!(two_sum(-3.0, 3.0), (0.0, 0.0));
    }

    #[test]
    fn two_diff_recovers_lost_bits() {
        let (x, y) = two_diff(EPSILON / 4.0, 1.0);
        assert_eq!(x, -1.0);
        assert_eq!(y, EPSILON / 4.0);
    }

    #[test]
    fn split_halves_are_short() {
        let a = 1.0 + 3.0 * EPSILON * 2.0;
        let (hi, lo) = split(a);
        assert_eq!(hi + lo, a);
        // Neither half carries more than 26 significant bits, so squaring is exact.
        assert_eq!(two_product_tail(hi, hi, hi * hi), 0.0);
        assert_eq!(two_product_tail(lo, lo, lo * lo), 0.0);
    }

    #[test]
    fn two_product_recovers_lost_bits() {
        // (1 + 2⁻³⁰)² = 1 + 2⁻²⁹ + 2⁻⁶⁰, the last term does not fit.
        let a = 1.0 + 2f64.powi(-30);
        let (x, y) = two_product(a, a);
        assert_eq!(x, 1.0 + 2f64.powi(-29));
        assert_eq!(y, 2f64.powi(-60));
    }

    #[test]
    fn two_two_diff_is_exact() {
        let a = 1.0 + 2f64.powi(-30);
        let b = 1.0 - 2f64.powi(-30);
        // a² - b² = 4·2⁻³⁰ exactly, although both squares round.
        let terms = cross_product(a, a, b, b);
        assert_eq!(terms.iter().sum::<f64>(), 2f64.powi(-28));
        assert_eq!(terms[3], 2f64.powi(-28));
    }

    #[test]
    fn two_one_diff_orders_terms() {
        let (x2, x1, x0) = two_one_diff(1.0, EPSILON / 2.0, -EPSILON / 8.0);
        assert_eq!(x2, 1.0);
        assert!(x1.abs() >= x0.abs());
        assert_eq!(x1 + x0, EPSILON / 2.0 + EPSILON / 8.0);
    }
}
