//! Floating-point expansions.
//!
//! An expansion is a sequence of nonoverlapping doubles whose exact sum is the
//! represented value. Terms are kept in order of increasing magnitude, so the
//! last term is the most significant one and carries the sign of the whole.

use crate::error::{ExpansionError, Result};
use crate::math::exact::two_sum;

/// Merges two expansions into `h`, eliminating zero terms. Returns the number
/// of terms written.
///
/// `e` and `f` must each be nonoverlapping and sorted by increasing magnitude;
/// otherwise the result is not exact. This is not checked. `h` must hold at
/// least `e.len() + f.len()` terms, and at least one. The output is never
/// empty: a zero sum is written as a single `0.0`.
///
/// # Panics
///
/// Panics if `h` is shorter than the number of terms produced.
pub fn sum(e: &[f64], f: &[f64], h: &mut [f64]) -> usize {
    let mut terms = MagnitudeMerge { e, f };
    let mut q = terms.next().unwrap_or(0.0);
    let mut len = 0;
    for term in terms {
        let (qnew, hh) = two_sum(q, term);
        q = qnew;
        if hh != 0.0 {
            h[len] = hh;
            len += 1;
        }
    }
    if q != 0.0 || len == 0 {
        h[len] = q;
        len += 1;
    }
    len
}

/// Approximate value of an expansion: the plain left-to-right sum of its terms.
#[must_use]
pub fn estimate(e: &[f64]) -> f64 {
    e.iter().copied().reduce(|acc, term| acc + term).unwrap_or(0.0)
}

/// Yields the terms of two expansions ordered by magnitude.
///
/// The head of `e` is taken unless the head of `f` is strictly smaller in
/// magnitude, which is what `(fnow > enow) == (fnow > -enow)` decides.
struct MagnitudeMerge<'a> {
    e: &'a [f64],
    f: &'a [f64],
}

impl Iterator for MagnitudeMerge<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match (self.e.split_first(), self.f.split_first()) {
            (Some((&enow, e_rest)), Some((&fnow, f_rest))) => {
                if (fnow > enow) == (fnow > -enow) {
                    self.e = e_rest;
                    Some(enow)
                } else {
                    self.f = f_rest;
                    Some(fnow)
                }
            }
            (Some((&enow, rest)), None) => {
                self.e = rest;
                Some(enow)
            }
            (None, Some((&fnow, rest))) => {
                self.f = rest;
                Some(fnow)
            }
            (None, None) => None,
        }
    }
}

/// A fixed-capacity expansion stored inline.
///
/// The capacity `N` is the proven maximum length of the stage that produces
/// the expansion, so no growth is ever needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion<const N: usize> {
    terms: [f64; N],
    len: usize,
}

impl<const N: usize> Expansion<N> {
    /// Maximum number of terms.
    pub const CAPACITY: usize = N;

    /// Creates an empty expansion.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            terms: [0.0; N],
            len: 0,
        }
    }

    /// Creates an expansion from terms sorted by increasing magnitude.
    ///
    /// The terms are taken as given; they must already be nonoverlapping.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::Empty`] for an empty slice and
    /// [`ExpansionError::CapacityExceeded`] if there are more than `N` terms.
    pub fn from_terms(terms: &[f64]) -> Result<Self> {
        if terms.is_empty() {
            return Err(ExpansionError::Empty.into());
        }
        if terms.len() > N {
            return Err(ExpansionError::CapacityExceeded {
                len: terms.len(),
                capacity: N,
            }
            .into());
        }
        let mut expansion = Self::new();
        expansion.terms[..terms.len()].copy_from_slice(terms);
        expansion.len = terms.len();
        Ok(expansion)
    }

    /// Wraps a full array of terms produced by exact arithmetic.
    #[must_use]
    pub(crate) const fn from_array(terms: [f64; N]) -> Self {
        Self { terms, len: N }
    }

    /// Number of valid terms.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the expansion holds no terms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The valid terms, least significant first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.terms[..self.len]
    }

    /// Approximate value; see [`estimate`].
    #[must_use]
    pub fn estimate(&self) -> f64 {
        estimate(self.as_slice())
    }

    /// The last term, whose sign is the sign of the exact value. Zero when empty.
    #[must_use]
    pub fn most_significant(&self) -> f64 {
        self.as_slice().last().copied().unwrap_or(0.0)
    }

    /// Exact sum with another expansion, zero terms eliminated.
    ///
    /// The output capacity `R` must cover both inputs; this is checked at
    /// compile time.
    #[must_use]
    pub fn sum<const M: usize, const R: usize>(&self, other: &Expansion<M>) -> Expansion<R> {
        const { assert!(R >= N + M && R > 0, "output capacity too small") };
        let mut out = Expansion::<R>::new();
        out.len = sum(self.as_slice(), other.as_slice(), &mut out.terms);
        out
    }
}

impl<const N: usize> Default for Expansion<N> {
    fn default() -> Self {
        Self::new()
    }
}
