//! Orientation predicates.
//!
//! All predicates here treat the y-axis as pointing **down** (screen
//! coordinates). Their sign is therefore the mirror image of the textbook
//! y-up orientation test: a positive value means `c` lies to the left of the
//! directed line `a → b` as seen on screen, i.e. the triangle `a, b, c` is
//! counterclockwise when drawn with y growing downwards. Callers working in
//! y-up coordinates negate the result or swap `a` and `b`.

mod adapt;

use tracing::trace;

use crate::error::{OrientationError, Result};
use crate::math::CCW_ERR_BOUND_A;

/// Orientation of a point triple, in the y-down convention of [`orient2d`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// [`orient2d`] is positive.
    CounterClockwise,
    /// [`orient2d`] is negative.
    Clockwise,
    /// The three points lie on one line.
    Collinear,
}

impl Orientation {
    /// Classifies the sign of an orientation determinant.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::Undefined`] if `det` is NaN.
    pub fn from_determinant(det: f64) -> Result<Self> {
        if det > 0.0 {
            Ok(Self::CounterClockwise)
        } else if det < 0.0 {
            Ok(Self::Clockwise)
        } else if det == 0.0 {
            Ok(Self::Collinear)
        } else {
            Err(OrientationError::Undefined(det).into())
        }
    }

    /// The orientation of the same triple with `a` and `b` swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
        }
    }

    #[must_use]
    pub fn is_collinear(self) -> bool {
        self == Self::Collinear
    }
}

/// The evaluation tier that settled an [`orient2d`] call.
///
/// Tiers are listed from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// The two products cannot cancel; the plain difference is exact in sign.
    Exact,
    /// The plain determinant passed the first error filter.
    Filtered,
    /// The 4-term exact product expansion passed the second filter.
    Estimate,
    /// The coordinate differences were exact, so the 4-term value is final.
    ExactDifferences,
    /// The first-order tail correction passed the third filter.
    TailCorrected,
    /// The full 16-term expansion was needed.
    Full,
}

impl Stage {
    /// Returns `true` if the call went past the cheap filters.
    #[must_use]
    pub fn is_adaptive(self) -> bool {
        self > Self::Filtered
    }
}

/// Non-robust orientation of `c` relative to the directed line `a → b`.
///
/// Evaluates `(ay − cy)(bx − cx) − (ax − cx)(by − cy)` in plain `f64`. Fast,
/// but near-collinear inputs can get the wrong sign or a spurious zero. Use
/// [`orient2d`] when the sign matters.
#[must_use]
#[inline]
pub fn orient2d_fast(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    (ay - cy) * (bx - cx) - (ax - cx) * (by - cy)
}

/// Robust orientation of `c` relative to the directed line `a → b`.
///
/// Returns a positive value if `a, b, c` occur in counterclockwise order
/// (`c` lies to the left of `a → b`), a negative value if they occur in
/// clockwise order, and zero if they are collinear. The sign is always exact.
/// The magnitude approximates twice the signed area of the triangle.
///
/// **The y-axis is taken to point downwards.** Compared with Shewchuk's
/// original `orient2d` (y up), the sign is inverted. This is kept on purpose
/// so the predicate stays interchangeable with other y-down implementations.
///
/// Non-finite inputs propagate through the arithmetic; the result is then
/// unspecified and may be NaN.
#[must_use]
#[inline]
pub fn orient2d(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    orient2d_with_stage(ax, ay, bx, by, cx, cy).0
}

/// [`orient2d`] together with the [`Stage`] that settled it.
#[must_use]
pub fn orient2d_with_stage(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> (f64, Stage) {
    let detleft = (ay - cy) * (bx - cx);
    let detright = (ax - cx) * (by - cy);
    let det = detleft - detright;

    if detleft == 0.0 || detright == 0.0 || (detleft > 0.0) != (detright > 0.0) {
        return (det, Stage::Exact);
    }

    let detsum = (detleft + detright).abs();
    if det.abs() >= CCW_ERR_BOUND_A * detsum {
        return (det, Stage::Filtered);
    }

    let (det, stage) = adapt::orient2d_adapt(ax, ay, bx, by, cx, cy, detsum);
    trace!(?stage, det = -det, detsum, "orient2d settled adaptively");
    (-det, stage)
}

/// Classifies `c` relative to the directed line `a → b` using [`orient2d`].
///
/// # Errors
///
/// Returns [`OrientationError::Undefined`] if a non-finite input makes the
/// determinant NaN.
pub fn orientation(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Result<Orientation> {
    Orientation::from_determinant(orient2d(ax, ay, bx, by, cx, cy))
}
