pub mod exact;

/// Unit roundoff for `f64`: the largest power of two with `1.0 + EPSILON == 1.0`
/// under round-to-nearest, i.e. 2⁻⁵³.
///
/// Half of [`f64::EPSILON`], which is the gap between 1.0 and the next double.
pub const EPSILON: f64 = f64::EPSILON / 2.0;

/// Dekker splitter, 2^⌈53/2⌉ + 1. Multiplying by it separates a double into
/// two halves of at most 26 significant bits each.
pub const SPLITTER: f64 = 134_217_729.0;

/// Bound on the error of the plain determinant, relative to `detsum`.
pub const CCW_ERR_BOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;

/// Bound on the error of the 4-term estimate, relative to `detsum`.
pub const CCW_ERR_BOUND_B: f64 = (2.0 + 12.0 * EPSILON) * EPSILON;

/// Bound on the error of the tail-corrected estimate, relative to `detsum`.
pub const CCW_ERR_BOUND_C: f64 = (9.0 + 64.0 * EPSILON) * EPSILON * EPSILON;

/// Scales `|det|` when bounding the tail-corrected estimate.
pub const RESULT_ERR_BOUND: f64 = (3.0 + 8.0 * EPSILON) * EPSILON;
