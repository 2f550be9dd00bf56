use super::Stage;
use crate::expansion::Expansion;
use crate::math::exact::{cross_product, two_diff_tail};
use crate::math::{CCW_ERR_BOUND_B, CCW_ERR_BOUND_C, RESULT_ERR_BOUND};

/// Adaptive-precision evaluation of `acx·bcy − acy·bcx`.
///
/// Note the sign: this is the y-up determinant, the negation of what
/// [`orient2d`](super::orient2d) returns. `detsum` is `|detleft + detright|`
/// from the caller's filter.
#[allow(clippy::similar_names)]
pub(super) fn orient2d_adapt(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
    detsum: f64,
) -> (f64, Stage) {
    let acx = ax - cx;
    let bcx = bx - cx;
    let acy = ay - cy;
    let bcy = by - cy;

    let b = Expansion::from_array(cross_product(acx, bcy, acy, bcx));
    let mut det = b.estimate();
    let errbound = CCW_ERR_BOUND_B * detsum;
    if det >= errbound || -det >= errbound {
        return (det, Stage::Estimate);
    }

    let acxtail = two_diff_tail(ax, cx, acx);
    let bcxtail = two_diff_tail(bx, cx, bcx);
    let acytail = two_diff_tail(ay, cy, acy);
    let bcytail = two_diff_tail(by, cy, bcy);

    if acxtail == 0.0 && acytail == 0.0 && bcxtail == 0.0 && bcytail == 0.0 {
        return (det, Stage::ExactDifferences);
    }

    let errbound = CCW_ERR_BOUND_C * detsum + RESULT_ERR_BOUND * det.abs();
    det += (acx * bcytail + bcy * acxtail) - (acy * bcxtail + bcx * acytail);
    if det >= errbound || -det >= errbound {
        return (det, Stage::TailCorrected);
    }

    let u = Expansion::from_array(cross_product(acxtail, bcy, acytail, bcx));
    let c1: Expansion<8> = b.sum(&u);

    let u = Expansion::from_array(cross_product(acx, bcytail, acy, bcxtail));
    let c2: Expansion<12> = c1.sum(&u);

    let u = Expansion::from_array(cross_product(acxtail, bcytail, acytail, bcxtail));
    let d: Expansion<16> = c2.sum(&u);

    (d.most_significant(), Stage::Full)
}
