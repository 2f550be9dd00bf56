//! Robust 2D orientation test with adaptive-precision fallback.
//!
//! See [`orient2d`] for the sign convention (y-axis pointing down).

pub mod error;
pub mod expansion;
pub mod math;
pub mod predicates;

pub use error::{RobustError, Result};
pub use predicates::{
    orient2d, orient2d_fast, orient2d_with_stage, orientation, Orientation, Stage,
};
