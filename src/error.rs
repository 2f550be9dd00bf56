use thiserror::Error;

/// Top-level error type for the robust predicates.
///
/// The numeric predicates themselves never fail; only the checked
/// constructors and classifiers return this.
#[derive(Debug, Error)]
pub enum RobustError {
    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    #[error(transparent)]
    Orientation(#[from] OrientationError),
}

/// Errors related to building expansions from caller-supplied terms.
#[derive(Debug, Error, PartialEq)]
pub enum ExpansionError {
    #[error("{len} terms exceed the expansion capacity of {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    #[error("an expansion needs at least one term")]
    Empty,
}

/// Errors related to classifying an orientation determinant.
#[derive(Debug, Error, PartialEq)]
pub enum OrientationError {
    #[error("orientation is undefined for determinant {0}")]
    Undefined(f64),
}

/// Convenience type alias for results using [`RobustError`].
pub type Result<T> = std::result::Result<T, RobustError>;
