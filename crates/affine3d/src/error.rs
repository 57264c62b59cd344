//! Errors produced by geometric operations.

use thiserror::Error;

/// Error that can occur while constructing or combining geometric values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An operator was applied to a pair of operands for which it has no
    /// meaning, such as adding two points.
    #[error("unsupported operation: {lhs} {op} {rhs}")]
    UnsupportedOperation {
        /// Operator or method name.
        op: &'static str,
        /// Kind of the left-hand operand.
        lhs: &'static str,
        /// Kind of the right-hand operand.
        rhs: &'static str,
    },
    /// A constructor was given points that are required to be distinct but
    /// are not.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl GeometryError {
    pub(crate) fn unsupported(op: &'static str, lhs: &'static str, rhs: &'static str) -> Self {
        Self::UnsupportedOperation { op, lhs, rhs }
    }
}

/// Result type returned by fallible geometric operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Returns a [`GeometryError::InvariantViolation`] if any two of `points`
/// are exactly equal.
pub(crate) fn ensure_pairwise_distinct<T: PartialEq>(
    points: &[&T],
    rule: &'static str,
) -> GeometryResult<()> {
    for (i, a) in points.iter().enumerate() {
        if points[i + 1..].iter().any(|b| a == b) {
            log::trace!("rejecting construction: {rule}");
            return Err(GeometryError::InvariantViolation(rule));
        }
    }
    Ok(())
}
