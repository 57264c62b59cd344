//! Points, vectors, lines, planes, triangles, and tetrahedra in 3D Euclidean
//! space.
//!
//! Every type is an immutable value. Geometric predicates compare against a
//! single absolute tolerance, [`EPSILON`].

pub use approx;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Absolute tolerance used by every geometric predicate.
///
/// Two quantities are considered equal if they differ by strictly less than
/// this. No relative tolerance is applied, so predicates lose meaning at very
/// large coordinate magnitudes.
pub const EPSILON: Float = 1e-8;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;

pub mod approx_cmp;
pub mod error;
pub mod line;
pub mod operand;
pub mod plane;
pub mod point;
pub mod tetrahedron;
pub mod triangle;
pub mod vector;

#[cfg(test)]
mod tests;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::error::{GeometryError, GeometryResult};
    pub use crate::line::Line;
    pub use crate::operand::{BinaryOp, Operand};
    pub use crate::plane::{Plane, PlaneElement};
    pub use crate::point::Point3D;
    pub use crate::tetrahedron::Tetrahedron;
    pub use crate::traits::*;
    pub use crate::triangle::Triangle;
    pub use crate::vector::Vector3D;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;
}
