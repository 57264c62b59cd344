//! Dynamically-typed arithmetic over every kind of geometric value.
//!
//! The statically-typed operators on [`Vector3D`], [`Point3D`], and the shapes
//! only exist for meaningful combinations, so `point + point` does not
//! compile. [`Operand`] is for callers that only know operand kinds at
//! runtime; there, an undefined combination is reported as
//! [`GeometryError::UnsupportedOperation`].

use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::{Float, Line, Plane, Point3D, Triangle, Vector3D};

/// Binary operator accepted by [`Operand::combine()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition or translation.
    Add,
    /// Subtraction or translation by the negated vector.
    Sub,
    /// Scalar multiplication or dot product.
    Mul,
    /// Cross product.
    Cross,
}

impl BinaryOp {
    /// Returns the operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Cross => "@",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value of any kind that takes part in geometric arithmetic.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operand {
    Scalar(Float),
    Vector(Vector3D),
    Point(Point3D),
    Line(Line),
    Plane(Plane),
    Triangle(Triangle),
}

macro_rules! impl_from_for_operand {
    ($($variant:ident($type:ty)),* $(,)?) => {
        $(
            impl From<$type> for Operand {
                fn from(value: $type) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}
impl_from_for_operand!(
    Scalar(Float),
    Vector(Vector3D),
    Point(Point3D),
    Line(Line),
    Plane(Plane),
    Triangle(Triangle),
);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(x) => write!(f, "{x}"),
            Operand::Vector(v) => write!(f, "{v}"),
            Operand::Point(p) => write!(f, "{p}"),
            Operand::Line(l) => write!(f, "{l}"),
            Operand::Plane(pl) => write!(f, "{pl}"),
            Operand::Triangle(t) => write!(f, "{t}"),
        }
    }
}

impl Operand {
    /// Returns the name of the kind of value, such as `"Point3D"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Scalar",
            Operand::Vector(_) => "Vector3D",
            Operand::Point(_) => "Point3D",
            Operand::Line(_) => "Line",
            Operand::Plane(_) => "Plane",
            Operand::Triangle(_) => "Triangle",
        }
    }

    /// Applies a binary operator to two operands.
    ///
    /// | `lhs`    | `op`  | `rhs`                          | result                    |
    /// |----------|-------|--------------------------------|---------------------------|
    /// | Vector   | `+`   | Vector / Point / Scalar        | Vector / Point / Vector   |
    /// | Vector   | `+`   | Line / Plane / Triangle        | `rhs` translated by `lhs` |
    /// | Vector   | `-`   | Vector / Scalar                | Vector                    |
    /// | Vector   | `-`   | Line / Plane / Triangle        | `rhs` translated by `-lhs`|
    /// | Vector   | `*`   | Scalar / Vector                | Vector / Scalar (dot)     |
    /// | Vector   | `@`   | Vector                         | Vector (cross)            |
    /// | Point    | `+`   | Vector                         | Point                     |
    /// | Point    | `-`   | Point / Vector                 | Vector / Point            |
    /// | Line, Plane, Triangle | `+`, `-` | Vector           | translated shape          |
    ///
    /// Every other combination returns
    /// [`GeometryError::UnsupportedOperation`].
    pub fn combine(
        op: BinaryOp,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> GeometryResult<Operand> {
        use BinaryOp::*;
        use Operand::*;

        let (lhs, rhs) = (lhs.into(), rhs.into());
        Ok(match (op, lhs, rhs) {
            (Add, Vector(a), Vector(b)) => Vector(a + b),
            (Add, Vector(a), Point(b)) => Point(a + b),
            (Add, Vector(a), Scalar(b)) => Vector(a + b),
            (Add, Vector(a), Line(b)) => Line((a + b)?),
            (Add, Vector(a), Plane(b)) => Plane(a + b),
            (Add, Vector(a), Triangle(b)) => Triangle((a + b)?),

            (Sub, Vector(a), Vector(b)) => Vector(a - b),
            (Sub, Vector(a), Scalar(b)) => Vector(a - b),
            (Sub, Vector(a), Line(b)) => Line((a - b)?),
            (Sub, Vector(a), Plane(b)) => Plane(a - b),
            (Sub, Vector(a), Triangle(b)) => Triangle((a - b)?),

            (Mul, Vector(a), Scalar(b)) => Vector(a * b),
            (Mul, Vector(a), Vector(b)) => Scalar(a * b),

            (Cross, Vector(a), Vector(b)) => Vector(a.cross(&b)),

            (Add, Point(a), Vector(b)) => Point(a + b),
            (Sub, Point(a), Point(b)) => Vector(a - b),
            (Sub, Point(a), Vector(b)) => Point(a - b),

            (Add, Line(a), Vector(b)) => Line((a + b)?),
            (Sub, Line(a), Vector(b)) => Line((a - b)?),
            (Add, Plane(a), Vector(b)) => Plane(a + b),
            (Sub, Plane(a), Vector(b)) => Plane(a - b),
            (Add, Triangle(a), Vector(b)) => Triangle((a + b)?),
            (Sub, Triangle(a), Vector(b)) => Triangle((a - b)?),

            (op, lhs, rhs) => {
                log::debug!("rejecting {} {op} {}", lhs.kind_name(), rhs.kind_name());
                return Err(GeometryError::unsupported(
                    op.symbol(),
                    lhs.kind_name(),
                    rhs.kind_name(),
                ));
            }
        })
    }

    /// Negates a vector or reflects a point through the origin.
    pub fn negate(self) -> GeometryResult<Operand> {
        match self {
            Operand::Vector(v) => Ok(Operand::Vector(-v)),
            Operand::Point(p) => Ok(Operand::Point(-p)),
            other => {
                log::debug!("rejecting -{}", other.kind_name());
                Err(GeometryError::unsupported("-", other.kind_name(), "(unary)"))
            }
        }
    }
}
