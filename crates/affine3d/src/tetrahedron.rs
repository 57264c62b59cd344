//! Tetrahedra.

use std::fmt;

use crate::error::{GeometryResult, ensure_pairwise_distinct};
use crate::{Float, Point3D};

/// Solid tetrahedron with four pairwise distinct vertices.
///
/// Coplanar vertices are accepted; the tetrahedron then has zero volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tetrahedron {
    a: Point3D,
    b: Point3D,
    c: Point3D,
    d: Point3D,
}

impl fmt::Display for Tetrahedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, c, d } = self;
        write!(f, "Tetrahedron(a={a}, b={b}, c={c}, d={d})")
    }
}

impl Tetrahedron {
    /// Constructs a tetrahedron. Returns an error if any two vertices are
    /// equal.
    pub fn new(a: Point3D, b: Point3D, c: Point3D, d: Point3D) -> GeometryResult<Self> {
        ensure_pairwise_distinct(
            &[&a, &b, &c, &d],
            "tetrahedron vertices must be pairwise distinct",
        )?;
        Ok(Self { a, b, c, d })
    }

    /// Returns the vertices in order.
    pub fn vertices(&self) -> [Point3D; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the volume of the tetrahedron.
    pub fn volume(&self) -> Float {
        Self::volume_of(&self.a, &self.b, &self.c, &self.d)
    }

    /// Returns the signed volume of the tetrahedron spanned by four arbitrary
    /// points, which need not be distinct.
    ///
    /// This is the determinant of the edge vectors from `d` to `a`, `b`, and
    /// `c`, divided by 6.
    pub fn signed_volume_of(a: &Point3D, b: &Point3D, c: &Point3D, d: &Point3D) -> Float {
        let (a, b, c) = (a - d, b - d, c - d);
        a.dot(&b.cross(&c)) / 6.0
    }
    /// Returns the (unsigned) volume of the tetrahedron spanned by four
    /// arbitrary points, which need not be distinct.
    pub fn volume_of(a: &Point3D, b: &Point3D, c: &Point3D, d: &Point3D) -> Float {
        Self::signed_volume_of(a, b, c, d).abs()
    }
}
