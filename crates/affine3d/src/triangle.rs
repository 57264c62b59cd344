//! Triangles and projected area computations.

use std::fmt;
use std::ops::{Add, Sub};

use crate::approx_cmp::approx_eq;
use crate::error::{GeometryResult, ensure_pairwise_distinct};
use crate::{Float, Point3D, Vector3D};

/// Returns twice the signed area of the triangle `abc` projected onto the XY
/// plane. Positive when `abc` winds counterclockwise.
pub(crate) fn doubled_signed_area_xy(a: &Point3D, b: &Point3D, c: &Point3D) -> Float {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Returns the asymmetric area metric of `abc`, computed from X and Y only.
///
/// This is `x1*y2 - x1*y3 + x2*y3 - x2*y1 + x3*y1 - x2*y2`. The last term
/// differs from the shoelace formula (which has `x3*y2`), so this is _not_ a
/// geometric area except when `x2 == x3` or `y2 == 0`.
pub(crate) fn area_metric_xy(a: &Point3D, b: &Point3D, c: &Point3D) -> Float {
    let (x1, y1) = (a.x, a.y);
    let (x2, y2) = (b.x, b.y);
    let (x3, y3) = (c.x, c.y);
    x1 * y2 - x1 * y3 + x2 * y3 - x2 * y1 + x3 * y1 - x2 * y2
}

/// Triangle with three pairwise distinct vertices.
///
/// Collinear vertices are accepted; the triangle is then degenerate and has
/// zero area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    a: Point3D,
    b: Point3D,
    c: Point3D,
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, c } = self;
        write!(f, "Triangle(a={a}, b={b}, c={c})")
    }
}

impl Triangle {
    /// Constructs a triangle. Returns an error if any two vertices are equal.
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> GeometryResult<Self> {
        ensure_pairwise_distinct(&[&a, &b, &c], "triangle vertices must be pairwise distinct")?;
        Ok(Self { a, b, c })
    }

    /// Returns the first vertex.
    pub fn a(&self) -> Point3D {
        self.a
    }
    /// Returns the second vertex.
    pub fn b(&self) -> Point3D {
        self.b
    }
    /// Returns the third vertex.
    pub fn c(&self) -> Point3D {
        self.c
    }
    /// Returns the vertices in order.
    pub fn vertices(&self) -> [Point3D; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the asymmetric area metric of the triangle, computed from X and
    /// Y only.
    ///
    /// This is `x1*y2 - x1*y3 + x2*y3 - x2*y1 + x3*y1 - x2*y2`, which is _not_
    /// a geometric area except when `x2 == x3` or `y2 == 0`. Use
    /// [`Triangle::signed_area()`] for the real thing.
    pub fn area(&self) -> Float {
        area_metric_xy(&self.a, &self.b, &self.c)
    }

    /// Returns the signed area of the triangle projected onto the XY plane.
    pub fn signed_area(&self) -> Float {
        doubled_signed_area_xy(&self.a, &self.b, &self.c) / 2.0
    }

    /// Returns whether `point` lies inside or on the boundary of the triangle,
    /// looking only at the XY projection.
    ///
    /// The point is inside iff the three triangles it forms with each edge
    /// exactly cover the original triangle.
    pub fn contains(&self, point: &Point3D) -> bool {
        let Self { a, b, c } = self;
        let parts = [
            doubled_signed_area_xy(a, b, point),
            doubled_signed_area_xy(a, point, c),
            doubled_signed_area_xy(point, b, c),
        ];
        let covered: Float = parts.iter().map(|s| s.abs()).sum();
        approx_eq(covered, doubled_signed_area_xy(a, b, c).abs())
    }

    /// Returns the triangle translated by `offset`.
    ///
    /// This fails only if rounding merges two vertices.
    pub fn translated(&self, offset: &Vector3D) -> GeometryResult<Triangle> {
        Triangle::new(self.a + offset, self.b + offset, self.c + offset)
    }
}

impl Add<&Vector3D> for &Triangle {
    type Output = GeometryResult<Triangle>;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        self.translated(rhs)
    }
}
impl Sub<&Vector3D> for &Triangle {
    type Output = GeometryResult<Triangle>;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        self.translated(&-rhs)
    }
}
impl Add<&Triangle> for &Vector3D {
    type Output = GeometryResult<Triangle>;

    fn add(self, rhs: &Triangle) -> Self::Output {
        rhs + self
    }
}
impl Sub<&Triangle> for &Vector3D {
    type Output = GeometryResult<Triangle>;

    fn sub(self, rhs: &Triangle) -> Self::Output {
        rhs - self
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add<Vector3D> for Triangle { fn add() -> GeometryResult<Triangle> }
    impl Sub<Vector3D> for Triangle { fn sub() -> GeometryResult<Triangle> }
    impl Add<Triangle> for Vector3D { fn add() -> GeometryResult<Triangle> }
    impl Sub<Triangle> for Vector3D { fn sub() -> GeometryResult<Triangle> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GeometryError;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3D::ORIGIN,
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        )
        .expect("distinct vertices")
    }

    #[test]
    fn test_triangle_requires_distinct_vertices() {
        let p = Point3D::new(1.0, 1.0, 1.0);
        let q = Point3D::new(2.0, 1.0, 1.0);
        for (a, b, c) in [(p, p, q), (p, q, q), (q, p, q)] {
            assert!(matches!(
                Triangle::new(a, b, c),
                Err(GeometryError::InvariantViolation(_)),
            ));
        }
        // Collinear is fine.
        assert!(Triangle::new(p, q, Point3D::new(3.0, 1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_area_metric() {
        assert_eq!(unit_triangle().area(), 1.0);

        let t = Triangle::new(
            Point3D::new(1.0, 2.0, 0.0),
            Point3D::new(3.0, 5.0, 0.0),
            Point3D::new(4.0, 1.0, 0.0),
        )
        .expect("distinct vertices");
        assert_eq!(t.area(), -6.0);
        assert_eq!(t.signed_area(), -5.5);
    }

    #[test]
    fn test_signed_area() {
        let t = unit_triangle();
        assert_eq!(t.signed_area(), 0.5);
        let flipped = Triangle::new(t.a(), t.c(), t.b()).expect("distinct vertices");
        assert_eq!(flipped.signed_area(), -0.5);
    }

    #[test]
    fn test_area_ignores_z() {
        let t = unit_triangle();
        let lifted = Triangle::new(
            Point3D::new(0.0, 0.0, 3.0),
            Point3D::new(1.0, 0.0, -2.0),
            Point3D::new(0.0, 1.0, 9.0),
        )
        .expect("distinct vertices");
        assert_eq!(t.area(), lifted.area());
    }

    #[test]
    fn test_triangle_contains() {
        let t = unit_triangle();
        assert!(t.contains(&Point3D::new(0.25, 0.25, 0.0)));
        assert!(t.contains(&Point3D::new(0.5, 0.5, 0.0)));
        assert!(t.contains(&t.a()));
        assert!(!t.contains(&Point3D::new(10.0, 10.0, 0.0)));
        assert!(!t.contains(&Point3D::new(-0.1, 0.5, 0.0)));
        assert!(!t.contains(&Point3D::new(0.6, 0.6, 0.0)));
    }

    #[test]
    fn test_triangle_translation() {
        let offset = Vector3D::new(1.0, 1.0, 1.0);
        let moved = (unit_triangle() + offset).expect("translation");
        assert_eq!(
            moved.vertices(),
            [
                Point3D::new(1.0, 1.0, 1.0),
                Point3D::new(2.0, 1.0, 1.0),
                Point3D::new(1.0, 2.0, 1.0),
            ],
        );
        assert_eq!(moved - offset, Ok(unit_triangle()));
        assert_eq!(offset + unit_triangle(), Ok(moved));
        assert_eq!(offset - moved, Ok(unit_triangle()));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            unit_triangle().to_string(),
            "Triangle(a=Point3D(0, 0, 0), b=Point3D(1, 0, 0), c=Point3D(0, 1, 0))",
        );
    }
}
