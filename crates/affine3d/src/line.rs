//! Infinite lines through two points.

use std::fmt;
use std::ops::{Add, Sub};

use crate::approx_cmp::is_negligible;
use crate::error::{GeometryResult, ensure_pairwise_distinct};
use crate::triangle::area_metric_xy;
use crate::{Float, Point3D, Tetrahedron, Vector3D};

/// Infinite line through two distinct points `p` and `v`.
///
/// `v` is a second point on the line, not a direction vector; see
/// [`Line::direction()`] for that.
///
/// `==` compares the defining points exactly. Use [`Line::is_same_as()`] for
/// the containment-based comparison.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    p: Point3D,
    v: Point3D,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.p, self.v)
    }
}

impl Line {
    /// Constructs the line through two points. Returns an error if the points
    /// are equal.
    pub fn new(p: Point3D, v: Point3D) -> GeometryResult<Self> {
        ensure_pairwise_distinct(&[&p, &v], "line points must be distinct")?;
        Ok(Self { p, v })
    }

    /// Returns the first defining point.
    pub fn p(&self) -> Point3D {
        self.p
    }
    /// Returns the second defining point.
    pub fn v(&self) -> Point3D {
        self.v
    }
    /// Returns the vector from `p` to `v`.
    pub fn direction(&self) -> Vector3D {
        self.v - self.p
    }

    /// Returns `p + t * v`, treating the coordinates of `v` as an offset.
    ///
    /// This only traces the line itself when `v` is collinear with the origin
    /// and `p`. Use [`Line::direction()`] to step along the line.
    pub fn point_at(&self, t: Float) -> Point3D {
        self.p + self.v.as_vector() * t
    }

    /// Returns whether the triangle area metric of `p`, `v`, and `point` is
    /// negligible. Only X and Y are considered.
    ///
    /// The metric is asymmetric (see [`crate::Triangle::area()`]), so `p`
    /// itself is generally _not_ contained; `v` always is.
    pub fn contains(&self, point: &Point3D) -> bool {
        is_negligible(area_metric_xy(&self.p, &self.v, point))
    }

    /// Returns whether `self` contains both defining points of `other`.
    ///
    /// This is not symmetric: a line whose defining points share X and Y
    /// contains every point, so it is the same as any other line, but not
    /// the other way around.
    pub fn is_same_as(&self, other: &Line) -> bool {
        self.contains(&other.p) && self.contains(&other.v)
    }

    /// Returns whether both lines lie in a common plane.
    pub fn coplanar(&self, other: &Line) -> bool {
        is_negligible(Tetrahedron::volume_of(&self.p, &self.v, &other.p, &other.v))
    }

    /// Returns the line translated by `offset`.
    ///
    /// This fails only if rounding merges the two defining points.
    pub fn translated(&self, offset: &Vector3D) -> GeometryResult<Line> {
        Line::new(self.p + offset, self.v + offset)
    }
}

impl Add<&Vector3D> for &Line {
    type Output = GeometryResult<Line>;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        self.translated(rhs)
    }
}
impl Sub<&Vector3D> for &Line {
    type Output = GeometryResult<Line>;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        self.translated(&-rhs)
    }
}
impl Add<&Line> for &Vector3D {
    type Output = GeometryResult<Line>;

    fn add(self, rhs: &Line) -> Self::Output {
        rhs + self
    }
}
impl Sub<&Line> for &Vector3D {
    type Output = GeometryResult<Line>;

    fn sub(self, rhs: &Line) -> Self::Output {
        rhs - self
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add<Vector3D> for Line { fn add() -> GeometryResult<Line> }
    impl Sub<Vector3D> for Line { fn sub() -> GeometryResult<Line> }
    impl Add<Line> for Vector3D { fn add() -> GeometryResult<Line> }
    impl Sub<Line> for Vector3D { fn sub() -> GeometryResult<Line> }
}
