//! Infinite planes in 3D Euclidean space.

use std::fmt;
use std::ops::{Add, Sub};

use crate::approx_cmp::is_negligible;
use crate::{Float, Line, Point3D, Vector3D};

/// Object that can lie in a plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneElement {
    /// Single point.
    Point(Point3D),
    /// Infinite line.
    Line(Line),
}
impl From<Point3D> for PlaneElement {
    fn from(value: Point3D) -> Self {
        Self::Point(value)
    }
}
impl From<Line> for PlaneElement {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

/// Infinite plane through a point `p` with normal vector `n`.
///
/// The normal vector need not be normalized. A zero normal is accepted but
/// degenerate: every point is then contained in the plane.
#[derive(Debug, Copy, Clone)]
pub struct Plane {
    p: Point3D,
    n: Vector3D,
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(p={}, n={})", self.p, self.n)
    }
}

/// Two planes are equal if `self` contains the base point of `other` and the
/// normals are parallel. Opposite normals count as parallel.
impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.contains(other.p) && self.n.cross(&other.n).is_zero()
    }
}

impl Plane {
    /// Constructs a plane from a point that it passes through and a normal
    /// vector.
    pub fn new(p: Point3D, n: Vector3D) -> Self {
        if n.is_zero() {
            log::warn!("constructing plane through {p} with zero normal vector {n}");
        }
        Self { p, n }
    }

    /// Returns the base point of the plane.
    pub fn p(&self) -> Point3D {
        self.p
    }
    /// Returns the normal vector of the plane.
    pub fn n(&self) -> Vector3D {
        self.n
    }

    /// Returns the dot product of the normal vector with the displacement from
    /// `point` to the base point. This is zero iff `point` is on the plane.
    pub fn normal_offset(&self, point: &Point3D) -> Float {
        self.n.dot(&(self.p - point))
    }

    /// Returns whether a point or line lies in the plane.
    pub fn contains(&self, element: impl Into<PlaneElement>) -> bool {
        match element.into() {
            PlaneElement::Point(point) => {
                self.p == point || is_negligible(self.normal_offset(&point))
            }
            PlaneElement::Line(line) => self.contains(line.p()) && self.contains(line.v()),
        }
    }

    /// Returns the plane translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3D) -> Plane {
        Plane {
            p: self.p + offset,
            n: self.n,
        }
    }
}

impl Add<&Vector3D> for &Plane {
    type Output = Plane;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        self.translated(rhs)
    }
}
impl Sub<&Vector3D> for &Plane {
    type Output = Plane;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        self.translated(&-rhs)
    }
}
impl Add<&Plane> for &Vector3D {
    type Output = Plane;

    fn add(self, rhs: &Plane) -> Self::Output {
        rhs + self
    }
}
impl Sub<&Plane> for &Vector3D {
    type Output = Plane;

    fn sub(self, rhs: &Plane) -> Self::Output {
        rhs - self
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add<Vector3D> for Plane { fn add() -> Plane }
    impl Sub<Vector3D> for Plane { fn sub() -> Plane }
    impl Add<Plane> for Vector3D { fn add() -> Plane }
    impl Sub<Plane> for Vector3D { fn sub() -> Plane }
}
