//! Positions in 3D Euclidean space.

use std::fmt;
use std::ops::*;

use crate::{Float, Vector3D};

/// Position in 3D Euclidean space.
///
/// Equality is exact, component by component.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3D {
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
    /// Z coordinate.
    pub z: Float,
}

impl_xyz_abs_diff_eq!(impl for Point3D);

impl From<[Float; 3]> for Point3D {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "Point3D({x}, {y}, {z})")
    }
}

impl Point3D {
    /// Origin point.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a point from its coordinates.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Returns the point displaced from the origin by `v`.
    pub const fn from_vector(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Returns the vector from the origin to the point.
    pub const fn as_vector(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
    /// Returns the coordinates as an array.
    pub fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add<&Vector3D> for &Point3D {
    type Output = Point3D;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub<&Vector3D> for &Point3D {
    type Output = Point3D;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Sub<&Point3D> for &Point3D {
    type Output = Vector3D;

    fn sub(self, rhs: &Point3D) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add<Vector3D> for Point3D { fn add() -> Point3D }
    impl Sub<Vector3D> for Point3D { fn sub() -> Point3D }
    impl Sub<Point3D> for Point3D { fn sub() -> Vector3D }
}

/// Reflects the point through the origin.
impl Neg for Point3D {
    type Output = Point3D;

    fn neg(self) -> Self::Output {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}
impl Neg for &Point3D {
    type Output = Point3D;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl AddAssign<Vector3D> for Point3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        *self = &*self + &rhs;
    }
}
impl SubAssign<Vector3D> for Point3D {
    fn sub_assign(&mut self, rhs: Vector3D) {
        *self = &*self - &rhs;
    }
}
