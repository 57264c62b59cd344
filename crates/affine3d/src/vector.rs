//! Free vectors in 3D space.

use std::fmt;
use std::ops::*;

use crate::approx_cmp::is_negligible;
use crate::error::{GeometryError, GeometryResult};
use crate::{Float, Point3D};

/// Free vector in 3D space, with a direction and a magnitude but no base
/// point.
///
/// Equality is exact, component by component. Use [`Vector3D::is_zero()`] or
/// [`approx::AbsDiffEq`] for tolerant comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3D {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

impl_xyz_abs_diff_eq!(impl for Vector3D);

impl From<[Float; 3]> for Vector3D {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "Vector3D({x}, {y}, {z})")
    }
}

impl Vector3D {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the p-norm of the vector.
    ///
    /// `p == 0` is treated as the sum of absolute components (the 1-norm), not
    /// as the number of nonzero components. Negative `p` is unsupported.
    pub fn norm(&self, p: i32) -> GeometryResult<Float> {
        let abs = self.to_array().map(Float::abs);
        match p {
            0 => Ok(abs.iter().sum()),
            1.. => {
                let s: Float = abs.iter().map(|c| c.powi(p)).sum();
                Ok(s.powf(1.0 / p as Float))
            }
            _ => Err(GeometryError::unsupported("norm", "Vector3D", "negative exponent")),
        }
    }
    /// Returns the magnitude (Euclidean norm) of the vector.
    pub fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> Float {
        self.dot(self)
    }

    /// Returns whether every component is within `EPSILON` of zero.
    pub fn is_zero(&self) -> bool {
        self.to_array().into_iter().all(is_negligible)
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, rhs: &Vector3D) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product of this vector with another, using the
    /// right-handed convention (`X × Y = Z`).
    pub fn cross(&self, rhs: &Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Vector3D {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
    /// Returns a copy of the vector with `scalar` added to every component.
    #[must_use]
    pub fn add_scalar(&self, scalar: Float) -> Vector3D {
        Vector3D::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }
    /// Returns a copy of the vector with `scalar` subtracted from every
    /// component.
    #[must_use]
    pub fn sub_scalar(&self, scalar: Float) -> Vector3D {
        self.add_scalar(-scalar)
    }

    /// Returns the point displaced from the origin by this vector.
    pub fn to_point(self) -> Point3D {
        Point3D::from_vector(self)
    }
}

impl Add<&Vector3D> for &Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub<&Vector3D> for &Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Add<&Point3D> for &Vector3D {
    type Output = Point3D;

    fn add(self, rhs: &Point3D) -> Self::Output {
        rhs + self
    }
}
/// Dot product.
impl Mul<&Vector3D> for &Vector3D {
    type Output = Float;

    fn mul(self, rhs: &Vector3D) -> Self::Output {
        self.dot(rhs)
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add for Vector3D { fn add() }
    impl Sub for Vector3D { fn sub() }
    impl Add<Point3D> for Vector3D { fn add() -> Point3D }
    impl Mul<Vector3D> for Vector3D { fn mul() -> Float }
}

macro_rules! impl_scalar_ops {
    (impl for $type_name:ty) => {
        impl Add<Float> for $type_name {
            type Output = Vector3D;

            fn add(self, rhs: Float) -> Self::Output {
                self.add_scalar(rhs)
            }
        }
        impl Sub<Float> for $type_name {
            type Output = Vector3D;

            fn sub(self, rhs: Float) -> Self::Output {
                self.sub_scalar(rhs)
            }
        }
        impl Mul<Float> for $type_name {
            type Output = Vector3D;

            fn mul(self, rhs: Float) -> Self::Output {
                self.scale(rhs)
            }
        }
        impl Neg for $type_name {
            type Output = Vector3D;

            fn neg(self) -> Self::Output {
                Vector3D::new(-self.x, -self.y, -self.z)
            }
        }
    };
}
impl_scalar_ops!(impl for Vector3D);
impl_scalar_ops!(impl for &'_ Vector3D);
