use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn coord() -> impl Strategy<Value = Float> {
    -1000.0..1000.0_f64
}
fn any_vector() -> impl Strategy<Value = Vector3D> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vector3D::new(x, y, z))
}
fn any_point() -> impl Strategy<Value = Point3D> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3D::new(x, y, z))
}
fn small_point() -> impl Strategy<Value = Point3D> {
    (-10.0..10.0_f64, -10.0..10.0_f64, -10.0..10.0_f64)
        .prop_map(|(x, y, z)| Point3D::new(x, y, z))
}

proptest! {
    #[test]
    fn proptest_vector_add_commutes(u in any_vector(), v in any_vector()) {
        assert_eq!(u + v, v + u);
    }

    #[test]
    fn proptest_vector_sub_anticommutes(u in any_vector(), v in any_vector()) {
        assert_eq!(u - v, -(v - u));
    }

    #[test]
    fn proptest_vector_add_then_sub(u in any_vector(), v in any_vector()) {
        assert_approx_eq!((u + v) - v, u);
    }

    #[test]
    fn proptest_point_translation_roundtrip(p in any_point(), v in any_vector()) {
        assert_approx_eq!((p + v) - v, p);
        assert_approx_eq!((p - v) + v, p);
        assert_approx_eq!((p + v) - p, v);
    }

    #[test]
    fn proptest_cross_product_anticommutes(u in any_vector(), v in any_vector()) {
        assert_eq!(u.cross(&v), -v.cross(&u));
    }

    #[test]
    fn proptest_cross_product_is_orthogonal(u in any_vector(), v in any_vector()) {
        let w = u.cross(&v);
        // Scale tolerance with magnitude; coordinates go up to 1000.
        let scale = u.mag() * v.mag() * (u.mag() + v.mag()) + 1.0;
        prop_assert!(w.dot(&u).abs() / scale < EPSILON);
        prop_assert!(w.dot(&v).abs() / scale < EPSILON);
    }

    #[test]
    fn proptest_plane_equality_is_reflexive(p in any_point(), n in any_vector()) {
        let plane = Plane::new(p, n);
        prop_assert!(plane == Plane::new(p, n));
        prop_assert!(plane == Plane::new(p, -n));
    }

    #[test]
    fn proptest_line_contains_second_point(p in small_point(), v in small_point()) {
        prop_assume!(p != v);
        let line = Line::new(p, v).expect("distinct points");
        prop_assert!(line.contains(&v));
    }

    #[test]
    fn proptest_line_in_xz_plane_contains_xz_plane(
        (px, pz, vx, vz) in (coord(), coord(), coord(), coord()),
        (qx, qz) in (coord(), coord()),
    ) {
        let (p, v) = (Point3D::new(px, 0.0, pz), Point3D::new(vx, 0.0, vz));
        prop_assume!(p != v);
        let line = Line::new(p, v).expect("distinct points");
        prop_assert!(line.contains(&p));
        prop_assert!(line.contains(&Point3D::new(qx, 0.0, qz)));
        prop_assert!(line.is_same_as(&Line::new(v, p).expect("distinct points")));
    }

    #[test]
    fn proptest_triangle_contains_centroid(
        a in small_point(),
        b in small_point(),
        c in small_point(),
    ) {
        prop_assume!(a != b && b != c && c != a);
        let triangle = Triangle::new(a, b, c).expect("distinct vertices");
        let sum = a.as_vector() + b.as_vector() + c.as_vector();
        prop_assert!(triangle.contains(&(sum * (1.0 / 3.0)).to_point()));
    }
}

#[test]
fn test_zero_vector_thresholds() {
    assert!(Vector3D::new(0.0, 0.0, 0.0).is_zero());
    assert!(Vector3D::new(1e-9, 0.0, 0.0).is_zero());
    assert!(!Vector3D::new(1e-7, 0.0, 0.0).is_zero());
}

#[test]
fn test_line_containment() {
    let line = Line::new(Point3D::new(0.0, 0.0, 0.0), Point3D::new(1.0, 0.0, 0.0))
        .expect("distinct points");
    assert!(line.contains(&Point3D::new(2.0, 0.0, 0.0)));
    assert!(!line.contains(&Point3D::new(0.0, 1.0, 0.0)));
}

#[test]
fn test_unit_triangle() {
    let triangle = Triangle::new(
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(1.0, 0.0, 0.0),
        Point3D::new(0.0, 1.0, 0.0),
    )
    .expect("distinct vertices");
    // Asymmetric area metric, not the geometric area of 0.5.
    assert_eq!(triangle.area(), 1.0);
    assert_eq!(triangle.signed_area(), 0.5);
    assert!(triangle.contains(&Point3D::new(0.25, 0.25, 0.0)));
    assert!(!triangle.contains(&Point3D::new(10.0, 10.0, 0.0)));
}

#[test]
fn test_unit_tetrahedron() {
    let tetrahedron = Tetrahedron::new(
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(1.0, 0.0, 0.0),
        Point3D::new(0.0, 1.0, 0.0),
        Point3D::new(0.0, 0.0, 1.0),
    )
    .expect("distinct vertices");
    assert_approx_eq!(tetrahedron.volume(), 1.0 / 6.0);
}

#[test]
fn test_invariant_violations() {
    let p = Point3D::new(1.0, 2.0, 3.0);
    let q = Point3D::new(3.0, 2.0, 1.0);
    assert!(matches!(
        Triangle::new(p, p, q),
        Err(GeometryError::InvariantViolation(_)),
    ));
    assert!(matches!(
        Line::new(p, p),
        Err(GeometryError::InvariantViolation(_)),
    ));
}

#[test]
fn test_opposite_normals_are_the_same_plane() {
    let p = Point3D::new(1.0, 2.0, 3.0);
    let n = Vector3D::new(0.0, 1.0, 1.0);
    assert_eq!(Plane::new(p, n), Plane::new(p, -n));
}
