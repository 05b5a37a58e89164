//! Free functions on vectors that don't belong to a single type: arbitrary
//! perpendiculars, projection-plane selection and tangent construction.

use crate::{Axis, Scalar, Vector2, Vector3};

/// Return an arbitrary unit vector perpendicular to `v`.
///
/// Picks the coordinate of smallest absolute value and swaps/negates the
/// other two, which keeps the result well away from degeneracy.
pub fn perp_vector<T: Scalar>(v: &Vector3<T>) -> Vector3<T> {
    match min_abs_axis(v) {
        Axis::X => Vector3::new(T::zero(), v.z, -v.y).unit(),
        Axis::Y => Vector3::new(v.z, T::zero(), -v.x).unit(),
        Axis::Z => Vector3::new(v.y, -v.x, T::zero()).unit(),
    }
}

/// The 2D perpendicular, rotated a quarter turn clockwise.
pub fn perp_vector2<T: Scalar>(v: &Vector2<T>) -> Vector2<T> {
    Vector2::new(v.y, -v.x)
}

/// The axis along which `v` has the smallest absolute component.
pub fn min_abs_axis<T: Scalar>(v: &Vector3<T>) -> Axis {
    let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());

    if x <= y {
        if x <= z {
            Axis::X
        } else {
            Axis::Z
        }
    } else if y <= z {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Find the pair of coordinate axes forming the plane onto which a surface
/// with the given normal projects with the largest area.
pub fn best_planar_projection<T: Scalar>(normal: &Vector3<T>) -> (Axis, Axis) {
    let (x, y, z) = (normal.x.abs(), normal.y.abs(), normal.z.abs());

    if z > y && z > x {
        // z-major normal, x-y projection is best
        (Axis::X, Axis::Y)
    } else if y > x {
        // y-major normal, x-z projection is best
        (Axis::X, Axis::Z)
    } else {
        // only case left: x-major normal, y-z projection
        (Axis::Y, Axis::Z)
    }
}

/// Construct two orthonormal tangent vectors `(u, v)` perpendicular to
/// `normal`, oriented by its best planar projection.
pub fn calculate_perpendicular_vectors<T: Scalar>(
    normal: &Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    // Nudging the component that lies in the projection plane guarantees the
    // nudged copy is not parallel to the normal.
    let bump = match best_planar_projection(normal) {
        (Axis::X, Axis::Y) => Axis::X,
        (Axis::X, Axis::Z) => Axis::Z,
        _ => Axis::Y,
    };

    let mut vn = *normal;
    vn[bump] = vn[bump] + T::one();

    let v = normal.cross(&vn).unit();
    let u = v.cross(normal).unit();

    (u, v)
}
