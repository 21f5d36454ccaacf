//! Planes in Hessian normal form and the handful of point/plane/segment
//! operations the bounding volumes are built from.

use crate::errors::BoundsError;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of classifying a volume against a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intersect {
    /// Entirely on the side the plane normal points to.
    Inside,
    /// Entirely on the opposite side.
    Outside,
    /// Straddles the plane.
    Intersecting,
}

/// A plane `dot(normal, p) + distance = 0`.
///
/// `normal` is a unit vector and points to the "outward" side: a point is
/// outside iff its [`signed_distance`](Plane::signed_distance) is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub distance: Real,
}

impl Plane {
    /// Create a plane from an (already unit) normal and its offset.
    pub const fn new(normal: Vector3<Real>, distance: Real) -> Self {
        Plane { normal, distance }
    }

    /// Create the plane through `point` with the given unit `normal`.
    pub fn from_point_normal(point: &Point3<Real>, normal: Vector3<Real>) -> Self {
        Plane {
            normal,
            distance: -normal.dot(&point.coords),
        }
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn distance(&self) -> Real {
        self.distance
    }

    /// Return a copy facing the other way. The point set is unchanged.
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// `dot(normal, point) + distance`; positive on the outward side.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) + self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn project_point(&self, point: &Point3<Real>) -> Point3<Real> {
        point - self.normal * self.signed_distance(point)
    }

    /// The single point shared by three planes.
    ///
    /// Solves `dot(n_k, x) = -distance_k` for the three planes:
    /// ```text
    /// x = Σ_k (n_{k+1} × n_{k+2}) · dot(p_k, n_k) / det[n_0; n_1; n_2]
    /// ```
    /// where `p_k = -distance_k · n_k` is the point of plane `k` closest to the
    /// origin. Fails with [`BoundsError::DegenerateGeometry`] when the
    /// determinant vanishes, i.e. two of the planes are (nearly) parallel.
    pub fn intersect_three(a: &Plane, b: &Plane, c: &Plane) -> Result<Point3<Real>, BoundsError> {
        let planes = [a, b, c];
        let det = Matrix3::from_rows(&[
            a.normal.transpose(),
            b.normal.transpose(),
            c.normal.transpose(),
        ])
        .determinant();

        if det.abs() < EPSILON {
            return Err(BoundsError::DegenerateGeometry(format!(
                "planes do not meet in a single point (det = {det:e})"
            )));
        }

        let mut sum = Vector3::zeros();
        for k in 0..3 {
            let n = planes[k].normal;
            let on_plane = n * -planes[k].distance;
            let cross = planes[(k + 1) % 3].normal.cross(&planes[(k + 2) % 3].normal);
            sum += cross * on_plane.dot(&n);
        }

        Ok(Point3::from(sum / det))
    }
}

/// Nearest point to `point` on the segment `l0..l1`.
///
/// Projects onto the supporting line and clamps the parameter
/// `t = dot(point - l0, l1 - l0) / |l1 - l0|²` to `[0, 1]`.
pub fn closest_point_on_segment(
    point: &Point3<Real>,
    l0: &Point3<Real>,
    l1: &Point3<Real>,
) -> Point3<Real> {
    let dir = l1 - l0;
    let len_sq = dir.norm_squared();
    if len_sq < EPSILON * EPSILON {
        return *l0;
    }
    let t = ((point - l0).dot(&dir) / len_sq).clamp(0.0, 1.0);
    l0 + dir * t
}
