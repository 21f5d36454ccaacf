//! Oriented bounding boxes fitted to point sets, used as the coarse
//! pre-culling volume next to the k-DOP.

use crate::float_types::{Real, parry3d::bounding_volume::BoundingSphere};
use crate::plane::{Intersect, Plane};
use nalgebra::{Matrix3, Point3, Vector3};

/// A box with center `center` whose columns of `half_axes` are the three
/// (mutually orthogonal) half-extent vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Point3<Real>,
    pub half_axes: Matrix3<Real>,
}

impl OrientedBox {
    pub const fn new(center: Point3<Real>, half_axes: Matrix3<Real>) -> Self {
        OrientedBox { center, half_axes }
    }

    /// Fit a box to `points` by principal component analysis.
    ///
    /// The axes are the eigenvectors of the points' covariance matrix; the
    /// extents are the min/max of the points projected on each axis. An empty
    /// slice gives a zero-sized box at the origin.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        if points.is_empty() {
            return OrientedBox::new(Point3::origin(), Matrix3::zeros());
        }

        let count = points.len() as Real;
        let mean = points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / count;

        let covariance = points.iter().fold(Matrix3::zeros(), |acc, p| {
            let d = p.coords - mean;
            acc + d * d.transpose()
        }) / count;

        let axes = covariance.symmetric_eigen().eigenvectors;

        let mut local_min = Vector3::repeat(Real::INFINITY);
        let mut local_max = Vector3::repeat(Real::NEG_INFINITY);
        for p in points {
            let local = axes.transpose() * (p.coords - mean);
            local_min = local_min.inf(&local);
            local_max = local_max.sup(&local);
        }

        let local_center = (local_min + local_max) * 0.5;
        let half_extents = (local_max - local_min) * 0.5;

        OrientedBox {
            center: Point3::from(mean + axes * local_center),
            half_axes: Matrix3::from_columns(&[
                axes.column(0) * half_extents.x,
                axes.column(1) * half_extents.y,
                axes.column(2) * half_extents.z,
            ]),
        }
    }

    /// The sphere through the box corners: same center, radius equal to the
    /// half diagonal `|u + v + w|`.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let diagonal = self.half_axes.column(0) + self.half_axes.column(1) + self.half_axes.column(2);
        BoundingSphere::new(self.center, diagonal.norm())
    }

    /// Euclidean distance from `point` to the box (0 inside).
    pub fn distance_to_point(&self, point: &Point3<Real>) -> Real {
        let offset = point - self.center;
        let mut distance_squared = 0.0;

        for i in 0..3 {
            let axis = self.half_axes.column(i);
            let half_extent = axis.norm();
            if half_extent == 0.0 {
                continue;
            }
            let d = offset.dot(&axis) / half_extent;
            let excess = d.abs() - half_extent;
            if excess > 0.0 {
                distance_squared += excess * excess;
            }
        }

        distance_squared.sqrt()
    }

    /// Classify the box against `plane` using its effective radius along the
    /// plane normal.
    pub fn intersect_plane(&self, plane: &Plane) -> Intersect {
        let n = plane.normal();
        let radius = (0..3).map(|i| n.dot(&self.half_axes.column(i)).abs()).sum::<Real>();
        classify_extent(plane.signed_distance(&self.center), radius)
    }
}

/// Classify a center-symmetric volume whose support along the plane normal
/// is `radius`, given the center's signed distance.
pub(crate) fn classify_extent(center_distance: Real, radius: Real) -> Intersect {
    if center_distance <= -radius {
        Intersect::Outside
    } else if center_distance >= radius {
        Intersect::Inside
    } else {
        Intersect::Intersecting
    }
}
