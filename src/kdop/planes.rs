//! The six bounding planes: top, bottom and one per cell edge.

use super::{BOTTOM, SIDE};
use crate::cell::CellGeometry;
use crate::ellipsoid::Ellipsoid;
use crate::errors::BoundsError;
use crate::float_types::{EPSILON, Real};
use crate::plane::Plane;
use nalgebra::{Point3, Vector3};

/// Compute `[top, bottom, side0, side1, side2, side3]` for `cell` extruded
/// between the two heights.
///
/// * **top**: tangent plane at the cell center, moved up to `maximum_height`.
/// * **bottom**: the top plane flipped and pushed down until it passes
///   through the lowest corner at `minimum_height`, so no lower corner is clipped.
/// * **side k**: contains corner `k`, the edge towards corner `k+1` and the
///   surface normal at corner `k`; normal is `(c[k+1] - c[k]) × up(c[k])`.
pub(crate) fn compute_bounding_planes(
    cell: &CellGeometry,
    minimum_height: Real,
    maximum_height: Real,
    ellipsoid: &Ellipsoid,
) -> Result<[Plane; 6], BoundsError> {
    let center = cell.center();
    let up = surface_normal(ellipsoid, &center, "cell center")?;
    let top_point = lift(ellipsoid, &center, maximum_height, "cell center")?;
    let top = Plane::from_point_normal(&top_point, up);

    // Most negative signed distance of a lowered corner below the top plane.
    let mut max_distance: Real = 0.0;
    for corner in cell.corners() {
        let lowered = lift(ellipsoid, corner, minimum_height, "cell corner")?;
        max_distance = max_distance.min(top.signed_distance(&lowered));
    }
    let bottom = Plane::new(-top.normal, -top.distance + max_distance);

    let mut planes = [top; 6];
    planes[BOTTOM] = bottom;
    let corners = cell.corners();
    for k in 0..4 {
        planes[SIDE + k] = side_plane(k, &corners[k], &corners[(k + 1) % 4], ellipsoid)?;
    }

    log::trace!(
        "bounding planes: top {:?}, bottom offset {} below",
        top,
        -max_distance
    );
    Ok(planes)
}

fn side_plane(
    index: usize,
    corner: &Point3<Real>,
    next: &Point3<Real>,
    ellipsoid: &Ellipsoid,
) -> Result<Plane, BoundsError> {
    let up = surface_normal(ellipsoid, corner, "cell corner")?;
    let normal = (next - corner).cross(&up);
    let length = normal.norm();
    if length < EPSILON {
        return Err(BoundsError::DegenerateGeometry(format!(
            "side {index} has a zero-length normal"
        )));
    }
    Ok(Plane::from_point_normal(corner, normal / length))
}

fn surface_normal(
    ellipsoid: &Ellipsoid,
    point: &Point3<Real>,
    what: &str,
) -> Result<Vector3<Real>, BoundsError> {
    ellipsoid.geodetic_surface_normal(point).ok_or_else(|| {
        BoundsError::DegenerateGeometry(format!("{what} {point:?} has no surface normal"))
    })
}

/// `point` moved along the geodetic normal to `height`.
fn lift(
    ellipsoid: &Ellipsoid,
    point: &Point3<Real>,
    height: Real,
    what: &str,
) -> Result<Point3<Real>, BoundsError> {
    let geographic = ellipsoid.to_geographic(point).ok_or_else(|| {
        BoundsError::DegenerateGeometry(format!("{what} {point:?} is at the ellipsoid center"))
    })?;
    Ok(ellipsoid.to_cartesian(&geographic.with_height(height)))
}
