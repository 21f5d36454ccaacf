//! Corner vertices of the k-DOP.

use super::{BOTTOM, SIDE, TOP};
use crate::errors::BoundsError;
use crate::float_types::Real;
use crate::plane::Plane;
use nalgebra::Point3;

/// Intersect the top and bottom planes with each pair of adjacent side planes.
///
/// Vertex `i` (top) and `4 + i` (bottom) both lie on sides `(i + 3) % 4` and
/// `i`, i.e. above and below cell corner `i`.
pub(crate) fn compute_vertices(planes: &[Plane; 6]) -> Result<[Point3<Real>; 8], BoundsError> {
    let mut vertices = [Point3::origin(); 8];
    for i in 0..4 {
        let previous_side = &planes[SIDE + (i + 3) % 4];
        let side = &planes[SIDE + i];
        vertices[i] = Plane::intersect_three(&planes[TOP], previous_side, side)?;
        vertices[4 + i] = Plane::intersect_three(&planes[BOTTOM], previous_side, side)?;
    }
    Ok(vertices)
}
