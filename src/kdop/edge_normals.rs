//! Per-face vertex quads and in-plane edge normals.
//!
//! Each face of the k-DOP is a quadrilateral. For fast "which edges does this
//! projected point fall outside of" tests during the distance query, every
//! face stores one in-plane normal per edge together with a fixed winding
//! sign for the face.

use super::{BOTTOM, SIDE, TOP};
use crate::float_types::{EPSILON, Real};
use crate::plane::Plane;
use nalgebra::{Point3, Vector3};

/// Winding sign per face. A point is within the face along edge `i` iff
/// `FACE_WINDING[face] * dot(edge_normal[i], p - v[i]) <= 0`.
///
/// The top quad runs counter-clockwise seen along its outward normal, which
/// makes its raw edge normals point out of the polygon; the bottom and side
/// quads run clockwise seen from outside, so theirs point in.
pub const FACE_WINDING: [Real; 6] = [1.0, -1.0, -1.0, -1.0, -1.0, -1.0];

/// The four vertices of every face, in the order the edge normals use:
/// top `v0..v3`, bottom `v4..v7`, side `k` `{v[k], v[k+1], v[4+k+1], v[4+k]}`.
pub(crate) fn face_vertices(vertices: &[Point3<Real>; 8]) -> [[Point3<Real>; 4]; 6] {
    let mut faces = [[Point3::origin(); 4]; 6];
    faces[TOP] = [vertices[0], vertices[1], vertices[2], vertices[3]];
    faces[BOTTOM] = [vertices[4], vertices[5], vertices[6], vertices[7]];
    for k in 0..4 {
        faces[SIDE + k] = [
            vertices[k],
            vertices[(k + 1) % 4],
            vertices[4 + (k + 1) % 4],
            vertices[4 + k],
        ];
    }
    faces
}

/// `normalize(face_normal × (v[i] - v[i+1]))` for each edge of each face.
pub(crate) fn compute_edge_normals(
    planes: &[Plane; 6],
    faces: &[[Point3<Real>; 4]; 6],
) -> [[Vector3<Real>; 4]; 6] {
    let mut normals = [[Vector3::zeros(); 4]; 6];
    for (face, quad) in faces.iter().enumerate() {
        for i in 0..4 {
            let edge = quad[i] - quad[(i + 1) % 4];
            let n = planes[face].normal.cross(&edge);
            let len = n.norm();
            // zero-length edges never reject a point
            normals[face][i] = if len < EPSILON { Vector3::zeros() } else { n / len };
        }
    }
    normals
}

/// True when `point` (already in the face plane) lies outside edge `i`.
#[inline]
pub(crate) fn outside_edge(
    winding: Real,
    edge_normal: &Vector3<Real>,
    edge_start: &Point3<Real>,
    point: &Point3<Real>,
) -> bool {
    winding * edge_normal.dot(&(point - edge_start)) > 0.0
}
