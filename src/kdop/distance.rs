//! Nearest point on the k-DOP and distance to it.
//!
//! The query counts how many bounding planes the point lies outside of and
//! resolves the nearest boundary feature from that count:
//!
//! | outside of | nearest feature |
//! |---|---|
//! | 0 planes | the point itself (inside) |
//! | 1 plane | that face, as a polygon |
//! | 2 planes | the edge the two faces share |
//! | 3 planes | the vertex the three faces share |
//! | more | the bottom face, as a polygon |
//!
//! Only stack values are used; the query never allocates.

use super::edge_normals::{FACE_WINDING, outside_edge};
use super::{BOTTOM, S2CellBounds, SIDE, TOP};
use crate::float_types::{Real, tolerance};
use crate::plane::closest_point_on_segment;
use nalgebra::{Point3, Vector3};

impl S2CellBounds {
    /// Shortest Euclidean distance from `point` to the volume, 0 inside.
    pub fn distance_to_point(&self, point: &Point3<Real>) -> Real {
        (self.nearest_point(point) - point).norm()
    }

    /// The point of the volume closest to `point` (`point` itself when inside).
    pub fn nearest_point(&self, point: &Point3<Real>) -> Point3<Real> {
        let tolerance = tolerance();
        let mut selected = [0usize; 6];
        let mut count = 0;
        let mut working_face = TOP;

        let mut outside = |face: usize| {
            if self.planes[face].signed_distance(point) > tolerance {
                selected[count] = face;
                count += 1;
                working_face = face;
                true
            } else {
                false
            }
        };

        if !outside(TOP) {
            outside(BOTTOM);
        }
        for k in 0..4 {
            // later sides overwrite the working face
            outside(SIDE + k);
        }

        log::trace!("nearest point: outside of planes {:?}", &selected[..count]);

        match count {
            0 => *point,
            1 => self.closest_point_on_face(working_face, point),
            2 => self.closest_point_on_shared_edge(selected[0], selected[1], point),
            3 => self.closest_shared_vertex(&selected[..3], point),
            _ => self.closest_point_on_face(BOTTOM, point),
        }
    }

    /// Project onto the face plane, then clamp to the face polygon.
    pub(crate) fn closest_point_on_face(&self, face: usize, point: &Point3<Real>) -> Point3<Real> {
        let projected = self.planes[face].project_point(point);
        closest_point_on_polygon(
            &projected,
            &self.faces[face],
            &self.edge_normals[face],
            FACE_WINDING[face],
        )
    }

    /// Two violated planes: the nearest point lies on their common edge.
    fn closest_point_on_shared_edge(&self, a: usize, b: usize, point: &Point3<Real>) -> Point3<Real> {
        let v = &self.vertices;
        let edge = match (a, b) {
            (TOP, side) => {
                let k = side - SIDE;
                Some((v[k], v[(k + 1) % 4]))
            },
            (BOTTOM, side) => {
                let k = side - SIDE;
                Some((v[4 + k], v[4 + (k + 1) % 4]))
            },
            (first, second) => {
                shared_corner(first - SIDE, second - SIDE).map(|c| (v[c], v[4 + c]))
            },
        };

        match edge {
            Some((l0, l1)) => closest_point_on_segment(point, &l0, &l1),
            // opposite side planes share no edge
            None => self.closest_point_on_faces(&[a, b], point),
        }
    }

    /// Three violated planes: top or bottom plus two adjacent sides meet in
    /// exactly one vertex.
    fn closest_shared_vertex(&self, selected: &[usize], point: &Point3<Real>) -> Point3<Real> {
        let corner = shared_corner(selected[1] - SIDE, selected[2] - SIDE);
        match (selected[0], corner) {
            (TOP, Some(c)) => self.vertices[c],
            (BOTTOM, Some(c)) => self.vertices[4 + c],
            _ => self.closest_point_on_faces(selected, point),
        }
    }

    /// Best polygon candidate over several faces.
    fn closest_point_on_faces(&self, faces: &[usize], point: &Point3<Real>) -> Point3<Real> {
        let mut best = *point;
        let mut best_distance = Real::INFINITY;
        for &face in faces {
            let candidate = self.closest_point_on_face(face, point);
            let distance = (candidate - point).norm_squared();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }
}

/// Cell corner shared by side `i` and side `j` (`i < j`), if they are adjacent.
/// Side `k` runs from corner `k` to corner `k + 1`.
const fn shared_corner(i: usize, j: usize) -> Option<usize> {
    if j == i + 1 {
        Some(j)
    } else if i == 0 && j == 3 {
        Some(0)
    } else {
        None
    }
}

/// Nearest point of a planar quad to `point`, which must already lie in the
/// quad's plane.
///
/// Only edges whose half-plane `point` falls outside of are candidates; with
/// none, `point` is inside the quad and is returned unchanged.
pub fn closest_point_on_polygon(
    point: &Point3<Real>,
    vertices: &[Point3<Real>; 4],
    edge_normals: &[Vector3<Real>; 4],
    winding: Real,
) -> Point3<Real> {
    let mut closest = None;
    let mut min_distance = Real::INFINITY;

    for i in 0..4 {
        if !outside_edge(winding, &edge_normals[i], &vertices[i], point) {
            continue;
        }

        let on_edge = closest_point_on_segment(point, &vertices[i], &vertices[(i + 1) % 4]);
        let distance = (on_edge - point).norm_squared();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(on_edge);
        }
    }

    closest.unwrap_or(*point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_sides_share_corners() {
        assert_eq!(shared_corner(0, 1), Some(1));
        assert_eq!(shared_corner(1, 2), Some(2));
        assert_eq!(shared_corner(2, 3), Some(3));
        assert_eq!(shared_corner(0, 3), Some(0));
        assert_eq!(shared_corner(0, 2), None);
        assert_eq!(shared_corner(1, 3), None);
    }

    #[test]
    fn polygon_clamps_to_nearest_edge_or_corner() {
        // unit square in z = 0, counter-clockwise seen from +z
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        // outward edge normals, winding +1
        let normals = [-Vector3::y(), Vector3::x(), Vector3::y(), -Vector3::x()];

        let inside = Point3::new(0.25, 0.75, 0.0);
        assert_eq!(closest_point_on_polygon(&inside, &vertices, &normals, 1.0), inside);

        let below = Point3::new(0.5, -2.0, 0.0);
        assert_eq!(
            closest_point_on_polygon(&below, &vertices, &normals, 1.0),
            Point3::new(0.5, 0.0, 0.0)
        );

        let diagonal = Point3::new(3.0, 4.0, 0.0);
        assert_eq!(
            closest_point_on_polygon(&diagonal, &vertices, &normals, 1.0),
            Point3::new(1.0, 1.0, 0.0)
        );
    }
}
