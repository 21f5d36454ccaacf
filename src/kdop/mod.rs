//! `S2CellBounds`: a 6-plane k-DOP around a height-extruded cell.
//!
//! The volume is the intersection of six half-spaces:
//!
//! ```text
//!            v3 ___________ v2
//!              /          /|        0  top     (tangent plane at the center, at maximum height)
//!             /   top    / |        1  bottom  (flipped top, through the lowest corner)
//!          v0/__________/v1|        2+k side k (through cell edge k..k+1, along the surface normal)
//!            |          |  |
//!            |  side 0  | / v6      vertex i     = top ∩ side (i+3)%4 ∩ side i
//!            |__________|/          vertex 4 + i = bottom ∩ side (i+3)%4 ∩ side i
//!          v4            v5
//! ```
//!
//! Construction runs once and everything is stored by value; the queries in
//! [`distance`] and [`classify`] only read.

use crate::cell::CellGeometry;
use crate::ellipsoid::Ellipsoid;
use crate::errors::BoundsError;
use crate::float_types::{Real, parry3d::bounding_volume::BoundingSphere};
use crate::oriented_box::OrientedBox;
use crate::plane::Plane;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod classify;
pub mod distance;
pub mod edge_normals;
mod planes;
mod vertices;

/// Index of the top plane / face.
pub const TOP: usize = 0;
/// Index of the bottom plane / face.
pub const BOTTOM: usize = 1;
/// Index of the first side plane / face; side `k` is `SIDE + k`.
pub const SIDE: usize = 2;

/// Construction parameters for [`S2CellBounds::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct S2CellBoundsOptions {
    /// S2 cell token, e.g. `"89c25"`.
    pub token: String,
    pub minimum_height: Real,
    pub maximum_height: Real,
    /// Reference shape for every geodetic conversion. Defaults to WGS84.
    pub ellipsoid: Ellipsoid,
}

impl Default for S2CellBoundsOptions {
    fn default() -> Self {
        S2CellBoundsOptions {
            token: String::new(),
            minimum_height: 0.0,
            maximum_height: 0.0,
            ellipsoid: Ellipsoid::default(),
        }
    }
}

impl S2CellBoundsOptions {
    pub fn new(token: impl Into<String>) -> Self {
        S2CellBoundsOptions {
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_heights(mut self, minimum_height: Real, maximum_height: Real) -> Self {
        self.minimum_height = minimum_height;
        self.maximum_height = maximum_height;
        self
    }

    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }
}

/// Tight bounding volume of an S2 cell between two heights.
#[derive(Debug, Clone)]
pub struct S2CellBounds {
    cell: CellGeometry,
    minimum_height: Real,
    maximum_height: Real,
    ellipsoid: Ellipsoid,

    planes: [Plane; 6],
    vertices: [Point3<Real>; 8],
    faces: [[Point3<Real>; 4]; 6],
    edge_normals: [[Vector3<Real>; 4]; 6],

    center: Point3<Real>,
    oriented_box: OrientedBox,
    bounding_sphere: BoundingSphere,
}

impl S2CellBounds {
    /// Build the volume for the cell named by `options.token`.
    ///
    /// Fails with [`BoundsError::InvalidArgument`] for a missing or invalid
    /// token and with [`BoundsError::DegenerateGeometry`] when the cell is too
    /// small or malformed for its planes to meet.
    pub fn new(options: &S2CellBoundsOptions) -> Result<Self, BoundsError> {
        let cell = CellGeometry::from_token(&options.token, &options.ellipsoid)?;
        Self::from_cell(
            cell,
            options.minimum_height,
            options.maximum_height,
            options.ellipsoid,
        )
    }

    /// Shorthand for [`S2CellBounds::new`] on WGS84.
    pub fn from_token(token: &str, minimum_height: Real, maximum_height: Real) -> Result<Self, BoundsError> {
        Self::new(&S2CellBoundsOptions::new(token).with_heights(minimum_height, maximum_height))
    }

    /// Build the volume for explicit cell geometry.
    ///
    /// `minimum_height > maximum_height` is accepted and yields an inverted,
    /// degenerate volume.
    pub fn from_cell(
        cell: CellGeometry,
        minimum_height: Real,
        maximum_height: Real,
        ellipsoid: Ellipsoid,
    ) -> Result<Self, BoundsError> {
        if minimum_height > maximum_height {
            log::warn!(
                "minimum height {} exceeds maximum height {}; the volume will be degenerate",
                minimum_height,
                maximum_height
            );
        }

        let planes = planes::compute_bounding_planes(&cell, minimum_height, maximum_height, &ellipsoid)?;
        let vertices = vertices::compute_vertices(&planes)?;
        let faces = edge_normals::face_vertices(&vertices);
        let edge_normals = edge_normals::compute_edge_normals(&planes, &faces);

        let center_geographic = ellipsoid.to_geographic(&cell.center()).ok_or_else(|| {
            BoundsError::DegenerateGeometry("cell center is at the ellipsoid center".to_string())
        })?;
        let center = ellipsoid
            .to_cartesian(&center_geographic.with_height((minimum_height + maximum_height) * 0.5));

        let oriented_box = OrientedBox::from_points(&vertices);
        let bounding_sphere = oriented_box.bounding_sphere();

        log::debug!(
            "built k-DOP for cell {} (heights {}..{}), bounding radius {:.3}",
            cell.token().unwrap_or("<explicit>"),
            minimum_height,
            maximum_height,
            bounding_sphere.radius()
        );

        Ok(S2CellBounds {
            cell,
            minimum_height,
            maximum_height,
            ellipsoid,
            planes,
            vertices,
            faces,
            edge_normals,
            center,
            oriented_box,
            bounding_sphere,
        })
    }

    pub const fn cell(&self) -> &CellGeometry {
        &self.cell
    }

    pub const fn minimum_height(&self) -> Real {
        self.minimum_height
    }

    pub const fn maximum_height(&self) -> Real {
        self.maximum_height
    }

    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// `[top, bottom, side0, side1, side2, side3]`, normals pointing out.
    pub const fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Top corners `0..4`, then the matching bottom corners `4..8`.
    pub const fn vertices(&self) -> &[Point3<Real>; 8] {
        &self.vertices
    }

    /// Vertex quad of every face, indexed like [`planes`](Self::planes).
    /// Suitable for drawing the volume outline.
    pub const fn faces(&self) -> &[[Point3<Real>; 4]; 6] {
        &self.faces
    }

    /// In-plane edge normals per face, see [`edge_normals::FACE_WINDING`].
    pub const fn edge_normals(&self) -> &[[Vector3<Real>; 4]; 6] {
        &self.edge_normals
    }

    /// Cell center at mid-height.
    pub const fn center(&self) -> Point3<Real> {
        self.center
    }

    /// Coarse box around the volume.
    pub const fn oriented_box(&self) -> &OrientedBox {
        &self.oriented_box
    }

    /// Coarse sphere around the volume.
    pub const fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }
}
