//! Quadrilateral cells on the ellipsoid surface.
//!
//! [`CellGeometry`] is the only thing the k-DOP needs from a cell: a center
//! and four corners in counter-clockwise order (seen from outside), all on the
//! ellipsoid surface. S2 cells are decoded from their tokens with the `s2`
//! crate; any other quadrilateral scheme can use [`CellGeometry::new`].

use crate::ellipsoid::Ellipsoid;
use crate::errors::BoundsError;
use crate::float_types::Real;
use nalgebra::Point3;
use s2::cell::Cell;
use s2::cellid::CellID;
use s2::point::Point;

/// Hex digits in a full 64-bit cell id.
const MAX_TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry {
    center: Point3<Real>,
    corners: [Point3<Real>; 4],
    token: Option<String>,
    level: Option<u8>,
}

impl CellGeometry {
    /// Geometry from explicit surface points. `corners` must be in
    /// counter-clockwise order when viewed from outside the ellipsoid.
    pub const fn new(center: Point3<Real>, corners: [Point3<Real>; 4]) -> Self {
        CellGeometry {
            center,
            corners,
            token: None,
            level: None,
        }
    }

    /// Decode an S2 cell token (e.g. `"89c25"`) and place the cell on `ellipsoid`.
    pub fn from_token(token: &str, ellipsoid: &Ellipsoid) -> Result<Self, BoundsError> {
        let id = parse_token(token)?;
        let cell = Cell::from(&id);

        let center = to_ellipsoid_surface(&cell.center(), ellipsoid)?;
        let mut corners = [Point3::origin(); 4];
        for (k, corner) in corners.iter_mut().enumerate() {
            *corner = to_ellipsoid_surface(&cell.vertex(k), ellipsoid)?;
        }

        Ok(CellGeometry {
            center,
            corners,
            token: Some(token.to_owned()),
            level: Some(id.level() as u8),
        })
    }

    pub const fn center(&self) -> Point3<Real> {
        self.center
    }

    /// Corner `index`, counter-clockwise. The index wraps, so `vertex(4)` is
    /// `vertex(0)`.
    pub const fn vertex(&self, index: usize) -> Point3<Real> {
        self.corners[index % 4]
    }

    pub const fn corners(&self) -> &[Point3<Real>; 4] {
        &self.corners
    }

    /// The token this geometry was decoded from, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// S2 subdivision level (0 = cube face, 30 = leaf).
    pub const fn level(&self) -> Option<u8> {
        self.level
    }
}

/// Check whether `token` names a valid S2 cell.
pub fn is_valid_token(token: &str) -> bool {
    parse_token(token).is_ok()
}

fn parse_token(token: &str) -> Result<CellID, BoundsError> {
    if token.is_empty() {
        return Err(BoundsError::InvalidArgument("S2 cell token is empty".to_string()));
    }
    if token.len() > MAX_TOKEN_LEN || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BoundsError::InvalidArgument(format!(
            "S2 cell token '{token}' is malformed"
        )));
    }

    let id = CellID::from_token(token);

    if !id.is_valid() {
        return Err(BoundsError::InvalidArgument(format!(
            "S2 cell token '{token}' is invalid"
        )));
    }
    Ok(id)
}

/// Map a unit-sphere direction onto the ellipsoid surface at the same
/// longitude/latitude.
fn to_ellipsoid_surface(point: &Point, ellipsoid: &Ellipsoid) -> Result<Point3<Real>, BoundsError> {
    let direction = Point3::new(point.0.x, point.0.y, point.0.z);
    let geographic = Ellipsoid::UNIT_SPHERE
        .to_geographic(&direction)
        .ok_or_else(|| {
            BoundsError::DegenerateGeometry(format!("cell point {direction:?} is not on the unit sphere"))
        })?;
    Ok(ellipsoid.to_cartesian(&geographic.with_height(0.0)))
}
