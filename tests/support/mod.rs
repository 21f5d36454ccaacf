//! Test support library
//! Provides fixture volumes and helper functions for the integration tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use s2cell_kdop::{
    Ellipsoid, S2CellBounds, S2CellBoundsOptions,
    float_types::Real,
    kdop::{BOTTOM, SIDE, TOP},
};

/// A level 8 cell over New York, 40 km across.
pub const NYC_TOKEN: &str = "89c25";

/// Tokens covering cube faces and a couple of subdivision levels.
pub const TOKENS: &[&str] = &["1", "3", "b", "04", "89c25", "89c259", "3b"];

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Build a WGS84 volume, panicking on failure.
pub fn bounds(token: &str, minimum_height: Real, maximum_height: Real) -> S2CellBounds {
    S2CellBounds::from_token(token, minimum_height, maximum_height)
        .unwrap_or_else(|e| panic!("building {token}: {e}"))
}

/// Same cell on a sphere of WGS84's equatorial radius, where every side plane
/// passes through the center.
pub fn sphere_bounds(token: &str, minimum_height: Real, maximum_height: Real) -> S2CellBounds {
    let options = S2CellBoundsOptions::new(token)
        .with_heights(minimum_height, maximum_height)
        .with_ellipsoid(Ellipsoid::sphere(6378137.0));
    S2CellBounds::new(&options).unwrap_or_else(|e| panic!("building {token}: {e}"))
}

pub fn top_normal(bounds: &S2CellBounds) -> Vector3<Real> {
    bounds.planes()[TOP].normal
}

pub fn bottom_normal(bounds: &S2CellBounds) -> Vector3<Real> {
    bounds.planes()[BOTTOM].normal
}

/// Outward normal of side `k` (0..4).
pub fn side_normal(bounds: &S2CellBounds, k: usize) -> Vector3<Real> {
    bounds.planes()[SIDE + k].normal
}

pub fn midpoint(a: &Point3<Real>, b: &Point3<Real>) -> Point3<Real> {
    Point3::from((a.coords + b.coords) * 0.5)
}

/// Average of a face quad.
pub fn face_centroid(quad: &[Point3<Real>; 4]) -> Point3<Real> {
    Point3::from(quad.iter().fold(Vector3::zeros(), |acc, v| acc + v.coords) / 4.0)
}
