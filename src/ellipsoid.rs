//! Reference ellipsoids and conversions between Cartesian (earth-centred,
//! earth-fixed) and geographic coordinates.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Squared ellipsoid norm below which a point is treated as sitting at the
/// center, where the surface projection does not converge.
const CENTER_TOLERANCE_SQUARED: Real = 0.1;

/// Newton iterations allowed for [`Ellipsoid::scale_to_geodetic_surface`].
const MAX_SURFACE_ITERATIONS: usize = 64;

/// A longitude/latitude pair in radians plus a height in metres above the
/// ellipsoid surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geographic {
    pub longitude: Real,
    pub latitude: Real,
    pub height: Real,
}

impl Geographic {
    pub const fn new(longitude: Real, latitude: Real, height: Real) -> Self {
        Geographic {
            longitude,
            latitude,
            height,
        }
    }

    pub fn from_degrees(longitude: Real, latitude: Real, height: Real) -> Self {
        Geographic::new(longitude.to_radians(), latitude.to_radians(), height)
    }

    /// Same position, different height.
    pub const fn with_height(self, height: Real) -> Self {
        Geographic { height, ..self }
    }
}

/// A triaxial ellipsoid `(x/a)² + (y/b)² + (z/c)² = 1` centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EllipsoidRadii", into = "EllipsoidRadii"))]
pub struct Ellipsoid {
    radii: Vector3<Real>,
    radii_squared: Vector3<Real>,
    one_over_radii: Vector3<Real>,
    one_over_radii_squared: Vector3<Real>,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EllipsoidRadii {
    x: Real,
    y: Real,
    z: Real,
}

#[cfg(feature = "serde")]
impl From<EllipsoidRadii> for Ellipsoid {
    fn from(r: EllipsoidRadii) -> Self {
        Ellipsoid::new(r.x, r.y, r.z)
    }
}

#[cfg(feature = "serde")]
impl From<Ellipsoid> for EllipsoidRadii {
    fn from(e: Ellipsoid) -> Self {
        EllipsoidRadii {
            x: e.radii.x,
            y: e.radii.y,
            z: e.radii.z,
        }
    }
}

impl Default for Ellipsoid {
    /// WGS84
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid::new(6378137.0, 6378137.0, 6356752.3142451793);

    /// Sphere of radius one.
    pub const UNIT_SPHERE: Ellipsoid = Ellipsoid::new(1.0, 1.0, 1.0);

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Ellipsoid {
            radii: Vector3::new(x, y, z),
            radii_squared: Vector3::new(x * x, y * y, z * z),
            one_over_radii: Vector3::new(1.0 / x, 1.0 / y, 1.0 / z),
            one_over_radii_squared: Vector3::new(1.0 / (x * x), 1.0 / (y * y), 1.0 / (z * z)),
        }
    }

    pub const fn sphere(radius: Real) -> Self {
        Ellipsoid::new(radius, radius, radius)
    }

    pub const fn radii(&self) -> Vector3<Real> {
        self.radii
    }

    /// Outward surface normal for a geographic position (height is ignored).
    pub fn geodetic_surface_normal_geographic(&self, geographic: &Geographic) -> Vector3<Real> {
        let cos_lat = geographic.latitude.cos();
        Vector3::new(
            cos_lat * geographic.longitude.cos(),
            cos_lat * geographic.longitude.sin(),
            geographic.latitude.sin(),
        )
        .normalize()
    }

    /// Outward normal of the ellipsoid surface through `point`, i.e. the
    /// normalized gradient `p ∘ (1/r²)`. `None` at the center.
    pub fn geodetic_surface_normal(&self, point: &Point3<Real>) -> Option<Vector3<Real>> {
        let gradient = point.coords.component_mul(&self.one_over_radii_squared);
        let norm = gradient.norm();
        if norm < EPSILON || !norm.is_finite() {
            return None;
        }
        Some(gradient / norm)
    }

    /// Cartesian position of a geographic coordinate.
    pub fn to_cartesian(&self, geographic: &Geographic) -> Point3<Real> {
        let n = self.geodetic_surface_normal_geographic(geographic);
        let k = self.radii_squared.component_mul(&n);
        let gamma = n.dot(&k).sqrt();
        Point3::from(k / gamma + n * geographic.height)
    }

    /// Geographic coordinate of a Cartesian position. `None` near the center.
    pub fn to_geographic(&self, point: &Point3<Real>) -> Option<Geographic> {
        let surface = self.scale_to_geodetic_surface(point)?;
        let n = self.geodetic_surface_normal(&surface)?;
        let h = point - surface;

        let height = h.norm().copysign(h.dot(&point.coords));
        Some(Geographic::new(n.y.atan2(n.x), n.z.clamp(-1.0, 1.0).asin(), height))
    }

    /// Drop `point` onto the surface along the geodetic normal.
    ///
    /// Newton iteration on the normal multiplier λ of
    /// `p_s = p / (1 + λ / r²)` until `Σ (p_i² / r_i²) / (1 + λ / r_i²)² - 1`
    /// vanishes. Points within the center tolerance get the radial
    /// projection, `None` if even that is undefined.
    pub fn scale_to_geodetic_surface(&self, point: &Point3<Real>) -> Option<Point3<Real>> {
        let p = point.coords;
        let scaled = p.component_mul(&self.one_over_radii);
        let p2 = scaled.component_mul(&scaled);

        let squared_norm = p2.sum();
        let ratio = (1.0 / squared_norm).sqrt();
        let intersection = p * ratio;

        if squared_norm < CENTER_TOLERANCE_SQUARED {
            return ratio.is_finite().then(|| Point3::from(intersection));
        }

        let gradient = intersection.component_mul(&self.one_over_radii_squared) * 2.0;
        let inv_r2 = self.one_over_radii_squared;

        let mut lambda = ((1.0 - ratio) * p.norm()) / (0.5 * gradient.norm());
        let mut correction = 0.0;
        let mut multiplier = Vector3::repeat(1.0);

        for iteration in 0..MAX_SURFACE_ITERATIONS {
            lambda -= correction;
            multiplier = Vector3::new(
                1.0 / (1.0 + lambda * inv_r2.x),
                1.0 / (1.0 + lambda * inv_r2.y),
                1.0 / (1.0 + lambda * inv_r2.z),
            );
            let m2 = multiplier.component_mul(&multiplier);
            let m3 = m2.component_mul(&multiplier);

            let func = p2.dot(&m2) - 1.0;
            if func.abs() <= EPSILON {
                log::trace!("surface projection converged after {} iterations", iteration + 1);
                return Some(Point3::from(p.component_mul(&multiplier)));
            }

            let derivative = -2.0 * p2.component_mul(&m3).dot(&inv_r2);
            correction = func / derivative;
        }

        log::warn!(
            "surface projection of {:?} did not converge after {} iterations",
            point,
            MAX_SURFACE_ITERATIONS
        );
        Some(Point3::from(p.component_mul(&multiplier)))
    }
}
