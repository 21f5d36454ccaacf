use crate::float_types::{Real, parry3d::bounding_volume::BoundingSphere};
use crate::kdop::S2CellBounds;
use crate::oriented_box::{OrientedBox, classify_extent};
use crate::plane::{Intersect, Plane};
use nalgebra::Point3;

/// Queries a tile traversal runs against any kind of bounding volume.
pub trait TileBoundingVolume {
    /// The volume itself, for uniform handling next to other volume kinds.
    fn bounding_volume(&self) -> &dyn TileBoundingVolume
    where
        Self: Sized,
    {
        self
    }

    /// A sphere containing the volume, for cheap pre-culling.
    fn bounding_sphere(&self) -> BoundingSphere;

    /// Shortest distance from `point` to the volume; 0 inside.
    fn distance_to_point(&self, point: &Point3<Real>) -> Real;

    /// Which side of `plane` the volume is on.
    fn intersect_plane(&self, plane: &Plane) -> Intersect;
}

impl TileBoundingVolume for S2CellBounds {
    fn bounding_sphere(&self) -> BoundingSphere {
        S2CellBounds::bounding_sphere(self)
    }

    fn distance_to_point(&self, point: &Point3<Real>) -> Real {
        S2CellBounds::distance_to_point(self, point)
    }

    fn intersect_plane(&self, plane: &Plane) -> Intersect {
        S2CellBounds::intersect_plane(self, plane)
    }
}

impl TileBoundingVolume for OrientedBox {
    fn bounding_sphere(&self) -> BoundingSphere {
        OrientedBox::bounding_sphere(self)
    }

    fn distance_to_point(&self, point: &Point3<Real>) -> Real {
        OrientedBox::distance_to_point(self, point)
    }

    fn intersect_plane(&self, plane: &Plane) -> Intersect {
        OrientedBox::intersect_plane(self, plane)
    }
}

impl TileBoundingVolume for BoundingSphere {
    fn bounding_sphere(&self) -> BoundingSphere {
        *self
    }

    fn distance_to_point(&self, point: &Point3<Real>) -> Real {
        ((point - self.center()).norm() - self.radius()).max(0.0)
    }

    fn intersect_plane(&self, plane: &Plane) -> Intersect {
        classify_extent(plane.signed_distance(self.center()), self.radius())
    }
}
