mod support;

use nalgebra::{Point3, Vector3};
use s2cell_kdop::{
    Intersect, OrientedBox, Plane, TileBoundingVolume,
    float_types::{Real, parry3d::bounding_volume::BoundingSphere},
};

fn viewers(bounds: &s2cell_kdop::S2CellBounds) -> Vec<Point3<Real>> {
    let up = support::top_normal(bounds);
    let mut points = vec![bounds.center() + up * 5_000.0, bounds.center() - up * 50_000.0];
    for k in 0..4 {
        let side = support::side_normal(bounds, k);
        points.push(bounds.center() + side * 30_000.0);
        points.push(bounds.center() + side * 200_000.0 + up * 1_000.0);
    }
    points
}

#[test]
fn coarse_volumes_never_overestimate_distance() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 300.0);
    let kdop: &dyn TileBoundingVolume = &bounds;
    let obb: &dyn TileBoundingVolume = bounds.oriented_box();
    let sphere = bounds.bounding_sphere();
    let sphere: &dyn TileBoundingVolume = &sphere;

    for viewer in viewers(&bounds) {
        let (s, o, k) = (
            sphere.distance_to_point(&viewer),
            obb.distance_to_point(&viewer),
            kdop.distance_to_point(&viewer),
        );
        assert!(s <= o + 1e-6, "sphere {s} > box {o}");
        assert!(o <= k + 1e-6, "box {o} > k-DOP {k}");
    }
}

#[test]
fn coarse_classification_is_conservative() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 300.0);
    let volumes: [&dyn TileBoundingVolume; 2] = [bounds.oriented_box(), &bounds.bounding_sphere()];
    let up = support::top_normal(&bounds);

    let mut planes = Vec::new();
    for offset in [-60_000.0, -5_000.0, 0.0, 5_000.0, 60_000.0] {
        for normal in [up, support::side_normal(&bounds, 1), (up + support::side_normal(&bounds, 2)).normalize()] {
            let plane = Plane::from_point_normal(&(bounds.center() + normal * offset), normal);
            planes.push(plane);
            planes.push(plane.flipped());
        }
    }

    for plane in &planes {
        let exact = bounds.intersect_plane(plane);
        for coarse in volumes {
            match coarse.intersect_plane(plane) {
                Intersect::Inside => assert_eq!(exact, Intersect::Inside),
                Intersect::Outside => assert_eq!(exact, Intersect::Outside),
                Intersect::Intersecting => {},
            }
        }
    }
}

#[test]
fn bounding_volume_is_the_volume_itself() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 100.0);
    let viewer = bounds.center() + support::top_normal(&bounds) * 750.0;
    let volume = bounds.bounding_volume();

    assert_eq!(volume.distance_to_point(&viewer), bounds.distance_to_point(&viewer));
    assert_eq!(volume.bounding_sphere(), bounds.bounding_sphere());
    let top = bounds.planes()[0];
    assert_eq!(volume.intersect_plane(&top), bounds.intersect_plane(&top));
}

#[test]
fn sphere_as_a_volume() {
    let sphere = BoundingSphere::new(Point3::new(10.0, 0.0, 0.0), 2.0);
    assert_eq!(TileBoundingVolume::distance_to_point(&sphere, &Point3::new(10.0, 1.0, 0.0)), 0.0);
    assert!(support::approx_eq(
        TileBoundingVolume::distance_to_point(&sphere, &Point3::new(15.0, 0.0, 0.0)),
        3.0,
        1e-12
    ));

    let x = Vector3::x();
    let through = Plane::new(x, -10.0);
    assert_eq!(sphere.intersect_plane(&through), Intersect::Intersecting);
    assert_eq!(sphere.intersect_plane(&Plane::new(x, -20.0)), Intersect::Outside);
    assert_eq!(sphere.intersect_plane(&Plane::new(x, 0.0)), Intersect::Inside);
}

#[test]
fn box_as_a_volume() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(4.0, 2.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(4.0, 0.0, 1.0),
        Point3::new(4.0, 2.0, 1.0),
        Point3::new(0.0, 2.0, 1.0),
    ];
    let obb = OrientedBox::from_points(&points);
    let volume: &dyn TileBoundingVolume = &obb;

    assert!(support::approx_eq(volume.distance_to_point(&Point3::new(2.0, 1.0, 0.5)), 0.0, 1e-9));
    assert!(support::approx_eq(volume.distance_to_point(&Point3::new(7.0, 1.0, 0.5)), 3.0, 1e-9));

    let sphere = volume.bounding_sphere();
    assert!(support::approx_eq(sphere.radius(), (16.0_f64 + 4.0 + 1.0).sqrt() / 2.0, 1e-9));
    for p in &points {
        assert!((p - sphere.center()).norm() <= sphere.radius() + 1e-9);
    }
}
