mod support;

use nalgebra::Vector3;
use s2cell_kdop::{Intersect, Plane, kdop::TOP};

#[test]
fn plane_far_above_is_outside() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 100.0);
    let up = support::top_normal(&bounds);
    let far = Plane::from_point_normal(&(bounds.center() + up * 100_000.0), up);

    assert_eq!(bounds.intersect_plane(&far), Intersect::Outside);
    assert_eq!(bounds.intersect_plane(&far.flipped()), Intersect::Inside);
}

#[test]
fn top_plane_nudged_either_way() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 100.0);
    let top = bounds.planes()[TOP];

    let above = Plane::new(top.normal, top.distance - 1e-3);
    assert_eq!(bounds.intersect_plane(&above), Intersect::Outside);

    let below = Plane::new(top.normal, top.distance + 1e-3);
    assert_eq!(bounds.intersect_plane(&below), Intersect::Intersecting);
}

#[test]
fn flipped_top_plane_nudged_either_way() {
    let bounds = support::bounds(support::NYC_TOKEN, 0.0, 100.0);
    let flipped = bounds.planes()[TOP].flipped();

    let above = Plane::new(flipped.normal, flipped.distance + 1e-3);
    assert_eq!(bounds.intersect_plane(&above), Intersect::Inside);

    let below = Plane::new(flipped.normal, flipped.distance - 1e-3);
    assert_eq!(bounds.intersect_plane(&below), Intersect::Intersecting);
}

#[test]
fn plane_through_the_center_intersects() {
    for token in support::TOKENS {
        let bounds = support::bounds(token, 0.0, 500.0);
        let sideways = support::side_normal(&bounds, 0);
        let up = support::top_normal(&bounds);
        for normal in [sideways, -sideways, up, -up] {
            let plane = Plane::from_point_normal(&bounds.center(), normal);
            assert_eq!(bounds.intersect_plane(&plane), Intersect::Intersecting, "{token}");
        }
    }
}

#[test]
fn own_side_planes_keep_the_volume_behind_them() {
    let bounds = support::bounds("89c259", -10.0, 10.0);
    for k in 0..4 {
        let side = support::side_normal(&bounds, k);
        let moved_out = Plane::from_point_normal(&(bounds.faces()[2 + k][0] + side * 1.0), side);
        assert_eq!(bounds.intersect_plane(&moved_out), Intersect::Outside);
        assert_eq!(bounds.intersect_plane(&moved_out.flipped()), Intersect::Inside);
    }
}

#[test]
fn vertex_exactly_on_the_plane_counts_as_positive() {
    for token in support::TOKENS {
        let bounds = support::bounds(token, 0.0, 100.0);
        let max_x = bounds.vertices().iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max);
        let plane = Plane::new(Vector3::x(), -max_x);

        let on_plane = bounds.vertices().iter().filter(|v| plane.signed_distance(v) == 0.0).count();
        assert!(on_plane >= 1, "{token}");
        // touching at a vertex is not enough to be outside
        assert_eq!(bounds.intersect_plane(&plane), Intersect::Intersecting, "{token}");
    }
}
