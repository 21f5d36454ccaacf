// main.rs
//
// Minimal walk through the crate: build the k-DOP for one S2 cell and query it.
//
//     s2cell-kdop [token] [minimum_height] [maximum_height]

use s2cell_kdop::{Intersect, S2CellBounds, S2CellBoundsOptions, TileBoundingVolume};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let token = args.next().unwrap_or_else(|| "89c25".to_string());
    let minimum_height = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.0);
    let maximum_height = args.next().and_then(|a| a.parse().ok()).unwrap_or(100.0);

    let options = S2CellBoundsOptions::new(token.as_str()).with_heights(minimum_height, maximum_height);
    let bounds = match S2CellBounds::new(&options) {
        Ok(bounds) => bounds,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    println!("cell {token}, heights {minimum_height}..{maximum_height}");
    for (i, plane) in bounds.planes().iter().enumerate() {
        println!("  plane {i}: n = {:?}, d = {:.3}", plane.normal.as_slice(), plane.distance);
    }
    for (i, v) in bounds.vertices().iter().enumerate() {
        println!("  vertex {i}: {:.3} {:.3} {:.3}", v.x, v.y, v.z);
    }

    // A viewer 1 km above the top face
    let up = bounds.planes()[0].normal;
    let viewer = bounds.center() + up * (1000.0 + (maximum_height - minimum_height) * 0.5);
    println!("distance from viewer: {:.3}", bounds.distance_to_point(&viewer));

    let volume: &dyn TileBoundingVolume = bounds.bounding_volume();
    println!("same, through the trait: {:.3}", volume.distance_to_point(&viewer));

    let sphere = bounds.bounding_sphere();
    println!("bounding sphere radius: {:.3}", sphere.radius());
    println!("coarse box distance: {:.3}", bounds.oriented_box().distance_to_point(&viewer));

    // The top plane itself puts every bottom vertex behind it
    match bounds.intersect_plane(&bounds.planes()[0]) {
        Intersect::Inside => println!("top plane: inside"),
        Intersect::Outside => println!("top plane: outside"),
        Intersect::Intersecting => println!("top plane: intersecting"),
    }

    ExitCode::SUCCESS
}
