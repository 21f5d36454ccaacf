//! Tight **k-DOP** bounding volumes for height-extruded [S2](https://s2geometry.io/) cells,
//! built to drive tile visibility and priority in spatial-data streaming.
//!
//! A cell on the ellipsoid, extruded between a minimum and maximum height, is
//! enclosed by six planes (top, bottom and one per cell edge). The resulting
//! [`S2CellBounds`] answers two questions per frame:
//! - how far is the viewer from the volume ([`S2CellBounds::distance_to_point`])
//! - which side of a clipping plane is it on ([`S2CellBounds::intersect_plane`])
//!
//! ```no_run
//! use nalgebra::Point3;
//! use s2cell_kdop::{S2CellBounds, S2CellBoundsOptions};
//!
//! let bounds = S2CellBounds::new(&S2CellBoundsOptions::new("89c25").with_heights(0.0, 100.0))?;
//! let distance = bounds.distance_to_point(&Point3::new(1_330_000.0, -4_660_000.0, 4_140_000.0));
//! # Ok::<(), s2cell_kdop::errors::BoundsError>(())
//! ```
//!
//! # Features
//! #### Optional
//! - **serde**: `Serialize`/`Deserialize` for planes, ellipsoids and construction options

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod cell;
pub mod ellipsoid;
pub mod errors;
pub mod float_types;
pub mod kdop;
pub mod oriented_box;
pub mod plane;
pub mod traits;

pub use cell::CellGeometry;
pub use ellipsoid::{Ellipsoid, Geographic};
pub use errors::BoundsError;
pub use kdop::{S2CellBounds, S2CellBoundsOptions};
pub use oriented_box::OrientedBox;
pub use plane::{Intersect, Plane};
pub use traits::TileBoundingVolume;
