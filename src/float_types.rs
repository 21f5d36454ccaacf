// Our Real scalar type. Geodetic coordinates are in the millions of metres,
// so the crate is f64 only.
pub type Real = f64;

pub use parry3d_f64 as parry3d;

use core::str::FromStr;
use std::sync::OnceLock;

/// Threshold below which lengths, determinants and normal magnitudes are
/// treated as degenerate. Also the residual at which the geodetic surface
/// projection stops iterating.
pub const EPSILON: Real = 1e-12;

const DEFAULT_TOLERANCE: Real = 1e-6;

/// Slack, in metres, a point may sit outside a bounding plane and still
/// count as inside during distance queries. Fixed on first use.
static TOLERANCE: OnceLock<Real> = OnceLock::new();

/// The plane-side slack in effect.
///
/// Resolved once: a value passed to [`set_tolerance`] earlier wins, then
/// `S2CELL_KDOP_TOLERANCE` captured at compile time, then `1e-6`.
pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("S2CELL_KDOP_TOLERANCE")
            .and_then(|raw| Real::from_str(raw).ok())
            .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
    })
}

/// Pin the plane-side slack before the first query.
///
/// Returns `false` when the tolerance was already fixed, either by an earlier
/// call or by a query that ran first; the value in effect is then unchanged.
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE.set(value.max(Real::EPSILON)).is_ok()
}
