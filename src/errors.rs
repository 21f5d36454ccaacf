//! Construction errors

/// Everything that can go wrong while building a bounding volume.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    /// (InvalidArgument) A missing, malformed or invalid cell token
    #[error("(InvalidArgument) {0}")]
    InvalidArgument(String),
    /// (DegenerateGeometry) Zero-length edges, a point at the ellipsoid
    /// center, or planes too close to parallel to intersect
    #[error("(DegenerateGeometry) {0}")]
    DegenerateGeometry(String),
}

// CellGeometry::from_token "S2 cell token is empty"
// CellGeometry::from_token "S2 cell token '{}' is malformed"
// CellGeometry::from_token "S2 cell token '{}' is invalid"
// Plane::intersect_three "planes do not meet in a single point (det = {})"
// planes::side_plane "side {} has a zero-length normal"
// planes::lift "{} {:?} is at the ellipsoid center"
