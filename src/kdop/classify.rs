use super::S2CellBounds;
use crate::plane::{Intersect, Plane};

impl S2CellBounds {
    /// Classify the volume against `plane` by letting the eight vertices vote.
    ///
    /// A vertex exactly on the plane counts as being on the normal side. Since
    /// the volume is the convex hull of its vertices the vote is exact:
    /// * all on the normal side => [`Intersect::Inside`]
    /// * all on the other side => [`Intersect::Outside`]
    /// * otherwise => [`Intersect::Intersecting`]
    pub fn intersect_plane(&self, plane: &Plane) -> Intersect {
        let mut positive = 0;
        let mut negative = 0;
        for vertex in &self.vertices {
            if plane.signed_distance(vertex) < 0.0 {
                negative += 1;
            } else {
                positive += 1;
            }
        }

        if positive == self.vertices.len() {
            Intersect::Inside
        } else if negative == self.vertices.len() {
            Intersect::Outside
        } else {
            Intersect::Intersecting
        }
    }
}
