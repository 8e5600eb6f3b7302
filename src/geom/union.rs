use geo::{BooleanOps, CoordsIter, LineString, MultiPolygon};
use tracing::warn;

use super::{close_ring, exterior_ring, to_polygon};

/// Geometric union of all rings. `None` if there is nothing to union or the
/// result is empty or contains non-finite coordinates.
pub fn union_all<'a>(rings: impl IntoIterator<Item = &'a LineString<f64>>) -> Option<MultiPolygon<f64>> {
    let merged = rings.into_iter()
        .map(|ring| MultiPolygon::new(vec![to_polygon(ring)]))
        .reduce(|acc, shape| acc.union(&shape))?;

    let valid = !merged.0.is_empty()
        && merged.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite());
    valid.then_some(merged)
}

/// Outline of the union of `rings`.
///
/// A single ring is returned closed. For several rings, the exterior ring of
/// the union's first polygon is used; when the union is empty or invalid the
/// first ring is kept unmodified.
pub fn merge_boundaries(rings: &[&LineString<f64>]) -> LineString<f64> {
    match rings {
        [] => LineString::new(vec![]),
        [only] => close_ring(only),
        [first, ..] => union_all(rings.iter().copied())
            .and_then(|shape| exterior_ring(&shape))
            .unwrap_or_else(|| {
                warn!(rings = rings.len(), "polygon union failed, keeping first boundary");
                (*first).clone()
            }),
    }
}
