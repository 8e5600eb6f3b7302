use geo::Rect;
use rstar::{RTree, AABB};

use super::BoundingBox;

/// Bulk-loaded R-tree over bounding boxes, used only to prune intersection candidates.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    rtree: RTree<BoundingBox>,
}

impl SpatialIndex {
    /// Bulk-load `(idx, bbox)` entries. `idx` is returned verbatim by `query`.
    pub fn new(boxes: impl IntoIterator<Item = (usize, Rect<f64>)>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                boxes.into_iter()
                    .map(|(idx, bbox)| BoundingBox::new(idx, bbox))
                    .collect()
            ),
        }
    }

    /// Number of indexed boxes.
    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    /// Check if the index holds no boxes.
    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Indices of all entries whose box overlaps `rect`. Boxes that only share
    /// an edge or a corner count as overlapping.
    pub fn query(&self, rect: &Rect<f64>) -> impl Iterator<Item = usize> + '_ {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        self.rtree.locate_in_envelope_intersecting(&envelope).map(|entry| entry.idx())
    }
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(coord! { x: x0, y: y0 }, coord! { x: x1, y: y1 })
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> { v.sort_unstable(); v }

    #[test]
    fn empty_index_returns_nothing() {
        let index = SpatialIndex::new(std::iter::empty());
        assert!(index.is_empty());
        assert_eq!(index.query(&rect(0.0, 0.0, 1.0, 1.0)).count(), 0);
    }

    #[test]
    fn query_includes_touching_and_excludes_disjoint() {
        let index = SpatialIndex::new([
            (0, rect(0.0, 0.0, 1.0, 1.0)),
            (1, rect(1.0, 0.0, 2.0, 1.0)),   // shares an edge with 0
            (2, rect(2.0, 1.0, 3.0, 2.0)),   // shares only a corner with 1
            (3, rect(10.0, 10.0, 11.0, 11.0)),
        ]);

        assert_eq!(index.len(), 4);
        assert_eq!(sorted(index.query(&rect(0.0, 0.0, 1.0, 1.0)).collect()), vec![0, 1]);
        assert_eq!(sorted(index.query(&rect(1.0, 0.0, 2.0, 1.0)).collect()), vec![0, 1, 2]);
        assert_eq!(sorted(index.query(&rect(10.5, 10.5, 10.6, 10.6)).collect()), vec![3]);
    }
}
