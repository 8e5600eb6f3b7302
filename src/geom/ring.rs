use geo::{BoundingRect, Intersects, LineString, MultiPolygon, Polygon, Rect};

/// Return `ring` with its first point appended if it is not already closed.
/// Empty rings are returned as-is.
pub fn close_ring(ring: &LineString<f64>) -> LineString<f64> {
    let mut closed = ring.clone();
    closed.close();
    closed
}

/// Axis-aligned bounding box of a ring, `None` if the ring is empty.
#[inline]
pub fn bounding_box(ring: &LineString<f64>) -> Option<Rect<f64>> {
    ring.bounding_rect()
}

/// Polygon (without holes) bounded by `ring`.
#[inline]
pub fn to_polygon(ring: &LineString<f64>) -> Polygon<f64> {
    Polygon::new(close_ring(ring), vec![])
}

/// True if the two polygons share at least one point: a common vertex, a
/// common edge, or an overlapping interior.
pub fn boundaries_intersect(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    a.intersects(b)
}

/// Exterior ring of the first polygon in `shape`, closed.
pub fn exterior_ring(shape: &MultiPolygon<f64>) -> Option<LineString<f64>> {
    shape.0.first()
        .map(|polygon| close_ring(polygon.exterior()))
        .filter(|ring| !ring.0.is_empty())
}

#[cfg(test)]
mod tests {
    use geo::{coord, Coord};

    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        to_polygon(&LineString::from(vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]))
    }

    #[test]
    fn close_ring_appends_first_point() {
        let open = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let closed = close_ring(&open);
        assert_eq!(closed.0.len(), 5);
        assert_eq!(closed.0.last(), Some(&Coord { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn close_ring_does_not_duplicate_closing_point() {
        let closed = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(close_ring(&closed), closed);
        assert!(close_ring(&LineString::new(vec![])).0.is_empty());
    }

    #[test]
    fn bounding_box_spans_ring() {
        let ring = LineString::from(vec![(2.0, -1.0), (5.0, 3.0), (0.0, 1.0)]);
        let rect = bounding_box(&ring).unwrap();
        assert_eq!(rect.min(), coord! { x: 0.0, y: -1.0 });
        assert_eq!(rect.max(), coord! { x: 5.0, y: 3.0 });
        assert!(bounding_box(&LineString::new(vec![])).is_none());
    }

    #[test]
    fn intersection_detects_shared_edge_corner_and_overlap() {
        let a = square(0.0, 0.0, 1.0);
        assert!(boundaries_intersect(&a, &square(1.0, 0.0, 1.0)));  // shared edge
        assert!(boundaries_intersect(&a, &square(1.0, 1.0, 1.0)));  // shared corner
        assert!(boundaries_intersect(&a, &square(0.5, 0.5, 1.0)));  // overlap
        assert!(!boundaries_intersect(&a, &square(1.5, 0.0, 1.0))); // gap
    }

    #[test]
    fn intersection_requires_geometry_not_just_boxes() {
        // An L-shaped parcel whose bounding box covers the small square, but
        // whose boundary never reaches it.
        let l_shape = to_polygon(&LineString::from(vec![
            (0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0),
        ]));
        let inside_box = square(2.0, 2.0, 0.5);
        assert!(!boundaries_intersect(&l_shape, &inside_box));
    }

    #[test]
    fn exterior_ring_of_first_polygon() {
        let shape = MultiPolygon::new(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        let ring = exterior_ring(&shape).unwrap();
        assert!(ring.is_closed());
        assert_eq!(ring, square(0.0, 0.0, 1.0).exterior().clone());
        assert!(exterior_ring(&MultiPolygon::new(vec![])).is_none());
    }
}
