mod bbox;
mod index;
mod ring;
mod union;

use bbox::BoundingBox;
pub use index::SpatialIndex;
pub use ring::{bounding_box, boundaries_intersect, close_ring, exterior_ring, to_polygon};
pub use union::{merge_boundaries, union_all};
