use geo::Polygon;
use tracing::debug;

use crate::{geom, geom::SpatialIndex, parcel::{OwnerId, Parcel, ParcelId}};
use super::AdjacencyGraph;

/// Attribute of a parcel used as the node key of an adjacency graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeKey {
    #[default]
    Parcel,
    Owner,
}

impl NodeKey {
    /// Key of `parcel` under this strategy.
    #[inline]
    pub fn of(&self, parcel: &Parcel) -> u64 {
        match self {
            NodeKey::Parcel => parcel.id,
            NodeKey::Owner => parcel.owner_id,
        }
    }
}

/// Build the adjacency graph of `parcels`, keyed by `key_of`.
///
/// Every parcel contributes a node. Two keys are joined when some pair of their
/// parcels touch or overlap; parcels mapping to the same key never produce an
/// edge. Candidate pairs are pruned with an R-tree over bounding boxes, so only
/// pairs whose boxes overlap are tested exactly.
pub fn build_graph<K, F>(parcels: &[Parcel], key_of: F) -> AdjacencyGraph<K>
where
    K: Ord + Copy,
    F: Fn(&Parcel) -> K,
{
    let mut graph = AdjacencyGraph::new();
    parcels.iter().for_each(|parcel| graph.add_node(key_of(parcel)));

    let shapes: Vec<Polygon<f64>> = parcels.iter()
        .map(|parcel| geom::to_polygon(&parcel.boundary))
        .collect();
    let boxes = parcels.iter()
        .map(|parcel| geom::bounding_box(&parcel.boundary))
        .collect::<Vec<_>>();

    let index = SpatialIndex::new(
        boxes.iter().enumerate().filter_map(|(i, bbox)| bbox.map(|bbox| (i, bbox)))
    );

    let mut tested = 0usize;
    for (i, bbox) in boxes.iter().enumerate() {
        let Some(bbox) = bbox else { continue };
        let key = key_of(&parcels[i]);

        for j in index.query(bbox) {
            if j <= i { continue } // check each unordered pair once
            let other = key_of(&parcels[j]);
            if other == key { continue }

            tested += 1;
            if geom::boundaries_intersect(&shapes[i], &shapes[j]) {
                graph.add_edge(key, other);
            }
        }
    }

    debug!(
        parcels = parcels.len(),
        indexed = index.len(),
        candidates = tested,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built adjacency graph"
    );

    graph
}

/// Build an adjacency graph using an enumerated key strategy.
pub fn build_graph_by(parcels: &[Parcel], key: NodeKey) -> AdjacencyGraph<u64> {
    build_graph(parcels, |parcel| key.of(parcel))
}

/// Parcel-level adjacency: nodes are parcel ids.
pub fn build_parcel_graph(parcels: &[Parcel]) -> AdjacencyGraph<ParcelId> {
    build_graph(parcels, |parcel| parcel.id)
}

/// Owner-level adjacency: nodes are owner ids, joined when any of their parcels touch.
pub fn build_owner_graph(parcels: &[Parcel]) -> AdjacencyGraph<OwnerId> {
    build_graph(parcels, |parcel| parcel.owner_id)
}
