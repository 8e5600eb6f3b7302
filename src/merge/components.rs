use ahash::AHashMap;
use tracing::debug;

use crate::{geom, graph::AdjacencyGraph, parcel::{Parcel, ParcelId, RegionLevel}};

/// Partition `parcels` into connected components of same-owner, same-region
/// neighbors, returned as lists of input positions.
///
/// Seeds are taken in input order; each component starts with its seed.
/// Neighbor ids that are not in `parcels` are ignored.
pub fn merge_components(
    parcels: &[Parcel],
    graph: &AdjacencyGraph<ParcelId>,
    level: RegionLevel,
) -> Vec<Vec<usize>> {
    // Dense renumbering of parcel ids, so visited flags can live in a flat vector.
    let index: AHashMap<ParcelId, usize> = parcels.iter().enumerate()
        .map(|(i, parcel)| (parcel.id, i))
        .collect();

    let mut visited = vec![false; parcels.len()];
    let mut stack = Vec::new();
    let mut components = Vec::new();

    for (seed_idx, seed) in parcels.iter().enumerate() {
        if visited[seed_idx] { continue }

        let mut members = Vec::new();
        stack.push(seed_idx);

        while let Some(current) = stack.pop() {
            if visited[current] { continue }
            visited[current] = true;
            members.push(current);

            let Some(neighbors) = graph.neighbors(parcels[current].id) else { continue };
            stack.extend(
                neighbors.iter()
                    .filter_map(|id| index.get(id).copied())
                    .filter(|&next| {
                        !visited[next]
                            && parcels[next].owner_id == seed.owner_id
                            && parcels[next].same_region(seed, level)
                    })
            );
        }

        components.push(members);
    }

    components
}

/// Collapse each connected component of same-owner, same-region neighbors into
/// one parcel.
///
/// The merged parcel copies the seed's identity, owner, regions and perimeter;
/// its area is the sum of the members' areas and its boundary is the exterior
/// ring of their union (or the seed's ring when the union fails). Components of
/// one parcel come back unchanged apart from ring closing.
pub fn merge_adjacent(
    parcels: &[Parcel],
    graph: &AdjacencyGraph<ParcelId>,
    level: RegionLevel,
) -> Vec<Parcel> {
    let merged = merge_components(parcels, graph, level).into_iter()
        .map(|members| {
            let seed = &parcels[members[0]];
            let area = members.iter().map(|&i| parcels[i].area).sum();
            let rings = members.iter().map(|&i| &parcels[i].boundary).collect::<Vec<_>>();

            Parcel {
                area,
                boundary: geom::merge_boundaries(&rings),
                ..seed.clone()
            }
        })
        .collect::<Vec<_>>();

    debug!(parcels = parcels.len(), merged = merged.len(), level = %level, "merged adjacent parcels");

    merged
}
