use std::collections::BTreeMap;

use crate::{graph::AdjacencyGraph, merge::merge_adjacent, parcel::{Parcel, ParcelId, RegionLevel}};

/// Mean parcel area per region value at `level`.
pub fn average_area_by_region(parcels: &[Parcel], level: RegionLevel) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for parcel in parcels {
        let entry = totals.entry(parcel.region(level)).or_insert((0.0, 0));
        entry.0 += parcel.area;
        entry.1 += 1;
    }

    totals.into_iter()
        .map(|(region, (total, count))| (region.to_string(), total / count as f64))
        .collect()
}

/// Mean effective holding size per region: contiguous same-owner parcels in the
/// same region count as one holding.
pub fn average_area_with_adjacency(
    parcels: &[Parcel],
    graph: &AdjacencyGraph<ParcelId>,
    level: RegionLevel,
) -> BTreeMap<String, f64> {
    average_area_by_region(&merge_adjacent(parcels, graph, level), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: ParcelId, owner_id: u64, area: f64, region: [&str; 3]) -> Parcel {
        Parcel::new(id, owner_id, region, area, 0.0,
            [(id as f64, 0.0), (id as f64 + 1.0, 0.0), (id as f64 + 1.0, 1.0), (id as f64, 1.0)])
    }

    fn sample() -> Vec<Parcel> {
        vec![
            parcel(1, 1, 100.0, ["A", "M1", "I2"]),
            parcel(2, 2, 400.0, ["A", "M2", "I1"]),
            parcel(3, 3, 200.0, ["B", "M2", "I2"]),
        ]
    }

    fn averages(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn average_by_each_level() {
        let parcels = sample();
        assert_eq!(average_area_by_region(&parcels, RegionLevel::Parish), averages(&[("A", 250.0), ("B", 200.0)]));
        assert_eq!(average_area_by_region(&parcels, RegionLevel::Municipality), averages(&[("M1", 100.0), ("M2", 300.0)]));
        assert_eq!(average_area_by_region(&parcels, RegionLevel::Island), averages(&[("I1", 400.0), ("I2", 150.0)]));
    }

    #[test]
    fn zero_areas_average_to_zero() {
        let parcels = sample().into_iter().map(|p| Parcel { area: 0.0, ..p }).collect::<Vec<_>>();
        assert_eq!(average_area_by_region(&parcels, RegionLevel::Parish), averages(&[("A", 0.0), ("B", 0.0)]));
    }

    #[test]
    fn empty_input_gives_empty_averages() {
        assert!(average_area_by_region(&[], RegionLevel::Municipality).is_empty());
        assert!(average_area_with_adjacency(&[], &AdjacencyGraph::new(), RegionLevel::Municipality).is_empty());
    }

    #[test]
    fn adjacency_merges_same_owner_holdings() {
        let parcels = vec![
            parcel(1, 1, 100.0, ["A", "M1", "I2"]),
            parcel(2, 1, 400.0, ["A", "M2", "I1"]),
            parcel(3, 2, 200.0, ["B", "M2", "I2"]),
        ];
        let graph: AdjacencyGraph<ParcelId> = [(1, 2)].into_iter().collect();

        assert_eq!(
            average_area_with_adjacency(&parcels, &graph, RegionLevel::Parish),
            averages(&[("A", 500.0), ("B", 200.0)]),
        );
    }

    #[test]
    fn adjacency_without_shared_owner_matches_plain_average() {
        let parcels = sample();
        let graph: AdjacencyGraph<ParcelId> = [(1, 2)].into_iter().collect();
        assert_eq!(
            average_area_with_adjacency(&parcels, &graph, RegionLevel::Parish),
            average_area_by_region(&parcels, RegionLevel::Parish),
        );
    }

    #[test]
    fn adjacency_across_regions_does_not_merge() {
        let parcels = vec![
            parcel(1, 1, 100.0, ["A", "M1", "I2"]),
            parcel(2, 1, 400.0, ["B", "M2", "I1"]),
            parcel(3, 2, 200.0, ["B", "M2", "I2"]),
        ];
        let graph: AdjacencyGraph<ParcelId> = [(1, 2)].into_iter().collect();
        assert_eq!(
            average_area_with_adjacency(&parcels, &graph, RegionLevel::Parish),
            averages(&[("A", 100.0), ("B", 300.0)]),
        );
    }
}
