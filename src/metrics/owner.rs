use ahash::AHashMap;

use crate::parcel::{OwnerId, Parcel};

/// Aggregate holding figures for one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerMetrics<'a> {
    pub owner_id: OwnerId,
    pub total_area: f64,
    pub parcel_count: usize,
    pub average_area: f64,
    /// The owner's parcels, in input order.
    pub parcels: Vec<&'a Parcel>,
}

impl<'a> OwnerMetrics<'a> {
    fn new(owner_id: OwnerId) -> Self {
        Self { owner_id, total_area: 0.0, parcel_count: 0, average_area: 0.0, parcels: Vec::new() }
    }

    fn push(&mut self, parcel: &'a Parcel) {
        self.total_area += parcel.area;
        self.parcel_count += 1;
        self.average_area = self.total_area / self.parcel_count as f64;
        self.parcels.push(parcel);
    }
}

/// Group `parcels` by owner and compute per-owner totals.
pub fn owner_metrics(parcels: &[Parcel]) -> AHashMap<OwnerId, OwnerMetrics<'_>> {
    let mut metrics: AHashMap<OwnerId, OwnerMetrics<'_>> = AHashMap::new();
    for parcel in parcels {
        metrics.entry(parcel.owner_id)
            .or_insert_with(|| OwnerMetrics::new(parcel.owner_id))
            .push(parcel);
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: u64, owner_id: OwnerId, area: f64) -> Parcel {
        Parcel::new(id, owner_id, ["A", "M", "I"], area, 0.0, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])
    }

    #[test]
    fn groups_by_owner() {
        let parcels = [parcel(1, 1, 100.0), parcel(2, 1, 200.0), parcel(3, 2, 400.0)];
        let metrics = owner_metrics(&parcels);

        assert_eq!(metrics.len(), 2);

        let first = &metrics[&1];
        assert_eq!(first.total_area, 300.0);
        assert_eq!(first.parcel_count, 2);
        assert_eq!(first.average_area, 150.0);
        assert_eq!(first.parcels.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        let second = &metrics[&2];
        assert_eq!(second.average_area, 400.0);
        assert_eq!(second.parcel_count, 1);
    }

    #[test]
    fn empty_input_has_no_owners() {
        assert!(owner_metrics(&[]).is_empty());
    }
}
