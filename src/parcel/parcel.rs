use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::geom;
use super::RegionLevel;

/// Registry identifier of a parcel, unique within a working set.
pub type ParcelId = u64;

/// Identifier of the holder of one or more parcels.
pub type OwnerId = u64;

/// A single cadastral land unit, as delivered by ingestion.
///
/// `area` and `perimeter` come from the registry and are never recomputed
/// from `boundary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: ParcelId,
    pub owner_id: OwnerId,
    pub parish: String,
    pub municipality: String,
    pub island: String,
    pub area: f64,
    pub perimeter: f64,
    pub boundary: LineString<f64>,
}

impl Parcel {
    /// Build a parcel from a list of `(x, y)` points, closing the ring if needed.
    pub fn new(
        id: ParcelId,
        owner_id: OwnerId,
        region: [&str; 3],
        area: f64,
        perimeter: f64,
        boundary: impl IntoIterator<Item = (f64, f64)>,
    ) -> Self {
        let [parish, municipality, island] = region;
        Self {
            id,
            owner_id,
            parish: parish.to_string(),
            municipality: municipality.to_string(),
            island: island.to_string(),
            area,
            perimeter,
            boundary: geom::close_ring(
                &boundary.into_iter().map(|(x, y)| Coord { x, y }).collect(),
            ),
        }
    }

    /// Value of the chosen administrative level.
    #[inline]
    pub fn region(&self, level: RegionLevel) -> &str {
        match level {
            RegionLevel::Parish => &self.parish,
            RegionLevel::Municipality => &self.municipality,
            RegionLevel::Island => &self.island,
        }
    }

    /// True if both parcels are in the same region at `level`.
    #[inline]
    pub fn same_region(&self, other: &Parcel, level: RegionLevel) -> bool {
        self.region(level) == other.region(level)
    }

    /// Copy of this parcel with its boundary ring closed.
    pub fn closed(&self) -> Self {
        if self.boundary.is_closed() { return self.clone() }
        Self { boundary: geom::close_ring(&self.boundary), ..self.clone() }
    }
}
