//! Parcel export for map display: reprojection from the registry CRS to WGS84.

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString};
use proj4rs::{proj::Proj as Proj4, transform::transform};
use serde::{Deserialize, Serialize};

use crate::parcel::{OwnerId, Parcel, ParcelId};

/// PROJ.4 definition of the Madeira registry coordinates (UTM zone 28N, International 1924).
pub const MADEIRA_UTM_PROJ4: &str = "+proj=utm +zone=28 +ellps=intl +units=m +no_defs";

/// PROJ.4 definition of WGS84 longitude/latitude.
pub const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// A parcel as consumed by the map front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayParcel {
    #[serde(rename = "objectId")]
    pub object_id: ParcelId,
    /// `[longitude, latitude]` pairs in degrees.
    pub geometry: Vec<[f64; 2]>,
    pub owner: OwnerId,
    pub freguesia: String,
    pub municipio: String,
}

/// Coordinate transform between two PROJ.4 definitions.
pub struct Reprojector {
    from: Proj4,
    to: Proj4,
    from_degrees: bool,
    to_degrees: bool,
}

/// proj4rs works in radians for geographic systems.
#[inline]
fn is_geographic(proj_string: &str) -> bool {
    proj_string.contains("+proj=longlat") || proj_string.contains("+proj=latlong")
}

impl Reprojector {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: Proj4::from_proj_string(from)
                .with_context(|| anyhow!("[io::display] failed to build source PROJ.4: {from}"))?,
            to: Proj4::from_proj_string(to)
                .with_context(|| anyhow!("[io::display] failed to build target PROJ.4: {to}"))?,
            from_degrees: is_geographic(from),
            to_degrees: is_geographic(to),
        })
    }

    /// Madeira registry coordinates to WGS84 degrees.
    pub fn madeira_to_wgs84() -> Result<Self> {
        Self::new(MADEIRA_UTM_PROJ4, WGS84_PROJ4)
    }

    pub fn project(&self, coord: Coord<f64>) -> Result<Coord<f64>> {
        let mut point = if self.from_degrees { (coord.x.to_radians(), coord.y.to_radians(), 0.0) }
        else { (coord.x, coord.y, 0.0) };

        transform(&self.from, &self.to, &mut point)
            .with_context(|| format!("[io::display] failed to project ({}, {})", coord.x, coord.y))?;

        Ok(if self.to_degrees { Coord { x: point.0.to_degrees(), y: point.1.to_degrees() } }
        else { Coord { x: point.0, y: point.1 } })
    }

    pub fn project_ring(&self, ring: &LineString<f64>) -> Result<Vec<[f64; 2]>> {
        ring.coords()
            .map(|&coord| self.project(coord).map(|c| [c.x, c.y]))
            .collect()
    }
}

/// Convert up to `limit` parcels (all when `None`) into display records.
pub fn project_for_display(parcels: &[Parcel], reprojector: &Reprojector, limit: Option<usize>) -> Result<Vec<DisplayParcel>> {
    parcels.iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|parcel| Ok(DisplayParcel {
            object_id: parcel.id,
            geometry: reprojector.project_ring(&parcel.boundary)
                .with_context(|| format!("[io::display] parcel {}", parcel.id))?,
            owner: parcel.owner_id,
            freguesia: parcel.parish.clone(),
            municipio: parcel.municipality.clone(),
        }))
        .collect()
}
