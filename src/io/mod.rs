//! Ingestion and export around the analysis core.

mod csv;
mod display;
mod json;

pub use csv::{parse_parcels_csv, read_parcels_csv, ParcelImport};
pub use display::{project_for_display, DisplayParcel, Reprojector, MADEIRA_UTM_PROJ4, WGS84_PROJ4};
pub use json::{to_json_string, write_json};
