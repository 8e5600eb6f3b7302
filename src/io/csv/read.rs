//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, StringChunked}};
use regex::Regex;
use tracing::{debug, warn};

use crate::{geom, parcel::Parcel};

/// Coordinate pair inside WKT-like polygon text, e.g. `297564.65 3621571.68`.
const COORD_PATTERN: &str = r"(-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)\s+(-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)";

/// Parcels read from a registry file, plus the number of rows rejected.
#[derive(Debug, Clone, Default)]
pub struct ParcelImport {
    pub parcels: Vec<Parcel>,
    pub skipped: usize,
}

/// Reads a semicolon-separated parcel registry from `path`.
pub fn read_parcels_csv(path: &Path) -> Result<ParcelImport> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;
    parcels_from_dataframe(&df)
}

/// Reads a semicolon-separated parcel registry from a string.
pub fn parse_parcels_csv(csv: &str) -> Result<ParcelImport> {
    let df = csv_options()
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    parcels_from_dataframe(&df)
}

/// Every column is read as a string; numbers are parsed per row so that a
/// single malformed value only rejects its own row.
fn csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|po| po.with_separator(b';'))
        .with_infer_schema_length(Some(0))
}

/// Registry columns, located by normalised header name.
struct Columns<'a> {
    object_id: &'a StringChunked,
    owner: &'a StringChunked,
    area: &'a StringChunked,
    perimeter: &'a StringChunked,
    geometry: &'a StringChunked,
    parish: &'a StringChunked,
    municipality: &'a StringChunked,
    island: &'a StringChunked,
}

impl<'a> Columns<'a> {
    fn locate(df: &'a DataFrame) -> Result<Self> {
        Ok(Self {
            object_id: string_column(df, "objectid")?,
            owner: string_column(df, "owner")?,
            area: string_column(df, "shapearea")?,
            perimeter: string_column(df, "shapelength")?,
            geometry: string_column(df, "geometry")?,
            parish: string_column(df, "freguesia")?,
            municipality: string_column(df, "municipio")?,
            island: string_column(df, "ilha")?,
        })
    }
}

/// Header names compare case-insensitively and ignore underscores and spaces.
fn normalize_header(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let actual = df.get_column_names().into_iter()
        .find(|column| normalize_header(column.as_str()) == name)
        .ok_or_else(|| anyhow!("[io::csv::read] Missing required column: {name}"))?;
    df.column(actual.as_str())?
        .as_materialized_series()
        .str()
        .with_context(|| format!("[io::csv::read] Column {name} must be of type String"))
}

/// Convert registry rows into parcels, skipping (and logging) malformed rows.
fn parcels_from_dataframe(df: &DataFrame) -> Result<ParcelImport> {
    let columns = Columns::locate(df)?;
    let coords = Regex::new(COORD_PATTERN)?;

    let mut import = ParcelImport::default();
    for row in 0..df.height() {
        match parse_row(&columns, &coords, row) {
            Ok(parcel) => import.parcels.push(parcel),
            Err(reason) => {
                warn!(row, %reason, "[io::csv::read] skipping invalid parcel");
                import.skipped += 1;
            }
        }
    }

    debug!(parcels = import.parcels.len(), skipped = import.skipped, "[io::csv::read] parsed parcel registry");
    Ok(import)
}

fn parse_row(columns: &Columns<'_>, coords: &Regex, row: usize) -> Result<Parcel> {
    let id = parse_id(columns.object_id.get(row)).context("invalid OBJECTID")?;
    let owner_id = parse_id(columns.owner.get(row)).context("invalid OWNER")?;
    let area = parse_number(columns.area.get(row)).context("invalid Shape_Area")?;
    let perimeter = parse_number(columns.perimeter.get(row)).context("invalid Shape_Length")?;

    let boundary = parse_ring(columns.geometry.get(row).unwrap_or_default(), coords);
    if boundary.0.len() < 3 {
        return Err(anyhow!("geometry has {} points, expected at least 3", boundary.0.len()));
    }

    Ok(Parcel {
        id,
        owner_id,
        parish: parse_text(columns.parish.get(row)).context("blank Freguesia")?,
        municipality: parse_text(columns.municipality.get(row)).context("blank Municipio")?,
        island: parse_text(columns.island.get(row)).context("blank Ilha")?,
        area,
        perimeter,
        boundary: geom::close_ring(&boundary),
    })
}

fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

/// Non-negative finite number; a comma is accepted as decimal separator.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().replace(',', ".").parse::<f64>().ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

fn parse_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Extract the coordinate pairs of a WKT-like polygon, in order.
fn parse_ring(text: &str, coords: &Regex) -> LineString<f64> {
    coords.captures_iter(text)
        .filter_map(|caps| Some(Coord { x: caps[1].parse().ok()?, y: caps[2].parse().ok()? }))
        .collect()
}
