pub mod averages;
pub mod export;
pub mod graph;
pub mod merge;
pub mod suggest;

use std::path::Path;

use anyhow::Result;
use landswap::{read_parcels_csv, to_json_string, write_json, Parcel};
use serde::Serialize;
use tracing::info;

/// Read the registry, logging how many rows were rejected.
pub(crate) fn load_parcels(path: &Path) -> Result<Vec<Parcel>> {
    let import = read_parcels_csv(path)?;
    info!(path = %path.display(), parcels = import.parcels.len(), skipped = import.skipped, "loaded parcel registry");
    Ok(import.parcels)
}

/// Write JSON to `output`, or to stdout when no file is given.
pub(crate) fn emit<T: Serialize + ?Sized>(output: Option<&Path>, value: &T) -> Result<()> {
    match output {
        Some(path) => {
            write_json(path, value)?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", to_json_string(value)?),
    }
    Ok(())
}
