use anyhow::Result;
use landswap::{project_for_display, Reprojector};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ExportArgs) -> Result<()> {
    let parcels = super::load_parcels(&args.input)?;

    let reprojector = Reprojector::madeira_to_wgs84()?;
    let projected = project_for_display(&parcels, &reprojector, args.limit)?;
    tracing::info!(parcels = projected.len(), "[export] projected parcels to WGS84");

    super::emit(args.output.as_deref(), &projected)
}
