use anyhow::Result;
use landswap::{build_parcel_graph, merge_adjacent};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::MergeArgs) -> Result<()> {
    let parcels = super::load_parcels(&args.input)?;

    let graph = build_parcel_graph(&parcels);
    let merged = merge_adjacent(&parcels, &graph, args.region);
    tracing::info!(before = parcels.len(), after = merged.len(), region = %args.region, "[merge] merged holdings");

    super::emit(args.output.as_deref(), &merged)
}
