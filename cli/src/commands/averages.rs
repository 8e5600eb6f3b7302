use anyhow::Result;
use landswap::{average_area_by_region, average_area_with_adjacency, build_parcel_graph};
use serde_json::json;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::AveragesArgs) -> Result<()> {
    let parcels = super::load_parcels(&args.input)?;
    let graph = build_parcel_graph(&parcels);

    let report = json!({
        "region": args.region,
        "average_area": average_area_by_region(&parcels, args.region),
        "average_area_with_adjacency": average_area_with_adjacency(&parcels, &graph, args.region),
    });

    super::emit(args.output.as_deref(), &report)
}
