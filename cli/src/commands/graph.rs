use anyhow::Result;
use landswap::{build_graph_by, NodeKey};

use crate::cli::GraphBy;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::GraphArgs) -> Result<()> {
    let parcels = super::load_parcels(&args.input)?;
    let key = match args.by {
        GraphBy::Parcel => NodeKey::Parcel,
        GraphBy::Owner => NodeKey::Owner,
    };

    let graph = build_graph_by(&parcels, key);
    tracing::info!(nodes = graph.node_count(), edges = graph.edge_count(), "[graph] built adjacency graph");

    super::emit(args.output.as_deref(), &graph)
}
