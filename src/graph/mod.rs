mod build;
mod graph;

pub use build::{build_graph, build_graph_by, build_owner_graph, build_parcel_graph, NodeKey};
pub use graph::AdjacencyGraph;
