use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::{
    config::AnalysisConfig,
    exchange::{suggest_exchanges, Suggestion},
    graph::{build_owner_graph, build_parcel_graph, AdjacencyGraph},
    merge::merge_adjacent,
    metrics::average_area_by_region,
    parcel::{OwnerId, Parcel, ParcelId},
};

/// All intermediate products of one analysis run. Nothing here outlives the
/// run; a new `Analysis` is built for every input set.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: AnalysisConfig,
    pub parcels: Vec<Parcel>,
    pub parcel_graph: AdjacencyGraph<ParcelId>,
    pub owner_graph: AdjacencyGraph<OwnerId>,
    pub merged: Vec<Parcel>,
    pub merged_graph: AdjacencyGraph<ParcelId>,
    pub suggestions: Vec<Suggestion>,
}

/// Serializable summary handed to reporting.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub config: &'a AnalysisConfig,
    pub parcel_count: usize,
    pub merged_count: usize,
    pub average_area: BTreeMap<String, f64>,
    pub average_area_merged: BTreeMap<String, f64>,
    pub merged: &'a [Parcel],
    pub merged_graph: &'a AdjacencyGraph<ParcelId>,
    pub suggestions: &'a [Suggestion],
}

impl Analysis {
    /// Run the full pipeline: adjacency, merging, then exchange suggestions.
    pub fn run(parcels: &[Parcel], config: &AnalysisConfig) -> Self {
        let parcels = parcels.iter().map(Parcel::closed).collect::<Vec<_>>();

        let parcel_graph = build_parcel_graph(&parcels);
        let owner_graph = build_owner_graph(&parcels);
        info!(
            parcels = parcels.len(),
            parcel_edges = parcel_graph.edge_count(),
            owners = owner_graph.node_count(),
            "[analysis] built adjacency graphs"
        );

        let merged = merge_adjacent(&parcels, &parcel_graph, config.region);
        let merged_graph = build_parcel_graph(&merged);
        info!(merged = merged.len(), merged_edges = merged_graph.edge_count(), "[analysis] merged holdings");

        let suggestions = suggest_exchanges(&merged, &merged_graph, Some(&owner_graph), &config.exchange_options());
        info!(suggestions = suggestions.len(), "[analysis] ranked exchanges");

        Self { config: *config, parcels, parcel_graph, owner_graph, merged, merged_graph, suggestions }
    }

    /// Summary of this run for serialization.
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            config: &self.config,
            parcel_count: self.parcels.len(),
            merged_count: self.merged.len(),
            average_area: average_area_by_region(&self.parcels, self.config.region),
            average_area_merged: average_area_by_region(&self.merged, self.config.region),
            merged: &self.merged,
            merged_graph: &self.merged_graph,
            suggestions: &self.suggestions,
        }
    }
}
