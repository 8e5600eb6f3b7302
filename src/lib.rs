#![doc = "Landswap: parcel adjacency, holding consolidation and land-exchange suggestions"]
mod analysis;
mod config;
mod exchange;
mod geom;
mod graph;
mod io;
mod merge;
mod metrics;
mod parcel;

#[doc(inline)]
pub use parcel::{OwnerId, Parcel, ParcelId, RegionLevel};

#[doc(inline)]
pub use geom::{bounding_box, boundaries_intersect, close_ring, exterior_ring, merge_boundaries, to_polygon, union_all, SpatialIndex};

#[doc(inline)]
pub use graph::{build_graph, build_graph_by, build_owner_graph, build_parcel_graph, AdjacencyGraph, NodeKey};

#[doc(inline)]
pub use merge::{merge_adjacent, merge_components};

#[doc(inline)]
pub use metrics::{average_area_by_region, average_area_with_adjacency, owner_metrics, OwnerMetrics};

#[doc(inline)]
pub use exchange::{suggest_exchanges, ExchangeOptions, Suggestion};

#[doc(inline)]
pub use config::AnalysisConfig;

#[doc(inline)]
pub use analysis::{Analysis, AnalysisReport};

#[doc(inline)]
pub use io::{
    parse_parcels_csv, project_for_display, read_parcels_csv, to_json_string, write_json,
    DisplayParcel, ParcelImport, Reprojector, MADEIRA_UTM_PROJ4, WGS84_PROJ4,
};
