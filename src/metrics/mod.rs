mod owner;
mod region;

pub use owner::{owner_metrics, OwnerMetrics};
pub use region::{average_area_by_region, average_area_with_adjacency};
