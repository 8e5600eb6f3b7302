mod components;

pub use components::{merge_adjacent, merge_components};
