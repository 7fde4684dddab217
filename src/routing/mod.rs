//! Cost functions, the reference search and path reporting

pub mod dijkstra;
pub mod path;
pub mod path_details;
pub mod weighting;

pub use dijkstra::route;
pub use path::Path;
