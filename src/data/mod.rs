mod model;
mod sample;

pub use model::{DEFAULT_DEPTH, PathQuery, PathResponse, SubgraphResponse, handle_path_query};
pub use sample::sample_roadmap;
