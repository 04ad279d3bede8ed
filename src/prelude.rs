//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! roadmap crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use roadmap::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let definition = RoadmapDefinition::from_file("path/to/roadmap.json")?;
//! let graph = GraphBuilder::from_definition(definition)?.build();
//!
//! let terminals = find_terminal(&graph);
//! let (start, end) = (&terminals.starts[0].id, &terminals.ends[0].id);
//!
//! let paths = enumerate(&graph, start, end, MaxDepth::Hops(5));
//! for result in describe_paths(&graph, paths)? {
//!     println!("{} ({} months)", result.formatted, result.total_time);
//! }
//! # Ok(())
//! # }
//! ```

// Records and conversion
pub use crate::record::{
    BlockRecord, ConnectionRecord, GraphArtifact, IntoRoadmap, RoadmapDefinition,
};

// Graph building and inspection
pub use crate::graph::{Block, BlockId, Graph, GraphBuilder, Terminals, find_terminal};

// Search
pub use crate::search::{CancelToken, MaxDepth, Path, PathFinder, enumerate};

// Metrics, formatting and ranking
pub use crate::report::{
    PathFormatter, PathMetrics, PathResult, SortCriteria, describe_paths, rank,
};

// Wire shapes
pub use crate::data::{PathQuery, PathResponse, SubgraphResponse, handle_path_query};

// Presentation
pub use crate::category::{CategoryStyle, IconKey, category_style};

// Error types
pub use crate::error::{
    ArtifactError, LoadError, PathError, QueryError, RecordConversionError, SearchError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
