//! # Roadmap - Path Enumeration over Immigration Roadmaps
//!
//! **Roadmap** models an immigration journey as a directed graph of life and
//! legal statuses ("blocks") joined by transitions, each block carrying a time
//! and cost estimate. Given a start and a destination it enumerates every
//! simple route between them up to a hop limit, and rolls up the estimates of
//! each route so callers can rank them.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse block and connection rows into `BlockRecord`s and
//!     `ConnectionRecord`s, or implement `IntoRoadmap` for your own row types.
//! 2.  **Build**: `GraphBuilder` normalises the records into an immutable `Graph`,
//!     folding connections into each block's forward edges.
//! 3.  **Enumerate**: `search::enumerate` (or `PathFinder`, for a node budget or
//!     cancellation) returns all simple paths within the hop limit.
//! 4.  **Describe**: `report::describe_paths` sums time and cost per path and
//!     renders a label; `report::rank` orders the results.
//!
//! ## Quick Start
//!
//! ```rust
//! use roadmap::prelude::*;
//!
//! let definition = RoadmapDefinition {
//!     blocks: vec![
//!         BlockRecord::new("visitor", "Visitor", "Entry", 0.5, 100.0),
//!         BlockRecord::new("study", "Study", "Core", 12.0, 15000.0),
//!         BlockRecord::new("permit", "Work Permit Open", "Core", 2.0, 155.0),
//!     ],
//!     connections: vec![
//!         ConnectionRecord::new("visitor", "study"),
//!         ConnectionRecord::new("study", "permit"),
//!         ConnectionRecord::new("visitor", "permit"),
//!     ],
//! };
//!
//! let graph = GraphBuilder::from_definition(definition)?.build();
//! let paths = enumerate(&graph, "visitor", "permit", MaxDepth::Unbounded);
//! assert_eq!(paths.len(), 2);
//!
//! let mut results = describe_paths(&graph, paths)?;
//! rank(&mut results, SortCriteria::Time);
//! assert_eq!(results[0].formatted, "Visitor → Work Permit Open");
//! assert_eq!(results[0].total_time, 2.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod category;
pub mod data;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod record;
pub mod report;
pub mod search;

#[cfg(feature = "logging")]
pub mod logging;
