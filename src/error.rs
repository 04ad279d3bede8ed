use thiserror::Error;

/// Errors raised when roadmap data cannot be loaded.
///
/// This is the "data unavailable" condition: callers decide how to degrade,
/// the library never substitutes made-up blocks for a failed load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read roadmap data from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roadmap JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Roadmap data unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when converting a custom user format into a `RoadmapDefinition`.
#[derive(Error, Debug, Clone)]
pub enum RecordConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while interpreting a path-finding request at the wire boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Start and end parameters are required")]
    MissingEndpoint,

    #[error("Depth '{0}' is not an integer")]
    InvalidDepth(String),

    #[error("Depth {0} is out of range: use -1 for unbounded or a non-negative hop count")]
    DepthOutOfRange(i64),

    #[error("No such block: '{0}'")]
    UnknownBlock(String),

    #[error("Unknown sort criteria '{0}': expected time, cost or steps")]
    InvalidSort(String),
}

/// A path referenced a block that the graph does not contain.
///
/// Paths produced by the enumerator only follow valid edges, so this signals
/// a corrupted data model rather than a missing route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Internal fault: block '{block_id}' at position {position} of the path is not in the graph")]
    UnknownBlock { block_id: String, position: usize },
}

/// Errors that abort a guarded search before it has explored every branch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search aborted after {expanded} node expansions (budget exhausted, {found} paths found so far)")]
    BudgetExhausted { expanded: usize, found: usize },

    #[error("Search cancelled after {expanded} node expansions ({found} paths found so far)")]
    Cancelled { expanded: usize, found: usize },
}

/// Errors that can occur while saving or loading a graph artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Unsupported artifact version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
}
