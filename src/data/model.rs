use crate::error::{LoadError, QueryError};
use crate::graph::{Block, BlockId, Graph, find_terminal};
use crate::record::{BlockRecord, ConnectionRecord, RoadmapDefinition};
use crate::search::{self, MaxDepth, Path};
use serde::{Deserialize, Serialize};
use std::fs;

/// Hop limit applied when a request does not name one.
pub const DEFAULT_DEPTH: MaxDepth = MaxDepth::Hops(5);

fn default_depth() -> MaxDepth {
    DEFAULT_DEPTH
}

/// A path-finding request as it arrives over the wire.
///
/// `depth` may be an integer or a numeric string; `-1` means unbounded.
/// Endpoint ids are compared with surrounding whitespace removed, however the
/// query was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default = "default_depth")]
    pub depth: MaxDepth,
}

impl PathQuery {
    pub fn new(start: &str, end: &str, depth: MaxDepth) -> Self {
        Self {
            start: start.trim().to_string(),
            end: end.trim().to_string(),
            depth,
        }
    }

    /// Builds a query from string key/value pairs, such as decoded URL query parameters.
    /// Unrecognised keys are ignored.
    pub fn from_params<'a>(
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, QueryError> {
        let mut query = PathQuery::new("", "", DEFAULT_DEPTH);
        for (key, value) in params {
            match key {
                "start" => query.start = value.trim().to_string(),
                "end" => query.end = value.trim().to_string(),
                "depth" => query.depth = value.parse()?,
                _ => {}
            }
        }
        query.validate()?;
        Ok(query)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let query: PathQuery = serde_json::from_str(json)?;
        Ok(PathQuery::new(&query.start, &query.end, query.depth))
    }

    /// Both endpoints must be present.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(QueryError::MissingEndpoint);
        }
        Ok(())
    }

    /// Checks the endpoints against the graph's key set, so a typo can be
    /// reported as "no such block" rather than as an empty result.
    pub fn validate_against(&self, graph: &Graph) -> Result<(), QueryError> {
        self.validate()?;
        for id in [self.start.trim(), self.end.trim()] {
            if !graph.contains(id) {
                return Err(QueryError::UnknownBlock(id.to_string()));
            }
        }
        Ok(())
    }
}

/// Path-finding response: a bare JSON array of id arrays.
///
/// Carries no metrics; consumers compute those against their own graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathResponse(pub Vec<Path>);

impl PathResponse {
    pub fn paths(&self) -> &[Path] {
        &self.0
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Answers a path-finding request in-process.
///
/// Unknown endpoints are reported as errors here, at the boundary; the
/// enumerator itself would just return nothing.
pub fn handle_path_query(graph: &Graph, query: &PathQuery) -> Result<PathResponse, QueryError> {
    query.validate_against(graph)?;
    Ok(PathResponse(search::enumerate(
        graph,
        query.start.trim(),
        query.end.trim(),
        query.depth,
    )))
}

/// The part of a roadmap reachable from one block, in the shape the sub-graph
/// endpoint returns it.
///
/// `end_block_id` is set only when the sub-graph has exactly one sink.
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphResponse {
    pub parent_block_id: BlockId,
    pub start_block_id: BlockId,
    pub end_block_id: Option<BlockId>,
    pub blocks: Vec<Block>,
    pub connections: Vec<ConnectionRecord>,
}

impl SubgraphResponse {
    /// `None` when `id` is not in the graph.
    pub fn from_graph(graph: &Graph, id: &str) -> Option<Self> {
        let sub = graph.reachable_from(id)?;

        let end_block_id = match find_terminal(&sub).ends.as_slice() {
            [only] => Some(only.id.clone()),
            _ => None,
        };
        let connections = sub
            .blocks()
            .iter()
            .flat_map(|block| {
                sub.successors(&block.id)
                    .map(move |next| ConnectionRecord::new(&block.id, &next.id))
            })
            .collect();

        Some(Self {
            parent_block_id: id.to_string(),
            start_block_id: id.to_string(),
            end_block_id,
            blocks: sub.blocks().to_vec(),
            connections,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl RoadmapDefinition {
    /// Parses a `{ "blocks": [...], "connections": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let query: PathQuery = serde_json::from_str(json)?;
        Ok(PathQuery::new(&query.start, &query.end, query.depth))
    }

    /// Loads a roadmap document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = read(path)?;
        Self::from_json(&content)
    }

    /// Loads blocks and connections from two JSON array files, the shape the
    /// row store exports them in.
    pub fn from_files(blocks_path: &str, connections_path: &str) -> Result<Self, LoadError> {
        let blocks: Vec<BlockRecord> = serde_json::from_str(&read(blocks_path)?)?;
        let connections: Vec<ConnectionRecord> = serde_json::from_str(&read(connections_path)?)?;
        Ok(Self {
            blocks,
            connections,
        })
    }

    /// Fails with [`LoadError::Unavailable`] when the source yielded no blocks at all.
    pub fn require_blocks(self) -> Result<Self, LoadError> {
        if self.blocks.is_empty() {
            return Err(LoadError::Unavailable(
                "the data source contains no blocks".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn read(path: &str) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}
