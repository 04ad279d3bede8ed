use super::formatter::PathFormatter;
use crate::error::PathError;
use crate::graph::{Block, Graph};
use crate::search::Path;
use serde::Serialize;

/// Summed estimates over every block of a path, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMetrics {
    pub total_time: f64,
    pub total_cost: f64,
}

/// A path together with its metrics and display label.
///
/// Derived per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub path: Path,
    pub total_time: f64,
    pub total_cost: f64,
    pub formatted: String,
}

impl PathResult {
    pub fn from_path(graph: &Graph, path: Path) -> Result<Self, PathError> {
        let PathMetrics {
            total_time,
            total_cost,
        } = metrics(graph, &path)?;
        let formatted = format(graph, &path)?;
        Ok(Self {
            path,
            total_time,
            total_cost,
            formatted,
        })
    }

    /// Number of blocks on the path.
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// Sums `average_time` and `cost` over the blocks of `path`.
///
/// # Errors
///
/// `PathError::UnknownBlock` if the path names a block the graph lacks. Paths
/// from the enumerator never do; hitting this means the data model is corrupt.
pub fn metrics(graph: &Graph, path: &Path) -> Result<PathMetrics, PathError> {
    let blocks = resolve(graph, path)?;
    Ok(blocks
        .into_iter()
        .fold(PathMetrics::default(), |acc, block| PathMetrics {
            total_time: acc.total_time + block.average_time,
            total_cost: acc.total_cost + block.cost,
        }))
}

/// Renders `path` as arrow-joined block titles, e.g. `"Visitor → Study → Work Permit Open"`.
///
/// Blocks with a blank title are shown by id.
pub fn format(graph: &Graph, path: &Path) -> Result<String, PathError> {
    Ok(PathFormatter::format_blocks(&resolve(graph, path)?))
}

/// Describes every path, failing on the first one that names an unknown block.
pub fn describe_paths(
    graph: &Graph,
    paths: impl IntoIterator<Item = Path>,
) -> Result<Vec<PathResult>, PathError> {
    paths
        .into_iter()
        .map(|path| PathResult::from_path(graph, path))
        .collect()
}

fn resolve<'g>(graph: &'g Graph, path: &Path) -> Result<Vec<&'g Block>, PathError> {
    path.ids()
        .iter()
        .enumerate()
        .map(|(position, id)| {
            graph.get(id).ok_or_else(|| PathError::UnknownBlock {
                block_id: id.clone(),
                position,
            })
        })
        .collect()
}
