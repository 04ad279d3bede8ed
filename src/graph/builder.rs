use super::{Block, BlockId, Graph};
use crate::error::RecordConversionError;
use crate::record::{BlockRecord, ConnectionRecord, IntoRoadmap};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::{debug, warn};

/// Builds a [`Graph`] from flat block and connection records.
///
/// The builder is the single place where loosely-typed records are
/// normalised: missing estimates become zero, repeated ids in id lists are
/// collapsed, and every connection is folded into its source block's
/// `forward_connections` (and its target's `prerequisites`). Connections that
/// name an unknown block are dropped with a warning.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    blocks: Vec<BlockRecord>,
    connections: Vec<ConnectionRecord>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from any record source that implements [`IntoRoadmap`].
    pub fn from_definition(source: impl IntoRoadmap) -> Result<Self, RecordConversionError> {
        let definition = source.into_roadmap()?;
        Ok(Self {
            blocks: definition.blocks,
            connections: definition.connections,
        })
    }

    pub fn with_block(mut self, block: BlockRecord) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = BlockRecord>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn with_connection(mut self, connection: ConnectionRecord) -> Self {
        self.connections.push(connection);
        self
    }

    pub fn with_connections(
        mut self,
        connections: impl IntoIterator<Item = ConnectionRecord>,
    ) -> Self {
        self.connections.extend(connections);
        self
    }

    pub fn build(self) -> Graph {
        let mut blocks: Vec<Block> = Vec::with_capacity(self.blocks.len());
        let mut positions: AHashMap<BlockId, usize> = AHashMap::with_capacity(self.blocks.len());

        for record in self.blocks {
            let block = normalize_block(record);
            match positions.get(&block.id) {
                Some(&existing) => {
                    warn!(block_id = %block.id, "duplicate block id, later record replaces earlier one");
                    blocks[existing] = block;
                }
                None => {
                    positions.insert(block.id.clone(), blocks.len());
                    blocks.push(block);
                }
            }
        }

        let mut dropped = 0usize;
        for connection in &self.connections {
            let (Some(&from), Some(&to)) = (
                positions.get(&connection.from_id),
                positions.get(&connection.to_id),
            ) else {
                warn!(
                    from_id = %connection.from_id,
                    to_id = %connection.to_id,
                    "dropping connection with an unknown endpoint"
                );
                dropped += 1;
                continue;
            };

            if connection.has_overrides() {
                debug!(
                    from_id = %connection.from_id,
                    to_id = %connection.to_id,
                    "ignoring edge-level estimates, block estimates are authoritative"
                );
            }

            push_unique(&mut blocks[from].forward_connections, &connection.to_id);
            push_unique(&mut blocks[to].prerequisites, &connection.from_id);
        }

        let graph = Graph::assemble(blocks, positions);

        debug!(
            blocks = graph.len(),
            edges = graph.edge_count(),
            dropped_connections = dropped,
            dangling_references = graph.dangling_references().len(),
            "roadmap graph built"
        );
        graph
    }
}

/// Builds a graph from block and connection records. Pure and idempotent.
pub fn build(
    blocks: impl IntoIterator<Item = BlockRecord>,
    connections: impl IntoIterator<Item = ConnectionRecord>,
) -> Graph {
    GraphBuilder::new()
        .with_blocks(blocks)
        .with_connections(connections)
        .build()
}

fn normalize_block(record: BlockRecord) -> Block {
    sanitize_block(Block {
        average_time: record.average_time.unwrap_or(0.0),
        cost: record.cost.unwrap_or(0.0),
        prerequisites: record.prerequisites,
        forward_connections: record.forward_connections,
        id: record.id,
        title: record.title,
        category: record.category,
    })
}

/// Clamps invalid estimates to zero and collapses repeated ids, for blocks
/// that reach a graph without passing through [`GraphBuilder`].
pub(crate) fn sanitize_block(block: Block) -> Block {
    let average_time = clamp_estimate(block.average_time, &block.id, "average_time");
    let cost = clamp_estimate(block.cost, &block.id, "cost");
    Block {
        average_time,
        cost,
        prerequisites: block.prerequisites.into_iter().unique().collect(),
        forward_connections: block.forward_connections.into_iter().unique().collect(),
        ..block
    }
}

fn clamp_estimate(value: f64, block_id: &str, field: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(block_id, field, value, "clamping invalid estimate to zero");
        0.0
    }
}

fn push_unique(ids: &mut Vec<BlockId>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}
