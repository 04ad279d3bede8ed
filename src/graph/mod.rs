use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

mod builder;
mod terminal;

pub use builder::{GraphBuilder, build};
pub(crate) use builder::sanitize_block;
pub use terminal::{Terminals, find_terminal};

/// Stable identifier of a block. Integer keys from the row store are carried as text.
pub type BlockId = String;

/// A node of the roadmap: one life or legal status with its estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub title: String,
    pub category: String,
    /// Estimated duration, in months. Never negative.
    pub average_time: f64,
    /// Estimated cost, in currency units. Never negative.
    pub cost: f64,
    /// Informational only; the enumerator never walks these.
    pub prerequisites: Vec<BlockId>,
    /// Outgoing transitions. May name blocks that are not in the graph.
    pub forward_connections: Vec<BlockId>,
}

impl Block {
    /// The title, or the id when the title is blank.
    pub fn display_name(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// An immutable, adjacency-indexed roadmap graph.
///
/// Blocks keep the order in which they were first supplied. Outgoing edges
/// that point at unknown ids stay visible in [`Block::forward_connections`]
/// but are absent from the traversal adjacency, so they are never expanded.
///
/// A `Graph` is never edited in place. When the underlying records change,
/// build a new one and swap references.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    blocks: Vec<Block>,
    index: AHashMap<BlockId, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Assembles a graph from blocks with unique ids.
    ///
    /// Returns the offending id if two blocks share one.
    pub(crate) fn from_unique_blocks(blocks: Vec<Block>) -> Result<Self, BlockId> {
        let mut index = AHashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            if index.insert(block.id.clone(), position).is_some() {
                return Err(block.id.clone());
            }
        }
        Ok(Self::assemble(blocks, index))
    }

    /// `index` must map every block id to its position in `blocks`.
    pub(crate) fn assemble(blocks: Vec<Block>, index: AHashMap<BlockId, usize>) -> Self {
        let adjacency = blocks
            .iter()
            .map(|block| {
                let mut seen = AHashSet::new();
                block
                    .forward_connections
                    .iter()
                    .filter_map(|next| index.get(next).copied())
                    .filter(|next| seen.insert(*next))
                    .collect()
            })
            .collect();

        Self {
            blocks,
            index,
            adjacency,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.index.get(id).map(|&position| &self.blocks[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All blocks, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|block| block.id.as_str())
    }

    /// Number of traversable (non-dangling) edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether `to` is a traversable successor of `from`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from), Some(&to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }

    /// Traversable successors of a block, in `forward_connections` order.
    pub fn successors(&self, id: &str) -> impl Iterator<Item = &Block> {
        self.index
            .get(id)
            .map(|&position| self.adjacency[position].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&next| &self.blocks[next])
    }

    /// `(block, missing target)` pairs for every forward connection that names an unknown id.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.blocks
            .iter()
            .flat_map(|block| {
                block
                    .forward_connections
                    .iter()
                    .filter(|next| !self.contains(next))
                    .map(move |next| (block.id.as_str(), next.as_str()))
            })
            .collect()
    }

    /// The part of the graph reachable from `id` along forward edges, `id` included.
    ///
    /// Retained blocks keep their relative order. Connections and prerequisites
    /// that leave the retained set are dropped. Returns `None` for an unknown id.
    pub fn reachable_from(&self, id: &str) -> Option<Graph> {
        let root = *self.index.get(id)?;

        let mut reached = vec![false; self.blocks.len()];
        let mut queue = VecDeque::from([root]);
        reached[root] = true;
        while let Some(current) = queue.pop_front() {
            for &next in &self.adjacency[current] {
                if !reached[next] {
                    reached[next] = true;
                    queue.push_back(next);
                }
            }
        }

        let retained = |other: &BlockId| self.index.get(other).is_some_and(|&p| reached[p]);
        let blocks = self
            .blocks
            .iter()
            .zip(&reached)
            .filter(|(_, reached)| **reached)
            .map(|(block, _)| Block {
                prerequisites: block
                    .prerequisites
                    .iter()
                    .filter(|p| retained(*p))
                    .cloned()
                    .collect(),
                forward_connections: block
                    .forward_connections
                    .iter()
                    .filter(|f| retained(*f))
                    .cloned()
                    .collect(),
                ..block.clone()
            })
            .collect();

        // Ids were unique in `self`, so a subset is too.
        Graph::from_unique_blocks(blocks).ok()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn block_at(&self, position: usize) -> &Block {
        &self.blocks[position]
    }

    pub(crate) fn adjacent(&self, position: usize) -> &[usize] {
        &self.adjacency[position]
    }
}
