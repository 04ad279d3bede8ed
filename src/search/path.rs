use crate::graph::BlockId;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered walk of block ids along forward edges.
///
/// Serialises as a bare JSON array of ids, the shape path-finding responses use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<BlockId>);

impl Path {
    pub fn new(ids: Vec<BlockId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[BlockId] {
        &self.0
    }

    pub fn into_ids(self) -> Vec<BlockId> {
        self.0
    }

    /// Number of blocks on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|step| step == id)
    }

    /// True when no block appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = AHashSet::with_capacity(self.0.len());
        self.0.iter().all(|id| seen.insert(id.as_str()))
    }
}

impl From<Vec<BlockId>> for Path {
    fn from(ids: Vec<BlockId>) -> Self {
        Self(ids)
    }
}

impl From<Vec<&str>> for Path {
    fn from(ids: Vec<&str>) -> Self {
        Self(ids.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}
