use crate::error::ArtifactError;
use crate::graph::{Block, Graph, sanitize_block};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

const ARTIFACT_VERSION: u32 = 1;

/// A binary snapshot of a built graph.
///
/// Saving keeps the normalised blocks; loading re-normalises them and
/// re-derives the id index and adjacency.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GraphArtifact {
    pub version: u32,
    pub blocks: Vec<Block>,
}

impl GraphArtifact {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            blocks: graph.blocks().to_vec(),
        }
    }

    pub fn into_graph(self) -> Result<Graph, ArtifactError> {
        if self.version != ARTIFACT_VERSION {
            return Err(ArtifactError::Version {
                found: self.version,
                expected: ARTIFACT_VERSION,
            });
        }
        let blocks = self.blocks.into_iter().map(sanitize_block).collect();
        Graph::from_unique_blocks(blocks)
            .map_err(|id| ArtifactError::Decode(format!("Duplicate block id '{}'", id)))
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| ArtifactError::Io {
                path: path.to_string(),
                source,
            })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns (value, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
