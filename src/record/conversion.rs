use super::definition::RoadmapDefinition;
use crate::error::RecordConversionError;

/// A trait for custom data models that can be converted into a `RoadmapDefinition`.
///
/// This is the seam between whatever row store or export format holds the
/// blocks and the graph builder. Implement it on your own structs to hand
/// them to [`crate::graph::GraphBuilder::from_definition`].
///
/// # Example
///
/// ```rust
/// use roadmap::error::RecordConversionError;
/// use roadmap::record::{BlockRecord, ConnectionRecord, IntoRoadmap, RoadmapDefinition};
///
/// struct Row { key: u32, name: String, next: Option<u32> }
/// struct Table { rows: Vec<Row> }
///
/// impl IntoRoadmap for Table {
///     fn into_roadmap(self) -> Result<RoadmapDefinition, RecordConversionError> {
///         let mut definition = RoadmapDefinition::default();
///         for row in self.rows {
///             if row.name.is_empty() {
///                 return Err(RecordConversionError::ValidationError(format!(
///                     "row {} has no name",
///                     row.key
///                 )));
///             }
///             let id = row.key.to_string();
///             definition.blocks.push(BlockRecord::new(&id, &row.name, "Status", 0.0, 0.0));
///             if let Some(next) = row.next {
///                 definition.connections.push(ConnectionRecord::new(&id, &next.to_string()));
///             }
///         }
///         Ok(definition)
///     }
/// }
/// ```
pub trait IntoRoadmap {
    /// Consumes the object and converts it into roadmap records.
    fn into_roadmap(self) -> Result<RoadmapDefinition, RecordConversionError>;
}

impl IntoRoadmap for RoadmapDefinition {
    fn into_roadmap(self) -> Result<RoadmapDefinition, RecordConversionError> {
        Ok(self)
    }
}
