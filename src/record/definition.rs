use serde::{Deserialize, Deserializer, Serialize};

/// The complete, canonical set of records describing a roadmap, ready for graph building.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapDefinition {
    #[serde(default)]
    pub blocks: Vec<BlockRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// A block as it arrives from the row store, before normalisation.
///
/// Numeric estimates are optional; the graph builder treats a missing value as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub average_time: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "ids_from_text_or_number")]
    pub prerequisites: Vec<String>,
    #[serde(default, deserialize_with = "ids_from_text_or_number")]
    pub forward_connections: Vec<String>,
}

impl BlockRecord {
    /// Shorthand for a record with both estimates set and no embedded edges.
    pub fn new(id: &str, title: &str, category: &str, average_time: f64, cost: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            average_time: Some(average_time),
            cost: Some(cost),
            prerequisites: Vec::new(),
            forward_connections: Vec::new(),
        }
    }
}

/// A directed edge record `from_id -> to_id`.
///
/// Edge-level estimates are accepted for schema compatibility but carry no
/// weight in path metrics; block estimates are authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub from_id: String,
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub to_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl ConnectionRecord {
    pub fn new(from_id: &str, to_id: &str) -> Self {
        Self {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            average_time: None,
            cost: None,
        }
    }

    pub(crate) fn has_overrides(&self) -> bool {
        self.average_time.is_some() || self.cost.is_some()
    }
}

/// Row stores hand out ids either as text or as integer keys.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Integer(n) => n.to_string(),
        }
    }
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn ids_from_text_or_number<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawId>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}
