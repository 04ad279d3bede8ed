use crate::error::QueryError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the number of edges (hops) in an enumerated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaxDepth {
    /// No hop limit. The walk still terminates because paths never repeat a block.
    #[default]
    Unbounded,
    Hops(usize),
}

impl MaxDepth {
    /// The `-1` sentinel used on the wire.
    pub const UNBOUNDED_SENTINEL: i64 = -1;

    /// Whether a path that already has `hops` edges may take one more.
    pub(crate) fn allows_step_from(self, hops: usize) -> bool {
        match self {
            MaxDepth::Unbounded => true,
            MaxDepth::Hops(max) => hops < max,
        }
    }

    pub fn as_wire(self) -> i64 {
        match self {
            MaxDepth::Unbounded => Self::UNBOUNDED_SENTINEL,
            MaxDepth::Hops(max) => i64::try_from(max).unwrap_or(i64::MAX),
        }
    }
}

impl TryFrom<i64> for MaxDepth {
    type Error = QueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Self::UNBOUNDED_SENTINEL => Ok(MaxDepth::Unbounded),
            v if v >= 0 => usize::try_from(v)
                .map(MaxDepth::Hops)
                .map_err(|_| QueryError::DepthOutOfRange(v)),
            v => Err(QueryError::DepthOutOfRange(v)),
        }
    }
}

impl FromStr for MaxDepth {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| QueryError::InvalidDepth(trimmed.to_string()))?;
        MaxDepth::try_from(value)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Unbounded => write!(f, "unbounded"),
            MaxDepth::Hops(max) => write!(f, "{}", max),
        }
    }
}

/// On the wire a depth is an integer or a numeric string, `-1` meaning unbounded.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDepth {
    Integer(i64),
    Text(String),
}

impl Serialize for MaxDepth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for MaxDepth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawDepth::deserialize(deserializer)? {
            RawDepth::Integer(value) => MaxDepth::try_from(value),
            RawDepth::Text(text) => text.parse::<MaxDepth>(),
        }
        .map_err(D::Error::custom)
    }
}
