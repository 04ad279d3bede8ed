use super::PathResult;
use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// How candidate paths are ranked for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCriteria {
    /// Shortest total time first.
    #[default]
    Time,
    /// Cheapest total cost first.
    Cost,
    /// Fewest blocks first.
    Steps,
}

/// Orders `results` ascending by `criteria`. Ties keep their enumeration order.
pub fn rank(results: &mut [PathResult], criteria: SortCriteria) {
    match criteria {
        SortCriteria::Time => results.sort_by(|a, b| a.total_time.total_cmp(&b.total_time)),
        SortCriteria::Cost => results.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost)),
        SortCriteria::Steps => results.sort_by_key(PathResult::steps),
    }
}

impl FromStr for SortCriteria {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(SortCriteria::Time),
            "cost" => Ok(SortCriteria::Cost),
            "steps" => Ok(SortCriteria::Steps),
            other => Err(QueryError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortCriteria::Time => "time",
            SortCriteria::Cost => "cost",
            SortCriteria::Steps => "steps",
        };
        write!(f, "{}", name)
    }
}
