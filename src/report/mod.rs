mod formatter;
mod metrics;
mod sort;

pub use formatter::{PATH_ARROW, PathFormatter};
pub use metrics::{PathMetrics, PathResult, describe_paths, format, metrics};
pub use sort::{SortCriteria, rank};
