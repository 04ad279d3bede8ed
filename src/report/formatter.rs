use crate::graph::Block;
use itertools::Itertools;

/// Separator between block titles in a formatted path.
pub const PATH_ARROW: &str = " → ";

/// Formats paths and estimates into human-readable strings.
pub struct PathFormatter;

impl PathFormatter {
    /// Joins block display names with arrows.
    pub fn format_blocks(blocks: &[&Block]) -> String {
        blocks.iter().map(|block| block.display_name()).join(PATH_ARROW)
    }

    /// Formats a duration estimate, e.g. `"6 months"` or `"0.5 months"`.
    pub fn format_months(value: f64) -> String {
        format!("{} months", Self::format_quantity(value))
    }

    /// Formats a cost estimate, e.g. `"$1325"`.
    pub fn format_cost(value: f64) -> String {
        format!("${}", Self::format_quantity(value))
    }

    /// Drops the fractional part of whole numbers so `6.0` prints as `6`.
    pub fn format_quantity(value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        }
    }
}
