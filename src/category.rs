//! Presentation lookup: block category to icon key and colour.
//!
//! Purely data-driven. Renderers use it to label nodes; nothing in path
//! finding depends on a block's category.

use serde::Serialize;
use std::fmt;

/// Icon identifiers understood by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    School,
    Work,
    Home,
    Business,
    FlightTakeoff,
    Flag,
    AccountBalance,
    AttachMoney,
    Help,
}

impl IconKey {
    pub fn as_str(self) -> &'static str {
        match self {
            IconKey::School => "school",
            IconKey::Work => "work",
            IconKey::Home => "home",
            IconKey::Business => "business",
            IconKey::FlightTakeoff => "flight_takeoff",
            IconKey::Flag => "flag",
            IconKey::AccountBalance => "account_balance",
            IconKey::AttachMoney => "attach_money",
            IconKey::Help => "help",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub icon: IconKey,
    /// CSS hex colour.
    pub color: &'static str,
}

/// Style for categories the table does not know.
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    icon: IconKey::Help,
    color: "#9e9e9e",
};

const CATEGORY_TABLE: &[(&str, CategoryStyle)] = &[
    ("Status", style(IconKey::Flag, "#4caf50")),
    ("Entry", style(IconKey::FlightTakeoff, "#2196f3")),
    ("Core", style(IconKey::AccountBalance, "#3f51b5")),
    ("Study", style(IconKey::School, "#9c27b0")),
    ("Education", style(IconKey::School, "#9c27b0")),
    ("Work", style(IconKey::Work, "#ff9800")),
    ("Employment", style(IconKey::Work, "#ff9800")),
    ("Economics", style(IconKey::Home, "#00bcd4")),
    ("Housing", style(IconKey::Home, "#00bcd4")),
    ("Business", style(IconKey::Business, "#795548")),
    ("Investment", style(IconKey::Business, "#795548")),
    ("Finance", style(IconKey::AttachMoney, "#8bc34a")),
];

const fn style(icon: IconKey, color: &'static str) -> CategoryStyle {
    CategoryStyle { icon, color }
}

/// Looks up the style for `category`, ignoring ASCII case and surrounding whitespace.
pub fn category_style(category: &str) -> CategoryStyle {
    let key = category.trim();
    CATEGORY_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Every category the table knows, in table order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|(name, _)| *name)
}
