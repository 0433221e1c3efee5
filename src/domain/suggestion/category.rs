//! Suggestion categories and their highlight colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker color for categories outside the known set.
pub const FALLBACK_HIGHLIGHT: &str = "rgba(147, 51, 234, 0.3)";

/// What kind of problem a suggestion addresses.
///
/// Categories the model invents are kept verbatim as `Other` so they can
/// still be listed and highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Grammar,
    Spelling,
    Punctuation,
    Style,
    Clarity,
    Other(String),
}

impl Category {
    /// The known categories in display order.
    pub fn known() -> [Category; 5] {
        [
            Category::Grammar,
            Category::Spelling,
            Category::Punctuation,
            Category::Style,
            Category::Clarity,
        ]
    }

    /// Wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Grammar => "grammar",
            Category::Spelling => "spelling",
            Category::Punctuation => "punctuation",
            Category::Style => "style",
            Category::Clarity => "clarity",
            Category::Other(name) => name,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Category::Grammar => "Grammar",
            Category::Spelling => "Spelling",
            Category::Punctuation => "Punctuation",
            Category::Style => "Style",
            Category::Clarity => "Clarity",
            Category::Other(name) => name,
        }
    }

    /// Background color of the highlight marker.
    pub fn highlight_color(&self) -> &'static str {
        match self {
            Category::Grammar => "rgba(59, 130, 246, 0.3)",
            Category::Spelling => "rgba(239, 68, 68, 0.3)",
            Category::Punctuation => "rgba(245, 158, 11, 0.3)",
            Category::Style => "rgba(34, 197, 94, 0.3)",
            Category::Clarity => "rgba(99, 102, 241, 0.3)",
            Category::Other(_) => FALLBACK_HIGHLIGHT,
        }
    }

    /// Returns true for categories outside the known set.
    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "grammar" => Category::Grammar,
            "spelling" => Category::Spelling,
            "punctuation" => Category::Punctuation,
            "style" => Category::Style,
            "clarity" => Category::Clarity,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category selection for listing suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if the category passes the filter.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(value))
        }
    }
}
