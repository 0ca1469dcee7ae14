//! Result categories
//!
//! The upstream API selects a vertical with a free-form `type` string. Here it
//! is a closed enum; anything unrecognized falls back to plain web search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of results a request asks for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    /// Web search (organic results, related searches, knowledge graph, answer box)
    #[default]
    Search,
    Images,
    Videos,
    News,
    Places,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Search,
        Category::Images,
        Category::Videos,
        Category::News,
        Category::Places,
    ];

    /// Parse a category name, case-insensitively.
    ///
    /// Empty or unknown names map to [`Category::Search`].
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Wire name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Search => "search",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::News => "news",
            Category::Places => "places",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}
