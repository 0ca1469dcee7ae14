//! Response types for the search API
//!
//! These mirror the JSON shape of the upstream Serper API. Every optional
//! section is omitted when empty so that synthesized payloads look like real
//! ones, and defaulted on input so that real payloads decode into the same
//! types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::Category;

/// Engine name echoed in every response
pub const ENGINE: &str = "google";

/// Echo of the request that produced a result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// The query, verbatim
    pub q: String,
    /// The normalized category
    #[serde(rename = "type", default)]
    pub search_type: Category,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub engine: String,
}

/// Root response object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub search_parameters: SearchParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_box: Option<AnswerBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organic: Vec<OrganicResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_searches: Vec<RelatedSearch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<VideoResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub news: Vec<NewsResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub places: Vec<PlaceResult>,
    /// Set by the transport layer on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    /// Create an empty result echoing the given query and category
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            search_parameters: SearchParameters {
                q: query.into(),
                search_type: category,
                engine: ENGINE.to_string(),
            },
            ..Default::default()
        }
    }

    /// The category this result was generated for
    pub fn category(&self) -> Category {
        self.search_parameters.search_type
    }

    /// Drop the web-only sections (organic, knowledge graph, answer box)
    /// unless this is a plain web search result.
    pub fn retain_category(mut self) -> Self {
        if self.category() != Category::Search {
            self.organic.clear();
            self.knowledge_graph = None;
            self.answer_box = None;
        }
        self
    }
}

/// Direct answer shown for definitional queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerBox {
    pub title: String,
    pub answer: String,
    pub snippet: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Structured summary block attached to some web results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraph {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub description_source: String,
    pub description_link: String,
    /// Ordered list of single-entry maps
    #[serde(default)]
    pub attributes: Vec<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A single organic web result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganicResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// 1-based rank
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitelinks: Vec<SiteLink>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// Secondary link under an organic result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSearch {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub title: String,
    pub link: String,
    pub image_url: String,
    pub source: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub title: String,
    pub link: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub date: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub title: String,
    pub address: String,
    pub rating: f64,
    pub reviews: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
