//! Outgoing request options
//!
//! A plain options record replaces a bag of loosely typed parameters; each
//! field is optional and omitted from the request body when unset.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Optional parameters accepted by the search API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Number of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
    /// Result page, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Country code (e.g. "cn", "us")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
    /// Interface language (e.g. "zh-cn")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocorrect: Option<bool>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num(mut self, num: u32) -> Self {
        self.num = Some(num);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_country(mut self, gl: impl Into<String>) -> Self {
        self.gl = Some(gl.into());
        self
    }

    pub fn with_language(mut self, hl: impl Into<String>) -> Self {
        self.hl = Some(hl.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_type(mut self, search_type: impl Into<String>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }
}

/// Full request body: the query plus its options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
    #[serde(flatten)]
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>, options: SearchOptions) -> Self {
        Self {
            q: q.into(),
            options,
        }
    }

    /// Force the category, overriding any `type` set in the options
    pub fn for_category(mut self, category: Category) -> Self {
        self.options.search_type = Some(category.as_str().to_string());
        self
    }

    /// The requested category; absent or unknown types mean web search
    pub fn category(&self) -> Category {
        self.options
            .search_type
            .as_deref()
            .map(Category::parse)
            .unwrap_or_default()
    }
}
