//! Full-text search over Simon Willison's blog via its datasette endpoint

use crate::error::{Result, ToolError};
use crate::impl_tool_factory;
use crate::tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;

/// Datasette endpoint exposing the blog database as JSON
const BLOG_SEARCH_URL: &str = "https://datasette.simonwillison.net/simonwillisonblog.json";

/// Ranked FTS query returning the single best match as "title: excerpt"
const BLOG_SEARCH_SQL: &str = "select
  blog_entry.title || ': ' || substr(html_strip_tags(blog_entry.body), 0, 1000) as text,
  blog_entry.created
from
  blog_entry join blog_entry_fts on blog_entry.rowid = blog_entry_fts.rowid
where
  blog_entry_fts match escape_fts(:q)
order by
  blog_entry_fts.rank
limit
  1";

/// Message returned when the result set is empty
pub const NO_RESULTS_MESSAGE: &str = "No blog entries found matching that search.";

/// Tool that returns the best full-text match from the blog index
pub struct BlogSearchTool {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct BlogHit {
    text: String,
}

impl BlogSearchTool {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Extract the first hit's text, or the fixed no-results message
    fn first_text(hits: Vec<BlogHit>) -> String {
        hits.into_iter()
            .next()
            .map(|hit| hit.text)
            .unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string())
    }
}

#[async_trait]
impl Tool for BlogSearchTool {
    fn name(&self) -> &str {
        "simon_blog_search"
    }

    fn description(&self) -> &str {
        "e.g. simon_blog_search: Django\n\
         Search Simon Willison's blog for that term"
    }

    async fn execute(&self, argument: &str) -> Result<String> {
        let response = self
            .client
            .get(BLOG_SEARCH_URL)
            .query(&[("sql", BLOG_SEARCH_SQL), ("_shape", "array"), ("q", argument)])
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                name: "simon_blog_search".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed {
                name: "simon_blog_search".to_string(),
                message: format!("search request returned HTTP {}", response.status()),
            }
            .into());
        }

        let hits: Vec<BlogHit> =
            response
                .json()
                .await
                .map_err(|e| ToolError::ExecutionFailed {
                    name: "simon_blog_search".to_string(),
                    message: format!("failed to parse search response: {}", e),
                })?;

        Ok(Self::first_text(hits))
    }
}

impl Default for BlogSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    BlogSearchToolFactory,
    BlogSearchTool,
    "simon_blog_search",
    "Full-text search over Simon Willison's blog"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_returns_best_match() {
        let body = r#"[
            {"text": "Django tips: lots of useful tips", "created": "2008-01-01T00:00:00"},
            {"text": "Another entry", "created": "2009-01-01T00:00:00"}
        ]"#;
        let hits: Vec<BlogHit> = serde_json::from_str(body).unwrap();
        assert_eq!(
            BlogSearchTool::first_text(hits),
            "Django tips: lots of useful tips"
        );
    }

    #[test]
    fn test_empty_result_set_yields_fixed_message() {
        let hits: Vec<BlogHit> = serde_json::from_str("[]").unwrap();
        assert_eq!(BlogSearchTool::first_text(hits), NO_RESULTS_MESSAGE);
    }
}
