//! Wikipedia search tool

use crate::error::{Result, ToolError};
use crate::impl_tool_factory;
use crate::tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;

/// Endpoint of the MediaWiki search API
const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Tool that returns the snippet of the top Wikipedia search hit
pub struct WikipediaTool {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: SearchQuery,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    snippet: String,
}

impl WikipediaTool {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Extract the first hit's snippet from a search response
    fn first_snippet(response: SearchResponse, query: &str) -> Result<String> {
        response
            .query
            .search
            .into_iter()
            .next()
            .map(|hit| hit.snippet)
            .ok_or_else(|| {
                ToolError::EmptyResults {
                    name: "wikipedia".to_string(),
                    query: query.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl Tool for WikipediaTool {
    fn name(&self) -> &str {
        "wikipedia"
    }

    fn description(&self) -> &str {
        "e.g. wikipedia: Django\n\
         Returns a summary from searching Wikipedia"
    }

    async fn execute(&self, argument: &str) -> Result<String> {
        let response = self
            .client
            .get(WIKIPEDIA_API_URL)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", argument),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                name: "wikipedia".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ToolError::ExecutionFailed {
                name: "wikipedia".to_string(),
                message: format!("search request returned HTTP {}", response.status()),
            }
            .into());
        }

        let body: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| ToolError::ExecutionFailed {
                    name: "wikipedia".to_string(),
                    message: format!("failed to parse search response: {}", e),
                })?;

        Self::first_snippet(body, argument)
    }
}

impl Default for WikipediaTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    WikipediaToolFactory,
    WikipediaTool,
    "wikipedia",
    "Search Wikipedia and return the top result snippet"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ToolError};

    #[test]
    fn test_first_snippet_extracts_top_hit() {
        let body = r#"{
            "batchcomplete": "",
            "query": {
                "searchinfo": {"totalhits": 2},
                "search": [
                    {"title": "France", "snippet": "France is a country. The capital is Paris."},
                    {"title": "French", "snippet": "Something else."}
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let snippet = WikipediaTool::first_snippet(response, "France").unwrap();
        assert_eq!(snippet, "France is a country. The capital is Paris.");
    }

    #[test]
    fn test_empty_search_is_an_error() {
        let body = r#"{"query": {"search": []}}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let result = WikipediaTool::first_snippet(response, "qzxv");
        assert!(matches!(
            result,
            Err(Error::Tool(ToolError::EmptyResults { .. }))
        ));
    }
}
