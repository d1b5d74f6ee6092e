//! Image generation tool backed by the fal.ai queue API
//!
//! Submits the prompt, polls the queue status while logging progress lines,
//! then fetches the completed response and extracts the image URL. Unlike the
//! other tools, every failure here is converted into a textual observation;
//! this tool never returns an error past its own boundary.

use crate::error::{Result, ToolError};
use crate::impl_tool_factory;
use crate::tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Queue endpoint for the Flux Pro model
const FAL_QUEUE_URL: &str = "https://queue.fal.run/fal-ai/flux-pro/v1.1-ultra";

/// Environment variable holding the fal.ai credential
const FAL_KEY_ENV: &str = "FAL_KEY";

/// Delay between queue status polls
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Tool that generates an image from a text prompt
pub struct GenerateImageTool {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct QueueSubmitResponse {
    status_url: String,
    response_url: String,
}

#[derive(Debug, Deserialize)]
struct QueueStatusResponse {
    status: String,
    #[serde(default)]
    logs: Vec<QueueLogEntry>,
}

#[derive(Debug, Deserialize)]
struct QueueLogEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

impl GenerateImageTool {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Format the observation for a completed generation
    fn completion_message(response: ImageResponse) -> String {
        match response.images.into_iter().next() {
            Some(image) => format!("Image generated successfully. URL: {}", image.url),
            None => "Failed to generate image.".to_string(),
        }
    }

    /// Submit the prompt and wait for the queue to complete
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = std::env::var(FAL_KEY_ENV).map_err(|_| ToolError::ExecutionFailed {
            name: "generate_image".to_string(),
            message: format!("{} is not set", FAL_KEY_ENV),
        })?;

        let submit: QueueSubmitResponse = self
            .client
            .post(FAL_QUEUE_URL)
            .header("Authorization", format!("Key {}", api_key))
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Poll until completion, surfacing new progress lines as log output
        let mut logged = 0;
        loop {
            let status: QueueStatusResponse = self
                .client
                .get(&submit.status_url)
                .header("Authorization", format!("Key {}", api_key))
                .query(&[("logs", "1")])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            for entry in status.logs.iter().skip(logged) {
                tracing::info!("generate_image: {}", entry.message);
            }
            logged = status.logs.len();

            if status.status == "COMPLETED" {
                break;
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }

        let response: ImageResponse = self
            .client
            .get(&submit.response_url)
            .header("Authorization", format!("Key {}", api_key))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Self::completion_message(response))
    }
}

#[async_trait]
impl Tool for GenerateImageTool {
    fn name(&self) -> &str {
        "generate_image"
    }

    fn description(&self) -> &str {
        "e.g. generate_image: A beautiful sunset over mountains\n\
         Generates an image based on the provided description using Flux Pro"
    }

    async fn execute(&self, argument: &str) -> Result<String> {
        match self.generate(argument).await {
            Ok(message) => Ok(message),
            Err(e) => Ok(format!("Error generating image: {}", e)),
        }
    }
}

impl Default for GenerateImageTool {
    fn default() -> Self {
        Self::new()
    }
}

impl_tool_factory!(
    GenerateImageToolFactory,
    GenerateImageTool,
    "generate_image",
    "Generate an image from a text prompt"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_message_embeds_url() {
        let body = r#"{"images": [{"url": "https://fal.media/files/abc.png", "width": 1024}]}"#;
        let response: ImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            GenerateImageTool::completion_message(response),
            "Image generated successfully. URL: https://fal.media/files/abc.png"
        );
    }

    #[test]
    fn test_missing_images_reports_failure() {
        let response: ImageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(
            GenerateImageTool::completion_message(response),
            "Failed to generate image."
        );
    }

    #[test]
    fn test_queue_responses_parse() {
        let submit: QueueSubmitResponse = serde_json::from_str(
            r#"{
                "request_id": "abc",
                "status_url": "https://queue.fal.run/status",
                "response_url": "https://queue.fal.run/response",
                "cancel_url": "https://queue.fal.run/cancel"
            }"#,
        )
        .unwrap();
        assert_eq!(submit.status_url, "https://queue.fal.run/status");

        let status: QueueStatusResponse = serde_json::from_str(
            r#"{"status": "IN_PROGRESS", "logs": [{"message": "rendering"}]}"#,
        )
        .unwrap();
        assert_eq!(status.status, "IN_PROGRESS");
        assert_eq!(status.logs.len(), 1);
    }
}
