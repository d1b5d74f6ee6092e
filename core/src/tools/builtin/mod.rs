//! Built-in tools for the ReAct loop

pub mod blog_search;
pub mod calculate;
pub mod image;
pub mod wikipedia;

pub use blog_search::{BlogSearchTool, BlogSearchToolFactory};
pub use calculate::{CalculateTool, CalculateToolFactory};
pub use image::{GenerateImageTool, GenerateImageToolFactory};
pub use wikipedia::{WikipediaTool, WikipediaToolFactory};
