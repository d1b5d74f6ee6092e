//! Tool system: trait, registry, executor, and the built-in tools

pub mod base;
pub mod builtin;
pub mod registry;

pub use base::{Tool, ToolExecutor, ToolResult};
pub use registry::{ToolFactory, ToolRegistry};
