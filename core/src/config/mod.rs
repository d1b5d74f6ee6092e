//! Configuration types for Reagent core

pub mod types;

pub use types::{ModelParams, ResolvedLlmConfig};
