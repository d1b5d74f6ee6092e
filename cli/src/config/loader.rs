//! Simple CLI configuration loader for reagent
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./reagent.json or ./.reagent/config.json
//! 3. XDG config: ~/.config/reagent/config.json
//! 4. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use reagent_core::{ModelParams, ResolvedLlmConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Model used when the configuration does not name one
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Base URL used when the configuration does not name one
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// API key (can be "env:VAR_NAME" for environment variable)
    pub api_key: String,
    /// Base URL (optional, defaults to the OpenAI endpoint)
    pub base_url: Option<String>,
    /// Model name (optional, defaults to gpt-4o-mini)
    pub model: Option<String>,
    /// Model parameters (optional)
    #[serde(default)]
    pub params: ModelParams,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    api_key_override: Option<String>,
    base_url_override: Option<String>,
    model_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            api_key_override: None,
            base_url_override: None,
            model_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Load and resolve configuration
    pub fn load(&self) -> Result<ResolvedLlmConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load()?
        };

        // Step 2: Apply flag overrides
        if let Some(api_key) = &self.api_key_override {
            config.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(model) = &self.model_override {
            config.model = Some(model.clone());
        }

        // Step 3: Resolve to final LLM config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    fn search_and_load(&self) -> Result<RawConfig> {
        if let Some(config) = self.try_load_cwd()? {
            return Ok(config);
        }

        if let Some(config) = self.try_load_xdg()? {
            return Ok(config);
        }

        self.load_env_only()
    }

    /// Try loading from current working directory
    fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        let reagent_json = cwd.join("reagent.json");
        if reagent_json.exists() {
            return Ok(Some(self.load_file(&reagent_json)?));
        }

        let dot_config = cwd.join(".reagent").join("config.json");
        if dot_config.exists() {
            return Ok(Some(self.load_file(&dot_config)?));
        }

        Ok(None)
    }

    /// Try loading from the XDG config directory
    fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("reagent").join("config.json");
            if path.exists() {
                return Ok(Some(self.load_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Build a config from environment variables alone
    fn load_env_only(&self) -> Result<RawConfig> {
        let api_key = std::env::var("REAGENT_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| {
                anyhow!(
                    "No API key found. Set REAGENT_API_KEY or OPENAI_API_KEY, \
                     or create a reagent.json config file."
                )
            })?;

        Ok(RawConfig {
            api_key,
            base_url: std::env::var("REAGENT_BASE_URL").ok(),
            model: std::env::var("REAGENT_MODEL").ok(),
            params: ModelParams::default(),
        })
    }

    /// Load a config from an explicit file or directory path
    fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_dir() {
            return self.load_file(&path.join("config.json"));
        }
        self.load_file(path)
    }

    /// Load and parse a single config file
    fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve a raw config into the final validated LLM config
    fn resolve_config(&self, raw: RawConfig) -> Result<ResolvedLlmConfig> {
        let api_key = resolve_api_key(&raw.api_key)?;
        let base_url = raw
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let config = ResolvedLlmConfig::new(base_url, api_key, model).with_params(raw.params);
        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

        Ok(config)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve an `env:VAR_NAME` indirection to the variable's value
fn resolve_api_key(raw: &str) -> Result<String> {
    if let Some(var_name) = raw.strip_prefix("env:") {
        return std::env::var(var_name)
            .map_err(|_| anyhow!("Environment variable '{}' is not set", var_name));
    }
    Ok(raw.to_string())
}
