//! Scaffolder configuration
//!
//! An optional `nestgen.toml` tunes how the external OpenAPI generator is
//! invoked and which files of its output count as services. Every field has a
//! default, so an empty or absent file behaves like the stock tool.
//!
//! ```toml
//! [openapi_generator]
//! command = "npx"
//! package = "@openapitools/openapi-generator-cli"
//! generator = "typescript-nestjs"
//! additional_properties = ["controllerStrategy=tags"]
//!
//! [services]
//! marker = ".service"
//! exclude = ["configuration", "variables", "index", "api."]
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to a local OpenAPI document.
pub const CONFIG_FILE_NAME: &str = "nestgen.toml";

/// Overrides `openapi_generator.command` when set.
pub const GENERATOR_BIN_ENV: &str = "NESTGEN_OPENAPI_GENERATOR_BIN";

/// Top-level `nestgen.toml` contents
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NestgenConfig {
    pub openapi_generator: OpenApiGeneratorConfig,
    pub services: ServicesConfig,
}

/// How the external OpenAPI code generator is launched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OpenApiGeneratorConfig {
    /// Executable to run (`npx` by default)
    pub command: String,
    /// Package handed to the executable; empty to run `command` directly
    pub package: String,
    /// Value of `-g`
    pub generator: String,
    /// Joined with `,` into `--additional-properties=`
    pub additional_properties: Vec<String>,
}

impl Default for OpenApiGeneratorConfig {
    fn default() -> Self {
        Self {
            command: "npx".to_string(),
            package: "@openapitools/openapi-generator-cli".to_string(),
            generator: "typescript-nestjs".to_string(),
            additional_properties: vec!["controllerStrategy=tags".to_string()],
        }
    }
}

impl OpenApiGeneratorConfig {
    /// The executable after applying [`GENERATOR_BIN_ENV`].
    #[must_use]
    pub fn resolved_command(&self) -> String {
        std::env::var(GENERATOR_BIN_ENV).unwrap_or_else(|_| self.command.clone())
    }
}

/// Which generated files are treated as services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServicesConfig {
    /// Substring a service file name must contain
    pub marker: String,
    /// Substrings that disqualify a file name
    pub exclude: Vec<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            marker: ".service".to_string(),
            exclude: ["configuration", "variables", "index", "api."]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Load a configuration file.
///
/// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but fails
/// to read or parse.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<NestgenConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let config: NestgenConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Look for `nestgen.toml` in the directory of a local OpenAPI document.
#[must_use]
pub fn auto_detect_config_path(openapi: &str) -> Option<PathBuf> {
    let doc = Path::new(openapi);
    if !doc.is_file() {
        return None;
    }
    let config_path = doc.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI), if it exists
/// 2. Auto-detected next to a local OpenAPI document
/// 3. None (defaults)
#[must_use]
pub fn resolve_config_path(explicit_path: Option<&Path>, openapi: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "config file not found, falling back");
    }

    openapi.and_then(auto_detect_config_path)
}

/// Resolve and load, falling back to defaults when nothing is found.
pub fn load_effective_config(
    explicit_path: Option<&Path>,
    openapi: Option<&str>,
) -> anyhow::Result<NestgenConfig> {
    match resolve_config_path(explicit_path, openapi) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Ok(load_config(&path)?.unwrap_or_default())
        }
        None => Ok(NestgenConfig::default()),
    }
}
